//! Resources: kinds, card effects, and the per-turn ledger.
//!
//! Playing a card adds its `Effects` to the `ResourceLedger`; acquisitions
//! spend credit from it; the turn controller zeroes it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, GameResult};

/// The three resources a turn accumulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Credit,
    Treat,
    Scout,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Credit, ResourceKind::Treat, ResourceKind::Scout];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Credit => "credit",
            ResourceKind::Treat => "treat",
            ResourceKind::Scout => "scout",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource amounts granted by a card, in definition order.
///
/// Cards grant one or two resources, so entries live inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effects(SmallVec<[(ResourceKind, u32); 2]>);

impl Effects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount for a resource (builder pattern).
    ///
    /// Amounts for a kind that is already present are summed.
    #[must_use]
    pub fn with(mut self, kind: ResourceKind, amount: u32) -> Self {
        self.add(kind, amount);
        self
    }

    /// Add an amount for a resource.
    pub fn add(&mut self, kind: ResourceKind, amount: u32) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == kind) {
            entry.1 += amount;
        } else {
            self.0.push((kind, amount));
        }
    }

    /// Amount granted for `kind` (zero if absent).
    #[must_use]
    pub fn get(&self, kind: ResourceKind) -> u32 {
        self.0
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Effects {
    /// Renders as `+1 credit +1 scout`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (kind, amount)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "+{amount} {kind}")?;
        }
        Ok(())
    }
}

impl FromIterator<(ResourceKind, u32)> for Effects {
    fn from_iter<I: IntoIterator<Item = (ResourceKind, u32)>>(iter: I) -> Self {
        let mut effects = Effects::new();
        for (kind, amount) in iter {
            effects.add(kind, amount);
        }
        effects
    }
}

/// Per-turn resource counters.
///
/// Unsigned counters keep every value non-negative; spending is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceLedger {
    pub credit: u32,
    pub treat: u32,
    pub scout: u32,
}

impl ResourceLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Credit => self.credit,
            ResourceKind::Treat => self.treat,
            ResourceKind::Scout => self.scout,
        }
    }

    fn slot_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Credit => &mut self.credit,
            ResourceKind::Treat => &mut self.treat,
            ResourceKind::Scout => &mut self.scout,
        }
    }

    /// Add every amount in `effects` to the matching counter.
    pub fn apply(&mut self, effects: &Effects) {
        for (kind, amount) in effects.iter() {
            *self.slot_mut(kind) += amount;
        }
    }

    /// Deduct `cost` credit, refusing without mutation if there is not enough.
    pub fn spend_credit(&mut self, cost: u32) -> GameResult<()> {
        if self.credit < cost {
            return Err(GameError::InsufficientFunds {
                cost,
                available: self.credit,
            });
        }
        self.credit -= cost;
        Ok(())
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
