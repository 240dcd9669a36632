//! Session configuration.
//!
//! A session is configured at startup with:
//! - the starting deck composition
//! - the opening/turn hand size
//! - the market slots on offer
//! - autoplay tuning
//!
//! `SessionConfig::default()` reproduces the base game. Configurations can be
//! built in code with the `with_*` methods or loaded from JSON; missing
//! fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use crate::cards::{CardCatalog, CatalogKey};

/// `count` copies of a catalog card in the starting deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub key: CatalogKey,
    pub count: usize,
}

impl DeckEntry {
    #[must_use]
    pub fn new(key: impl Into<CatalogKey>, count: usize) -> Self {
        Self { key: key.into(), count }
    }
}

/// A purchasable market slot: which card it sells and for how much credit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSlot {
    pub key: CatalogKey,
    pub cost: u32,
}

impl MarketSlot {
    #[must_use]
    pub fn new(key: impl Into<CatalogKey>, cost: u32) -> Self {
        Self { key: key.into(), cost }
    }
}

/// Autoplay tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    /// Cadence for the collaborator's step timer, in milliseconds.
    pub interval_ms: u64,

    /// Chance of buying when the hand is empty and something is affordable.
    pub buy_probability: f64,

    /// Hold further steps until the collaborator reports that the previous
    /// step's presentation has finished.
    pub await_presentation: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: 800,
            buy_probability: 0.7,
            await_presentation: true,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Cards drawn at session start and at every end of turn.
    pub hand_size: usize,

    pub starting_deck: Vec<DeckEntry>,

    pub market: Vec<MarketSlot>,

    pub autoplay: AutoplayConfig,

    /// Only allow acquisitions during the buy phase.
    pub acquire_requires_buy_phase: bool,

    /// A human ending the turn also stops autoplay.
    pub stop_autoplay_on_manual_end_turn: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hand_size: 5,
            starting_deck: vec![
                DeckEntry::new("credit", 7),
                DeckEntry::new("treat", 2),
                DeckEntry::new("scout", 1),
            ],
            market: vec![
                MarketSlot::new("advancedTreat", 3),
                MarketSlot::new("researcher", 2),
                MarketSlot::new("decontamination", 3),
                MarketSlot::new("medic", 5),
            ],
            autoplay: AutoplayConfig::default(),
            acquire_requires_buy_phase: false,
            stop_autoplay_on_manual_end_turn: true,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> GameResult<Self> {
        serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_starting_deck(mut self, entries: Vec<DeckEntry>) -> Self {
        self.starting_deck = entries;
        self
    }

    #[must_use]
    pub fn with_market(mut self, slots: Vec<MarketSlot>) -> Self {
        self.market = slots;
        self
    }

    #[must_use]
    pub fn with_autoplay(mut self, autoplay: AutoplayConfig) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Gate acquisitions on the buy phase.
    #[must_use]
    pub fn acquire_in_buy_phase_only(mut self) -> Self {
        self.acquire_requires_buy_phase = true;
        self
    }

    #[must_use]
    pub fn keep_autoplay_on_manual_end_turn(mut self) -> Self {
        self.stop_autoplay_on_manual_end_turn = false;
        self
    }

    /// Total cards in the starting deck.
    #[must_use]
    pub fn starting_deck_size(&self) -> usize {
        self.starting_deck.iter().map(|e| e.count).sum()
    }

    /// Check every referenced key against `catalog` and the autoplay tuning.
    pub fn validate(&self, catalog: &CardCatalog) -> GameResult<()> {
        let keys = self
            .starting_deck
            .iter()
            .map(|e| &e.key)
            .chain(self.market.iter().map(|s| &s.key));
        for key in keys {
            if !catalog.contains(key.as_str()) {
                return Err(GameError::Config(format!("unknown card '{key}'")));
            }
        }

        let p = self.autoplay.buy_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(GameError::Config(format!("buy probability {p} outside [0, 1]")));
        }

        Ok(())
    }
}
