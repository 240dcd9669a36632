//! Market and card acquisition.
//!
//! The market is a fixed row of slots. Each slot names the catalog key it
//! sells and its credit cost; buying stamps a fresh card from the catalog
//! straight into the discard.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{Card, CardCatalog};
use crate::core::config::MarketSlot;
use crate::core::error::{GameError, GameResult};
use crate::core::state::GameState;
use crate::events::GameEvent;
use crate::zones::Zone;

/// Outcome of a purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquireReport {
    /// The new card, now on top of the discard.
    pub card: Card,

    pub cost: u32,

    /// Market slot it was bought from, if any.
    pub slot: Option<usize>,
}

/// The row of purchasable slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    slots: Vec<MarketSlot>,
}

impl Market {
    #[must_use]
    pub fn new(slots: Vec<MarketSlot>) -> Self {
        Self { slots }
    }

    /// Get a slot, or `NotFound`.
    pub fn slot(&self, index: usize) -> GameResult<&MarketSlot> {
        self.slots
            .get(index)
            .ok_or_else(|| GameError::not_found(format_args!("market slot {index}")))
    }

    #[must_use]
    pub fn slots(&self) -> &[MarketSlot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Indices of slots costing at most `credit`.
    #[must_use]
    pub fn affordable_slots(&self, credit: u32) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.cost <= credit)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Buy one card of kind `key` for `cost` credit into the discard.
///
/// Fails with `NotFound` for an unknown key and `InsufficientFunds` when
/// credit is short; either way nothing changes.
pub fn acquire(state: &mut GameState, catalog: &CardCatalog, key: &str, cost: u32) -> GameResult<AcquireReport> {
    catalog.get(key)?;
    state.ledger.spend_credit(cost)?;

    let id = state.spawn_card(catalog, key, Zone::Discard)?;
    let card = state.card_or_err(id)?.clone();

    info!(card = %card, cost, credit_left = state.ledger.credit, "bought card");
    state.emit(GameEvent::CardAcquired {
        card: id,
        key: card.key.clone(),
        name: card.name.clone(),
        cost,
    });

    Ok(AcquireReport { card, cost, slot: None })
}

/// Buy the card offered in market slot `index`.
pub fn acquire_slot(
    state: &mut GameState,
    catalog: &CardCatalog,
    market: &Market,
    index: usize,
) -> GameResult<AcquireReport> {
    let slot = market.slot(index)?;
    let mut report = acquire(state, catalog, slot.key.as_str(), slot.cost)?;
    report.slot = Some(index);
    Ok(report)
}
