//! Game event types.
//!
//! Events describe what a core operation did, in the order it did it. They
//! are queued on the `GameState` while an operation runs and handed to the
//! rendering side afterwards, so presentation never observes a half-applied
//! action.
//!
//! `DiscardRecycled` doubles as the "clear discard annotation" notification:
//! every id it lists has just left the discard for the deck.

use serde::{Deserialize, Serialize};

use crate::cards::CatalogKey;
use crate::core::entity::EntityId;
use crate::core::resources::Effects;
use crate::core::state::Phase;

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// The deck was shuffled.
    DeckShuffled { cards: usize },

    /// The whole discard moved into the (empty) deck, prior to a shuffle.
    DiscardRecycled { cards: Vec<EntityId> },

    /// The top card of the deck moved into hand.
    CardDrawn { card: EntityId },

    /// A draw stopped early because deck and discard were both empty.
    DrawExhausted { requested: usize, drawn: usize },

    /// A card moved from hand to played and its effects were applied.
    CardPlayed {
        card: EntityId,
        name: String,
        effects: Effects,
    },

    /// A new card was bought into the discard.
    CardAcquired {
        card: EntityId,
        key: CatalogKey,
        name: String,
        cost: u32,
    },

    /// Played and hand cards were swept into the discard at end of turn.
    CardsDiscarded { cards: Vec<EntityId> },

    /// A new turn began.
    TurnStarted { turn: u32 },

    PhaseChanged { phase: Phase },

    AutoplayStarted,

    AutoplayStopped,
}

impl GameEvent {
    /// Ids whose discard annotation must be dropped, if this event moves
    /// cards out of the discard.
    #[must_use]
    pub fn leaves_discard(&self) -> Option<&[EntityId]> {
        match self {
            GameEvent::DiscardRecycled { cards } => Some(cards),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    /// A short user-facing message.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::DeckShuffled { .. } => write!(f, "Deck shuffled"),
            GameEvent::DiscardRecycled { .. } => write!(f, "Shuffled discard pile into deck"),
            GameEvent::CardDrawn { card } => write!(f, "Drew {card}"),
            GameEvent::DrawExhausted { .. } => write!(f, "No cards to draw!"),
            GameEvent::CardPlayed { name, effects, .. } => write!(f, "Played {name}: {effects}"),
            GameEvent::CardAcquired { name, cost, .. } => write!(f, "Bought {name} for {cost} credit"),
            GameEvent::CardsDiscarded { cards } => write!(f, "Discarded {} cards", cards.len()),
            GameEvent::TurnStarted { turn } => write!(f, "Turn {turn}"),
            GameEvent::PhaseChanged { phase } => write!(f, "Entering {phase} phase"),
            GameEvent::AutoplayStarted => write!(f, "Autoplay started..."),
            GameEvent::AutoplayStopped => write!(f, "Autoplay stopped"),
        }
    }
}

/// Receives events as a session publishes them.
pub trait EventListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventListener for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
