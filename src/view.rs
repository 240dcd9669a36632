//! Rendering-side data.
//!
//! `SessionView` is a serializable snapshot of everything a front end draws.
//! `DiscardAnnotations` holds the scattered look of the discard pile: each
//! card gets a random tilt and offset the first time it is drawn there and
//! keeps it until it leaves the discard. That is presentation state, so it
//! lives here, keyed by card id, and never on the cards themselves.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::MarketSlot;
use crate::core::entity::EntityId;
use crate::core::resources::ResourceLedger;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, GameStats, Phase};
use crate::events::{EventListener, GameEvent};
use crate::rules::Market;
use crate::session::AutoplayState;
use crate::zones::Zone;

/// Snapshot of a session.
///
/// Zones are listed bottom to top, so the last deck card is the next draw and
/// the last discard card is the newest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub turn: u32,
    pub phase: Phase,
    pub ledger: ResourceLedger,
    pub stats: GameStats,

    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    pub played: Vector<Card>,
    pub discard: Vector<Card>,

    pub market: Vec<MarketSlot>,
    pub autoplay: AutoplayState,
}

impl SessionView {
    #[must_use]
    pub fn capture(state: &GameState, market: &Market, autoplay: AutoplayState) -> Self {
        let cards_of = |zone: Zone| -> Vector<Card> {
            state
                .zones
                .cards(zone)
                .iter()
                .filter_map(|&id| state.card(id).cloned())
                .collect()
        };

        Self {
            turn: state.turn,
            phase: state.phase,
            ledger: state.ledger,
            stats: state.stats,
            deck: cards_of(Zone::Deck),
            hand: cards_of(Zone::Hand),
            played: cards_of(Zone::Played),
            discard: cards_of(Zone::Discard),
            market: market.slots().to_vec(),
            autoplay,
        }
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hand.len() + self.played.len() + self.discard.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Tilt and offset of a card lying in the discard pile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Degrees, within ±17.5.
    pub rotation: f32,
    /// Pixels, within ±12.5.
    pub offset_x: f32,
    pub offset_y: f32,
}

const MAX_ROTATION: f32 = 17.5;
const MAX_OFFSET: f32 = 12.5;

/// Per-card discard annotations.
///
/// Subscribe it to a session (or feed it drained events) so that entries are
/// cleared when the discard is recycled into the deck.
#[derive(Clone, Debug)]
pub struct DiscardAnnotations {
    entries: FxHashMap<EntityId, Annotation>,
    rng: GameRng,
}

impl DiscardAnnotations {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            entries: FxHashMap::default(),
            rng,
        }
    }

    /// The card's annotation, assigning one on first request.
    pub fn annotate(&mut self, card: EntityId) -> Annotation {
        let rng = &mut self.rng;
        *self.entries.entry(card).or_insert_with(|| Annotation {
            rotation: rng.gen_range_f32(-MAX_ROTATION..MAX_ROTATION),
            offset_x: rng.gen_range_f32(-MAX_OFFSET..MAX_OFFSET),
            offset_y: rng.gen_range_f32(-MAX_OFFSET..MAX_OFFSET),
        })
    }

    /// Annotate the discard, bottom to top.
    pub fn annotate_discard(&mut self, discard: &[EntityId]) -> Vec<(EntityId, Annotation)> {
        discard.iter().map(|&id| (id, self.annotate(id))).collect()
    }

    #[must_use]
    pub fn get(&self, card: EntityId) -> Option<Annotation> {
        self.entries.get(&card).copied()
    }

    /// Drop the annotations of cards that left the discard.
    pub fn clear(&mut self, cards: &[EntityId]) {
        for card in cards {
            self.entries.remove(card);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EventListener for DiscardAnnotations {
    fn on_event(&mut self, event: &GameEvent) {
        if let Some(cards) = event.leaves_discard() {
            self.clear(cards);
        }
    }
}
