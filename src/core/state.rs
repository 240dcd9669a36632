//! Game state for a single session.
//!
//! ## GameState
//!
//! - Turn number and phase
//! - Zone manager (card locations) and the card records
//! - Resource ledger and aggregate stats
//! - RNG for shuffles, id allocator
//! - Action history and the queue of events not yet published
//!
//! The rules functions in `crate::rules` take `&mut GameState` explicitly;
//! there is no ambient game.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::entity::{EntityAllocator, EntityId};
use super::error::{GameError, GameResult};
use super::resources::ResourceLedger;
use super::rng::GameRng;
use crate::cards::{Card, CardCatalog};
use crate::events::GameEvent;
use crate::zones::{Zone, ZoneManager};

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Play,
    Buy,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Play => "play",
            Phase::Buy => "buy",
        })
    }
}

/// Aggregate campaign stats.
///
/// Declared for future rules; no core operation changes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub cities_cured: u32,
    pub outbreaks: u32,
    pub max_outbreaks: u32,
    pub toxic_waste: u32,
    pub max_toxic_waste: u32,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            cities_cured: 0,
            outbreaks: 0,
            max_outbreaks: 8,
            toxic_waste: 0,
            max_toxic_waste: 10,
        }
    }
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Turn number (starts at 1).
    pub turn: u32,

    pub phase: Phase,

    /// Resources accumulated this turn.
    pub ledger: ResourceLedger,

    pub stats: GameStats,

    /// Card locations.
    pub zones: ZoneManager,

    /// Card records by id.
    cards: FxHashMap<EntityId, Card>,

    ids: EntityAllocator,

    /// Shuffle stream.
    pub rng: GameRng,

    /// Commands applied so far.
    pub history: Vector<ActionRecord>,

    /// Action sequence within turn.
    action_sequence: u32,

    /// Events raised since the last drain.
    pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Create an empty game state on turn 1 in the play phase.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            turn: 1,
            phase: Phase::Play,
            ledger: ResourceLedger::new(),
            stats: GameStats::default(),
            zones: ZoneManager::new(),
            cards: FxHashMap::default(),
            ids: EntityAllocator::new(),
            rng,
            history: Vector::new(),
            action_sequence: 0,
            pending_events: Vec::new(),
        }
    }

    /// Convenience constructor from a seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    // === Cards ===

    /// Stamp a new card from the catalog and place it in `zone`.
    pub fn spawn_card(&mut self, catalog: &CardCatalog, key: &str, zone: Zone) -> GameResult<EntityId> {
        // The id is only taken once the key is known to exist
        let card = catalog.instantiate(key, self.ids.next_id())?;
        let id = self.ids.alloc();
        self.cards.insert(id, card);
        self.zones.add_to_zone(id, zone);
        Ok(id)
    }

    /// Get a card record.
    #[must_use]
    pub fn card(&self, id: EntityId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card record, or `NotFound`.
    pub fn card_or_err(&self, id: EntityId) -> GameResult<&Card> {
        self.card(id).ok_or_else(|| GameError::not_found(id))
    }

    /// Card records in a zone, in zone order.
    pub fn cards_in(&self, zone: Zone) -> impl Iterator<Item = &Card> + '_ {
        self.zones.cards(zone).iter().filter_map(|id| self.cards.get(id))
    }

    /// Number of cards ever instantiated.
    #[must_use]
    pub fn cards_created(&self) -> usize {
        self.ids.allocated()
    }

    /// Sum of all four zone sizes.
    #[must_use]
    pub fn cards_in_zones(&self) -> usize {
        Zone::ALL.iter().map(|&z| self.zones.zone_size(z)).sum()
    }

    // === Hand ===

    #[must_use]
    pub fn hand(&self) -> &[EntityId] {
        self.zones.cards(Zone::Hand)
    }

    /// The card at a hand position, or `NotFound`.
    pub fn hand_card_at(&self, position: usize) -> GameResult<EntityId> {
        self.hand()
            .get(position)
            .copied()
            .ok_or_else(|| GameError::not_found(format_args!("hand position {position}")))
    }

    // === Turn Advancement ===

    /// Advance to the next turn in the play phase.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
        self.phase = Phase::Play;
        self.ledger.reset();
        self.action_sequence = 0;
    }

    /// Fail with `InvalidPhase` unless the current phase is `expected`.
    pub fn require_phase(&self, expected: Phase) -> GameResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    // === Action History ===

    /// Record an applied command in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    // === Events ===

    pub fn emit(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Take every event raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.pending_events
    }
}
