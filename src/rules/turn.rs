//! Turn and phase lifecycle.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::deck::{self, DrawReport};
use crate::core::entity::EntityId;
use crate::core::state::{GameState, Phase};
use crate::events::GameEvent;
use crate::zones::Zone;

/// Outcome of ending a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The turn that just started.
    pub turn: u32,

    /// Cards swept into the discard: played first, then hand.
    pub discarded: Vec<EntityId>,

    /// The new hand's draw.
    pub draw: DrawReport,
}

/// Finish the current turn and start the next one.
///
/// Played then hand go to the discard (keeping their order), the ledger is
/// zeroed, the turn number increases, the phase returns to play, and a fresh
/// hand of `hand_size` is drawn. Never fails; a short deck just yields a
/// smaller hand.
pub fn end_turn(state: &mut GameState, hand_size: usize) -> TurnReport {
    let mut discarded = state.zones.move_all(Zone::Played, Zone::Discard);
    discarded.extend(state.zones.move_all(Zone::Hand, Zone::Discard));
    state.emit(GameEvent::CardsDiscarded {
        cards: discarded.clone(),
    });

    state.advance_turn();
    info!(turn = state.turn, discarded = discarded.len(), "turn started");
    state.emit(GameEvent::TurnStarted { turn: state.turn });

    let draw = deck::draw(state, hand_size);
    TurnReport {
        turn: state.turn,
        discarded,
        draw,
    }
}

/// Move from the play phase to the buy phase.
///
/// Returns `false` if already in the buy phase.
pub fn begin_buy_phase(state: &mut GameState) -> bool {
    if state.phase == Phase::Buy {
        return false;
    }
    state.phase = Phase::Buy;
    info!(turn = state.turn, "buy phase");
    state.emit(GameEvent::PhaseChanged { phase: Phase::Buy });
    true
}
