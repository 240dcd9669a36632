//! Deck, hand and discard mechanics.
//!
//! - Shuffling the deck
//! - Drawing, including recycling the discard into an empty deck
//! - Playing cards from hand and applying their effects
//!
//! Every fallible function validates before it mutates, so an `Err` always
//! leaves the state exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::entity::EntityId;
use crate::core::error::{GameError, GameResult};
use crate::core::resources::Effects;
use crate::core::state::{GameState, Phase};
use crate::events::GameEvent;
use crate::zones::Zone;

/// Outcome of a multi-card draw.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    pub requested: usize,

    /// Ids drawn, in draw order.
    pub drawn: Vec<EntityId>,

    /// Times the discard was recycled into the deck during this draw.
    pub recycles: usize,

    /// The draw stopped early because deck and discard were both empty.
    pub exhausted: bool,
}

impl DrawReport {
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }
}

/// Outcome of playing one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReport {
    pub card: EntityId,

    /// Resource deltas applied to the ledger.
    pub deltas: Effects,
}

/// Outcome of playing the whole hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayAllReport {
    pub plays: Vec<PlayReport>,

    /// Sum of every play's deltas.
    pub totals: Effects,
}

/// Shuffle the deck in place.
pub fn shuffle_deck(state: &mut GameState) {
    state.zones.shuffle_zone(Zone::Deck, &mut state.rng);
    let cards = state.zones.zone_size(Zone::Deck);
    debug!(cards, "deck shuffled");
    state.emit(GameEvent::DeckShuffled { cards });
}

/// Move the entire discard into the deck, then shuffle.
///
/// The discard is empty before the shuffle starts. Returns the moved ids in
/// their former discard order.
fn recycle_discard(state: &mut GameState) -> Vec<EntityId> {
    let moved = state.zones.move_all(Zone::Discard, Zone::Deck);
    debug!(cards = moved.len(), "discard recycled into deck");
    state.emit(GameEvent::DiscardRecycled { cards: moved.clone() });
    shuffle_deck(state);
    moved
}

/// Draw a single card from the top of the deck into hand.
///
/// Recycles the discard first if the deck is empty. Fails with `EmptySource`
/// (and changes nothing) when both are empty.
pub fn draw_one(state: &mut GameState) -> GameResult<EntityId> {
    draw_one_inner(state).map(|(card, _)| card)
}

fn draw_one_inner(state: &mut GameState) -> GameResult<(EntityId, bool)> {
    let mut recycled = false;
    if state.zones.is_empty(Zone::Deck) {
        if state.zones.is_empty(Zone::Discard) {
            return Err(GameError::EmptySource);
        }
        recycle_discard(state);
        recycled = true;
    }

    let card = state.zones.move_top(Zone::Deck, Zone::Hand).ok_or(GameError::EmptySource)?;
    debug!(%card, "drew card");
    state.emit(GameEvent::CardDrawn { card });
    Ok((card, recycled))
}

/// Draw up to `count` cards, one at a time.
///
/// Stops early, without failing, once deck and discard are both exhausted.
pub fn draw(state: &mut GameState, count: usize) -> DrawReport {
    let mut report = DrawReport {
        requested: count,
        ..DrawReport::default()
    };

    for _ in 0..count {
        match draw_one_inner(state) {
            Ok((card, recycled)) => {
                report.drawn.push(card);
                report.recycles += usize::from(recycled);
            }
            Err(_) => {
                report.exhausted = true;
                debug!(requested = count, drawn = report.drawn.len(), "no cards to draw");
                state.emit(GameEvent::DrawExhausted {
                    requested: count,
                    drawn: report.drawn.len(),
                });
                break;
            }
        }
    }

    report
}

/// Play a card from hand: move it to played and apply its effects.
pub fn play(state: &mut GameState, card: EntityId) -> GameResult<PlayReport> {
    state.require_phase(Phase::Play)?;
    if !state.zones.is_in_zone(card, Zone::Hand) {
        return Err(GameError::not_found(format_args!("{card} in hand")));
    }
    let record = state.card_or_err(card)?;
    let deltas = record.effects.clone();
    let name = record.name.clone();

    state.zones.move_to_zone(card, Zone::Played);
    state.ledger.apply(&deltas);

    debug!(%card, %name, %deltas, "played card");
    state.emit(GameEvent::CardPlayed {
        card,
        name,
        effects: deltas.clone(),
    });

    Ok(PlayReport { card, deltas })
}

/// Play the card at a hand position.
pub fn play_at(state: &mut GameState, position: usize) -> GameResult<PlayReport> {
    state.require_phase(Phase::Play)?;
    let card = state.hand_card_at(position)?;
    play(state, card)
}

/// Play every card in hand, in hand order.
pub fn play_all(state: &mut GameState) -> GameResult<PlayAllReport> {
    state.require_phase(Phase::Play)?;

    let mut report = PlayAllReport::default();
    while let Some(&card) = state.hand().first() {
        let played = play(state, card)?;
        for (kind, amount) in played.deltas.iter() {
            report.totals.add(kind, amount);
        }
        report.plays.push(played);
    }

    Ok(report)
}
