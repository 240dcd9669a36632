//! Autoplay policies.
//!
//! A policy only *chooses* a `Command` for the current state; the session
//! applies it through the rules engine. Policies are trait-based so the
//! random heuristic can be swapped for something smarter.

use crate::core::action::Command;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase};
use crate::rules::Market;

/// Chooses the next autoplay command.
pub trait AutoplayPolicy: Send + Sync {
    fn choose(&self, state: &GameState, market: &Market, rng: &mut GameRng) -> Command;
}

/// Uniform-random heuristic.
///
/// Plays a random card while the hand has any (play phase only). Otherwise
/// buys a random affordable card with probability `buy_probability`, or
/// ends the turn.
#[derive(Clone, Debug)]
pub struct RandomAutoplay {
    pub buy_probability: f64,
}

impl RandomAutoplay {
    #[must_use]
    pub fn new(buy_probability: f64) -> Self {
        Self {
            buy_probability: buy_probability.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomAutoplay {
    fn default() -> Self {
        Self::new(0.7)
    }
}

impl AutoplayPolicy for RandomAutoplay {
    fn choose(&self, state: &GameState, market: &Market, rng: &mut GameRng) -> Command {
        if state.phase == Phase::Play {
            if let Some(position) = rng.choose_index(state.hand().len()) {
                return Command::PlayAt(position);
            }
        }

        let affordable = market.affordable_slots(state.ledger.credit);
        if !affordable.is_empty() && rng.gen_bool(self.buy_probability) {
            if let Some(&slot) = rng.choose(&affordable) {
                return Command::Acquire { slot };
            }
        }

        Command::EndTurn
    }
}

/// Always ends the turn.
#[derive(Clone, Copy, Debug, Default)]
pub struct EndTurnOnly;

impl AutoplayPolicy for EndTurnOnly {
    fn choose(&self, _state: &GameState, _market: &Market, _rng: &mut GameRng) -> Command {
        Command::EndTurn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;
    use crate::core::config::SessionConfig;
    use crate::zones::Zone;

    fn market() -> Market {
        Market::new(SessionConfig::default().market)
    }

    #[test]
    fn test_plays_while_hand_non_empty() {
        let catalog = CardCatalog::standard();
        let mut state = GameState::with_seed(1);
        for _ in 0..3 {
            state.spawn_card(&catalog, "credit", Zone::Hand).unwrap();
        }
        state.ledger.credit = 10;

        let policy = RandomAutoplay::default();
        let mut rng = GameRng::new(9);
        for _ in 0..50 {
            match policy.choose(&state, &market(), &mut rng) {
                Command::PlayAt(p) => assert!(p < 3),
                other => panic!("expected PlayAt, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_ends_turn_when_broke() {
        let state = GameState::with_seed(1);
        let policy = RandomAutoplay::new(1.0);
        let mut rng = GameRng::new(9);

        assert_eq!(policy.choose(&state, &market(), &mut rng), Command::EndTurn);
    }

    #[test]
    fn test_buys_only_affordable() {
        let mut state = GameState::with_seed(1);
        state.ledger.credit = 3;
        let policy = RandomAutoplay::new(1.0);
        let mut rng = GameRng::new(9);

        for _ in 0..50 {
            match policy.choose(&state, &market(), &mut rng) {
                Command::Acquire { slot } => assert!(slot < 3, "medic costs 5"),
                other => panic!("expected Acquire, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_zero_probability_never_buys() {
        let mut state = GameState::with_seed(1);
        state.ledger.credit = 10;
        let policy = RandomAutoplay::new(0.0);
        let mut rng = GameRng::new(9);

        for _ in 0..20 {
            assert_eq!(policy.choose(&state, &market(), &mut rng), Command::EndTurn);
        }
    }

    #[test]
    fn test_buy_rate_roughly_matches_probability() {
        let mut state = GameState::with_seed(1);
        state.ledger.credit = 10;
        let policy = RandomAutoplay::default();
        let mut rng = GameRng::new(2024);

        let buys = (0..2000)
            .filter(|_| matches!(policy.choose(&state, &market(), &mut rng), Command::Acquire { .. }))
            .count();
        assert!((1250..1550).contains(&buys), "buys = {buys}");
    }
}
