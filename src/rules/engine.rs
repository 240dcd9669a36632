//! Rules engine: applies commands to a game state.
//!
//! `RulesEngine` is the seam between "what the player wants" (`Command`) and
//! the mechanics in `deck`, `turn` and `market`. `Deckbuilder` is the
//! engine for this game; it owns the catalog, the market and the config, and
//! is stateless with respect to any particular `GameState`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::deck::{self, DrawReport, PlayAllReport, PlayReport};
use super::market::{self, AcquireReport, Market};
use super::turn::{self, TurnReport};
use crate::cards::CardCatalog;
use crate::core::action::{ActionRecord, Actor, Command};
use crate::core::config::SessionConfig;
use crate::core::error::GameResult;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase};
use crate::events::GameEvent;
use crate::zones::Zone;

/// Result of a successfully applied command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "report", rename_all = "snake_case")]
pub enum CommandResult {
    Played(PlayReport),
    PlayedAll(PlayAllReport),
    Drew(DrawReport),
    Acquired(AcquireReport),
    TurnEnded(TurnReport),
    PhaseChanged(Phase),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_command` must be atomic: on `Err` the state is unchanged
/// - `legal_commands` lists the moves a player could make right now; it
///   leaves out `Draw`, which is a collaborator-driven input, not a move
pub trait RulesEngine {
    /// Get the session configuration.
    fn config(&self) -> &SessionConfig;

    /// Commands that would currently succeed.
    fn legal_commands(&self, state: &GameState) -> Vec<Command>;

    /// Apply a command to the game state.
    fn apply_command(&self, state: &mut GameState, actor: Actor, command: Command) -> GameResult<CommandResult>;

    // === Convenience Methods ===

    /// Check whether a command is currently legal.
    fn is_legal(&self, state: &GameState, command: Command) -> bool {
        self.legal_commands(state).contains(&command)
    }
}

/// The deckbuilder rules.
#[derive(Clone, Debug)]
pub struct Deckbuilder {
    config: SessionConfig,
    catalog: CardCatalog,
    market: Market,
}

impl Deckbuilder {
    /// Create the engine, validating `config` against `catalog`.
    pub fn new(config: SessionConfig, catalog: CardCatalog) -> GameResult<Self> {
        config.validate(&catalog)?;
        let market = Market::new(config.market.clone());
        Ok(Self {
            config,
            catalog,
            market,
        })
    }

    /// Engine over the standard catalog.
    pub fn standard(config: SessionConfig) -> GameResult<Self> {
        Self::new(config, CardCatalog::standard())
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn market(&self) -> &Market {
        &self.market
    }

    /// Build the opening state: starting deck, shuffle, first hand.
    pub fn setup(&self, rng: GameRng) -> GameResult<GameState> {
        let mut state = GameState::new(rng);

        for entry in &self.config.starting_deck {
            for _ in 0..entry.count {
                state.spawn_card(&self.catalog, entry.key.as_str(), Zone::Deck)?;
            }
        }

        deck::shuffle_deck(&mut state);
        state.emit(GameEvent::TurnStarted { turn: state.turn });
        let opening = deck::draw(&mut state, self.config.hand_size);

        info!(
            seed = state.rng.seed(),
            deck = state.cards_created(),
            hand = opening.drawn_count(),
            "game started"
        );
        Ok(state)
    }

    fn acquisition_allowed(&self, state: &GameState) -> GameResult<()> {
        if self.config.acquire_requires_buy_phase {
            state.require_phase(Phase::Buy)
        } else {
            Ok(())
        }
    }
}

impl RulesEngine for Deckbuilder {
    fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn legal_commands(&self, state: &GameState) -> Vec<Command> {
        let mut commands = Vec::new();

        if state.phase == Phase::Play && !state.hand().is_empty() {
            commands.extend((0..state.hand().len()).map(Command::PlayAt));
            commands.push(Command::PlayAll);
        }

        if self.acquisition_allowed(state).is_ok() {
            commands.extend(
                self.market
                    .affordable_slots(state.ledger.credit)
                    .into_iter()
                    .map(|slot| Command::Acquire { slot }),
            );
        }

        if self.config.acquire_requires_buy_phase && state.phase == Phase::Play {
            commands.push(Command::BeginBuyPhase);
        }

        // Can always end the turn
        commands.push(Command::EndTurn);

        commands
    }

    fn apply_command(&self, state: &mut GameState, actor: Actor, command: Command) -> GameResult<CommandResult> {
        debug!(?actor, ?command, turn = state.turn, "applying command");

        let result = match command {
            Command::PlayAt(position) => CommandResult::Played(deck::play_at(state, position)?),
            Command::Play(card) => CommandResult::Played(deck::play(state, card)?),
            Command::PlayAll => CommandResult::PlayedAll(deck::play_all(state)?),
            Command::Draw(count) => CommandResult::Drew(deck::draw(state, count)),
            Command::Acquire { slot } => {
                self.acquisition_allowed(state)?;
                CommandResult::Acquired(market::acquire_slot(state, &self.catalog, &self.market, slot)?)
            }
            Command::EndTurn => CommandResult::TurnEnded(turn::end_turn(state, self.config.hand_size)),
            Command::BeginBuyPhase => {
                turn::begin_buy_phase(state);
                CommandResult::PhaseChanged(state.phase)
            }
        };

        // Sequence numbers restart with each turn, so take it after the command
        let sequence = state.next_sequence();
        state.record_action(ActionRecord::new(actor, command, state.turn, sequence));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GameError;

    fn engine(config: SessionConfig) -> Deckbuilder {
        Deckbuilder::standard(config).unwrap()
    }

    #[test]
    fn test_setup() {
        let engine = engine(SessionConfig::default());
        let state = engine.setup(GameRng::new(42)).unwrap();

        assert_eq!(state.cards_created(), 10);
        assert_eq!(state.hand().len(), 5);
        assert_eq!(state.zones.zone_size(Zone::Deck), 5);
        assert_eq!(state.turn, 1);

        let credits = state
            .cards_in(Zone::Deck)
            .chain(state.cards_in(Zone::Hand))
            .filter(|c| c.key.as_str() == "credit")
            .count();
        assert_eq!(credits, 7);
    }

    #[test]
    fn test_setup_is_deterministic() {
        let engine = engine(SessionConfig::default());
        let a = engine.setup(GameRng::new(5)).unwrap();
        let b = engine.setup(GameRng::new(5)).unwrap();
        assert_eq!(a.hand(), b.hand());
        assert_eq!(a.zones.cards(Zone::Deck), b.zones.cards(Zone::Deck));
    }

    #[test]
    fn test_invalid_config() {
        let config = SessionConfig::new().with_starting_deck(vec![crate::core::DeckEntry::new("plague", 1)]);
        assert!(matches!(Deckbuilder::standard(config), Err(GameError::Config(_))));
    }

    #[test]
    fn test_legal_commands_opening() {
        let engine = engine(SessionConfig::default());
        let state = engine.setup(GameRng::new(42)).unwrap();

        let commands = engine.legal_commands(&state);
        assert!(commands.contains(&Command::PlayAt(4)));
        assert!(!commands.contains(&Command::PlayAt(5)));
        assert!(commands.contains(&Command::PlayAll));
        assert!(commands.contains(&Command::EndTurn));
        // No credit yet
        assert!(!commands.iter().any(|c| matches!(c, Command::Acquire { .. })));
    }

    #[test]
    fn test_apply_records_history() {
        let engine = engine(SessionConfig::default());
        let mut state = engine.setup(GameRng::new(42)).unwrap();

        engine.apply_command(&mut state, Actor::Human, Command::PlayAll).unwrap();
        engine.apply_command(&mut state, Actor::Autoplay, Command::EndTurn).unwrap();

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].command, Command::PlayAll);
        assert_eq!(state.history[0].turn, 1);
        assert_eq!(state.history[1].actor, Actor::Autoplay);
        assert_eq!(state.history[1].turn, 2);
    }

    #[test]
    fn test_rejected_command_not_recorded() {
        let engine = engine(SessionConfig::default());
        let mut state = engine.setup(GameRng::new(42)).unwrap();

        let err = engine
            .apply_command(&mut state, Actor::Human, Command::Acquire { slot: 3 })
            .unwrap_err();
        assert!(matches!(err, GameError::InsufficientFunds { cost: 5, .. }));
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_buy_phase_gating() {
        let engine = engine(SessionConfig::new().acquire_in_buy_phase_only());
        let mut state = engine.setup(GameRng::new(42)).unwrap();
        engine.apply_command(&mut state, Actor::Human, Command::PlayAll).unwrap();
        state.ledger.credit = 10;

        let err = engine
            .apply_command(&mut state, Actor::Human, Command::Acquire { slot: 0 })
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidPhase {
                expected: Phase::Buy,
                actual: Phase::Play
            }
        );
        assert!(engine.is_legal(&state, Command::BeginBuyPhase));

        let result = engine
            .apply_command(&mut state, Actor::Human, Command::BeginBuyPhase)
            .unwrap();
        assert_eq!(result, CommandResult::PhaseChanged(Phase::Buy));
        assert!(engine.is_legal(&state, Command::Acquire { slot: 0 }));
        engine
            .apply_command(&mut state, Actor::Human, Command::Acquire { slot: 0 })
            .unwrap();
    }
}
