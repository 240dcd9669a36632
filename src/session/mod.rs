//! The game session: the single entry point for a front end.
//!
//! A `Session` owns one game's state, the rules engine, the autoplay policy
//! and controller, and the subscribed event listeners. Every call runs to
//! completion before returning; the front end then renders the returned
//! result, the events, or a fresh `view()`.
//!
//! ## Randomness
//!
//! One seed drives everything. Shuffles and autoplay choices use separate
//! `for_context` streams so that turning autoplay on does not change the
//! order cards come out of the deck.

pub mod autoplay;

use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use self::autoplay::Autoplay;
use crate::cards::{Card, CardCatalog};
use crate::core::action::{Actor, Command};
use crate::core::config::SessionConfig;
use crate::core::error::GameResult;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase};
use crate::events::{EventListener, GameEvent};
use crate::policy::{AutoplayPolicy, RandomAutoplay};
use crate::rules::{deck, CommandResult, Deckbuilder, RulesEngine};
use crate::view::SessionView;
use crate::zones::Zone;

pub use self::autoplay::{AutoplayState, AutoplayStep, TickOutcome};

/// One running game.
pub struct Session {
    state: GameState,
    rules: Deckbuilder,
    seed: u64,

    policy: Box<dyn AutoplayPolicy>,
    policy_rng: GameRng,
    autoplay: Autoplay,

    listeners: Vec<Box<dyn EventListener>>,
    /// Published events not yet drained; only filled without listeners.
    outbox: Vec<GameEvent>,
}

impl Session {
    /// Start a game with the standard catalog.
    ///
    /// Builds the starting deck, shuffles it and draws the opening hand.
    pub fn new(config: SessionConfig) -> GameResult<Self> {
        Self::with_catalog(config, CardCatalog::standard())
    }

    /// Start a game over a custom catalog.
    pub fn with_catalog(config: SessionConfig, catalog: CardCatalog) -> GameResult<Self> {
        let root = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = root.seed();

        let policy = RandomAutoplay::new(config.autoplay.buy_probability);
        let autoplay = Autoplay::new(config.autoplay.await_presentation);
        let rules = Deckbuilder::new(config, catalog)?;
        let state = rules.setup(root.for_context("shuffle"))?;

        let mut session = Self {
            state,
            rules,
            seed,
            policy: Box::new(policy),
            policy_rng: root.for_context("autoplay"),
            autoplay,
            listeners: Vec::new(),
            outbox: Vec::new(),
        };
        session.publish();
        Ok(session)
    }

    /// Replace the autoplay policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl AutoplayPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &Deckbuilder {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        self.rules.config()
    }

    /// Commands that would currently succeed.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        self.rules.legal_commands(&self.state)
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::capture(&self.state, self.rules.market(), self.autoplay.state())
    }

    // === Commands ===

    /// Apply a player command.
    ///
    /// A player ending the turn also stops autoplay, unless configured not to.
    pub fn apply(&mut self, command: Command) -> GameResult<CommandResult> {
        let result = self.apply_as(Actor::Human, command)?;

        if command == Command::EndTurn && self.config().stop_autoplay_on_manual_end_turn {
            self.stop_autoplay();
        }
        Ok(result)
    }

    fn apply_as(&mut self, actor: Actor, command: Command) -> GameResult<CommandResult> {
        let result = self.rules.apply_command(&mut self.state, actor, command);
        if let Err(err) = &result {
            debug!(?actor, ?command, %err, "command refused");
        }
        self.publish();
        result
    }

    // === Autoplay ===

    /// Returns `false` if autoplay was already running.
    pub fn start_autoplay(&mut self) -> bool {
        if !self.autoplay.start() {
            return false;
        }
        info!(turn = self.state.turn, "autoplay started");
        self.state.emit(GameEvent::AutoplayStarted);
        self.publish();
        true
    }

    /// Returns `false` if autoplay was already stopped.
    pub fn stop_autoplay(&mut self) -> bool {
        if !self.autoplay.stop() {
            return false;
        }
        info!(turn = self.state.turn, steps = self.autoplay.steps(), "autoplay stopped");
        self.state.emit(GameEvent::AutoplayStopped);
        self.publish();
        true
    }

    #[must_use]
    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    /// Cadence the front end's timer should tick at.
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.config().autoplay.interval_ms)
    }

    /// Run one autoplay step if the controller allows it.
    pub fn autoplay_tick(&mut self) -> TickOutcome {
        if let Some(refused) = self.autoplay.refuse_tick() {
            return refused;
        }

        let command = self.policy.choose(&self.state, self.rules.market(), &mut self.policy_rng);

        // Buying may need the buy phase first
        if matches!(command, Command::Acquire { .. })
            && self.config().acquire_requires_buy_phase
            && self.state.phase == Phase::Play
        {
            if let Err(err) = self.apply_as(Actor::Autoplay, Command::BeginBuyPhase) {
                self.autoplay.step_applied();
                return TickOutcome::Stepped(AutoplayStep {
                    command: Command::BeginBuyPhase,
                    result: Err(err),
                });
            }
        }

        let result = self.apply_as(Actor::Autoplay, command);
        self.autoplay.step_applied();

        TickOutcome::Stepped(AutoplayStep { command, result })
    }

    /// The front end finished presenting the last autoplay step.
    pub fn presentation_complete(&mut self) -> bool {
        self.autoplay.presentation_complete()
    }

    // === Events ===

    /// Register a listener for every event published from now on.
    ///
    /// Once a listener is subscribed, events go to the listeners only and
    /// are no longer kept for `drain_events`.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Take every published event not yet drained.
    ///
    /// Events are only kept while no listener is subscribed.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn publish(&mut self) {
        let events = self.state.drain_events();
        if self.listeners.is_empty() {
            self.outbox.extend(events);
            return;
        }
        for event in &events {
            for listener in &mut self.listeners {
                listener.on_event(event);
            }
        }
    }

    // === Inspection ===

    /// Deck contents, top card first.
    #[must_use]
    pub fn deck_top_down(&self) -> Vec<Card> {
        self.cards_reversed(Zone::Deck)
    }

    /// Look at the deck top-down, then shuffle it.
    pub fn peek_deck_then_shuffle(&mut self) -> Vec<Card> {
        let peeked = self.deck_top_down();
        deck::shuffle_deck(&mut self.state);
        self.publish();
        peeked
    }

    /// Discard contents, most recently added first.
    #[must_use]
    pub fn discard_newest_first(&self) -> Vec<Card> {
        self.cards_reversed(Zone::Discard)
    }

    fn cards_reversed(&self, zone: Zone) -> Vec<Card> {
        self.state
            .zones
            .cards(zone)
            .iter()
            .rev()
            .filter_map(|&id| self.state.card(id).cloned())
            .collect()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("seed", &self.seed)
            .field("turn", &self.state.turn)
            .field("phase", &self.state.phase)
            .field("autoplay", &self.autoplay.state())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
