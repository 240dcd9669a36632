//! # pandemic-deckbuilder
//!
//! Core state machine for a single-player, Pandemic-themed deckbuilding card
//! game.
//!
//! The player starts with a ten-card deck, draws five cards each turn, plays
//! them to earn credit, treat and scout, and spends credit at the market on
//! stronger cards that go to the discard. When the deck runs out the discard
//! is shuffled back in.
//!
//! ## Design Principles
//!
//! 1. **Synchronous and atomic**: Every command runs to completion and either
//!    changes the state fully or returns an error and changes nothing.
//!
//! 2. **Presentation outside**: The core returns reports, events and views.
//!    Animation, timers and layout belong to the front end.
//!
//! 3. **Deterministic**: One seed reproduces a whole game, autoplay included.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, RNG, configuration, commands, resources, state
//! - `zones`: Deck, hand, played and discard zones
//! - `cards`: Card templates, the catalog, and card instances
//! - `rules`: Draw/play/shuffle, turn lifecycle, market, rules engine
//! - `events`: Event stream for the front end
//! - `policy`: Autoplay policies
//! - `session`: The session facade and autoplay controller
//! - `view`: Serializable snapshots and discard annotations
//!
//! ## Example
//!
//! ```
//! use pandemic_deckbuilder::{Command, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::new().with_seed(7)).unwrap();
//! session.apply(Command::PlayAll).unwrap();
//! session.apply(Command::EndTurn).unwrap();
//! assert_eq!(session.view().turn, 2);
//! ```

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod events;
pub mod policy;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    EntityId, GameRng,
    SessionConfig, AutoplayConfig, DeckEntry, MarketSlot,
    Command, Actor, ActionRecord,
    Effects, ResourceKind, ResourceLedger,
    GameError, GameResult,
    GameState, GameStats, Phase,
};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::cards::{Card, CardCatalog, CardTemplate, CatalogKey};

pub use crate::rules::{
    RulesEngine, Deckbuilder, CommandResult, Market,
    DrawReport, PlayReport, PlayAllReport, TurnReport, AcquireReport,
};

pub use crate::events::{EventListener, GameEvent};

pub use crate::policy::{AutoplayPolicy, RandomAutoplay, EndTurnOnly};

pub use crate::session::{Session, AutoplayState, AutoplayStep, TickOutcome};

pub use crate::view::{SessionView, DiscardAnnotations, Annotation};
