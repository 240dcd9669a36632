//! Core types: ids, RNG, configuration, commands, resources, state, errors.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod resources;
pub mod error;
pub mod state;

pub use entity::{EntityAllocator, EntityId};
pub use rng::GameRng;
pub use config::{AutoplayConfig, DeckEntry, MarketSlot, SessionConfig};
pub use action::{ActionRecord, Actor, Command};
pub use resources::{Effects, ResourceKind, ResourceLedger};
pub use error::{GameError, GameResult};
pub use state::{GameState, GameStats, Phase};
