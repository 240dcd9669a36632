//! Game rules.
//!
//! - `deck`: shuffle, draw (with discard recycling), play
//! - `turn`: end of turn and phase changes
//! - `market`: market slots and acquisition
//! - `engine`: the `RulesEngine` seam and the `Deckbuilder` engine

pub mod deck;
pub mod engine;
pub mod market;
pub mod turn;

pub use deck::{DrawReport, PlayAllReport, PlayReport};
pub use engine::{CommandResult, Deckbuilder, RulesEngine};
pub use market::{AcquireReport, Market};
pub use turn::TurnReport;
