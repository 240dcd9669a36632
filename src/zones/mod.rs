//! Zone system for card locations.
//!
//! A session has four zones: deck, hand, played and discard. Every card is
//! in exactly one of them for its whole life.
//!
//! ## Key Types
//!
//! - `Zone`: Which container a card is in
//! - `ZoneManager`: Card location tracking and movement

pub mod manager;

pub use manager::{Zone, ZoneManager};
