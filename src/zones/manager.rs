//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks where every card is and handles movement between
//! the four zones. It supports:
//! - Insertion on top of a zone
//! - Card lookup by entity id
//! - Bulk moves that keep the source order
//!
//! A card is tracked in exactly one zone at a time; the location map and the
//! per-zone orderings are updated together by every operation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::rng::GameRng;

/// One of the four card containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Draw pile. Index 0 is the bottom, the last index is the top.
    Deck,
    Hand,
    /// Cards played this turn.
    Played,
    Discard,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Deck, Zone::Hand, Zone::Played, Zone::Discard];

    const fn index(self) -> usize {
        match self {
            Zone::Deck => 0,
            Zone::Hand => 1,
            Zone::Played => 2,
            Zone::Discard => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Played => "played",
            Zone::Discard => "discard",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use pandemic_deckbuilder::zones::{Zone, ZoneManager};
/// use pandemic_deckbuilder::core::EntityId;
///
/// let mut manager = ZoneManager::new();
///
/// manager.add_to_zone(EntityId(10), Zone::Deck);
/// manager.add_to_zone(EntityId(11), Zone::Deck);
///
/// // Draw the top card
/// let drawn = manager.move_top(Zone::Deck, Zone::Hand);
/// assert_eq!(drawn, Some(EntityId(11)));
/// assert_eq!(manager.cards(Zone::Hand), &[EntityId(11)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: entity_id -> zone
    locations: FxHashMap<EntityId, Zone>,

    /// Ordered card lists, indexed by `Zone::index`.
    order: [Vec<EntityId>; 4],
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new card on top of a zone.
    ///
    /// Panics if the entity is already tracked.
    pub fn add_to_zone(&mut self, entity: EntityId, zone: Zone) {
        if self.locations.contains_key(&entity) {
            panic!("Entity {:?} already exists in zone manager", entity);
        }

        self.locations.insert(entity, zone);
        self.order[zone.index()].push(entity);
    }

    /// Move a card from its current zone onto the top of another.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_zone(&mut self, entity: EntityId, new_zone: Zone) -> Option<Zone> {
        let old_zone = self.locations.get(&entity).copied()?;

        self.order[old_zone.index()].retain(|&e| e != entity);
        self.locations.insert(entity, new_zone);
        self.order[new_zone.index()].push(entity);

        Some(old_zone)
    }

    /// Move the top (last) card of `from` onto the top of `to`.
    pub fn move_top(&mut self, from: Zone, to: Zone) -> Option<EntityId> {
        let entity = self.order[from.index()].pop()?;
        self.locations.insert(entity, to);
        self.order[to.index()].push(entity);
        Some(entity)
    }

    /// Move every card of `from` onto the top of `to`, keeping their order.
    ///
    /// Returns the moved ids in that order.
    pub fn move_all(&mut self, from: Zone, to: Zone) -> Vec<EntityId> {
        if from == to {
            return Vec::new();
        }
        let moved = std::mem::take(&mut self.order[from.index()]);
        for &entity in &moved {
            self.locations.insert(entity, to);
        }
        self.order[to.index()].extend_from_slice(&moved);
        moved
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, entity: EntityId) -> Option<Zone> {
        self.locations.get(&entity).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, entity: EntityId, zone: Zone) -> bool {
        self.locations.get(&entity) == Some(&zone)
    }

    /// Cards in a zone, in order.
    ///
    /// For the deck, index 0 is bottom and the last index is top.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[EntityId] {
        &self.order[zone.index()]
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.order[zone.index()].len()
    }

    #[must_use]
    pub fn is_empty(&self, zone: Zone) -> bool {
        self.order[zone.index()].is_empty()
    }

    /// Get the top card of a zone (last in the vec).
    #[must_use]
    pub fn top_card(&self, zone: Zone) -> Option<EntityId> {
        self.order[zone.index()].last().copied()
    }

    /// Shuffle a zone in place.
    pub fn shuffle_zone(&mut self, zone: Zone, rng: &mut GameRng) {
        rng.shuffle(&mut self.order[zone.index()]);
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager contains an entity.
    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.locations.contains_key(&entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(EntityId(10), Zone::Hand);
        manager.add_to_zone(EntityId(11), Zone::Hand);

        assert_eq!(manager.get_zone(EntityId(10)), Some(Zone::Hand));
        assert_eq!(manager.get_zone(EntityId(11)), Some(Zone::Hand));
        assert_eq!(manager.get_zone(EntityId(99)), None);
        assert!(manager.is_in_zone(EntityId(10), Zone::Hand));
        assert!(!manager.is_in_zone(EntityId(10), Zone::Deck));
    }

    #[test]
    fn test_insert_on_top() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(EntityId(10), Zone::Deck);
        manager.add_to_zone(EntityId(11), Zone::Deck);
        manager.add_to_zone(EntityId(12), Zone::Discard);
        manager.move_to_zone(EntityId(12), Zone::Deck);

        // Bottom to top
        assert_eq!(manager.cards(Zone::Deck), &[EntityId(10), EntityId(11), EntityId(12)]);
        assert_eq!(manager.top_card(Zone::Deck), Some(EntityId(12)));
    }

    #[test]
    fn test_move_between_zones() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(EntityId(10), Zone::Hand);
        manager.add_to_zone(EntityId(11), Zone::Hand);

        let old = manager.move_to_zone(EntityId(10), Zone::Played);

        assert_eq!(old, Some(Zone::Hand));
        assert_eq!(manager.get_zone(EntityId(10)), Some(Zone::Played));
        assert_eq!(manager.cards(Zone::Hand), &[EntityId(11)]);
        assert_eq!(manager.cards(Zone::Played), &[EntityId(10)]);
        assert_eq!(manager.move_to_zone(EntityId(99), Zone::Played), None);
    }

    #[test]
    fn test_move_top() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(EntityId(10), Zone::Deck);
        manager.add_to_zone(EntityId(11), Zone::Deck);

        assert_eq!(manager.move_top(Zone::Deck, Zone::Hand), Some(EntityId(11)));
        assert_eq!(manager.move_top(Zone::Deck, Zone::Hand), Some(EntityId(10)));
        assert_eq!(manager.move_top(Zone::Deck, Zone::Hand), None);

        assert_eq!(manager.cards(Zone::Hand), &[EntityId(11), EntityId(10)]);
        assert_eq!(manager.get_zone(EntityId(10)), Some(Zone::Hand));
    }

    #[test]
    fn test_move_all_keeps_order() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(EntityId(1), Zone::Discard);
        manager.add_to_zone(EntityId(2), Zone::Played);
        manager.add_to_zone(EntityId(3), Zone::Played);

        let moved = manager.move_all(Zone::Played, Zone::Discard);

        assert_eq!(moved, vec![EntityId(2), EntityId(3)]);
        assert!(manager.is_empty(Zone::Played));
        assert_eq!(manager.cards(Zone::Discard), &[EntityId(1), EntityId(2), EntityId(3)]);
        assert!(manager.is_in_zone(EntityId(3), Zone::Discard));
        assert!(manager.move_all(Zone::Discard, Zone::Discard).is_empty());
    }

    #[test]
    fn test_shuffle() {
        let mut manager = ZoneManager::new();
        for i in 0..20 {
            manager.add_to_zone(EntityId(i), Zone::Deck);
        }

        let before: Vec<_> = manager.cards(Zone::Deck).to_vec();

        let mut rng = GameRng::new(42);
        manager.shuffle_zone(Zone::Deck, &mut rng);

        let after: Vec<_> = manager.cards(Zone::Deck).to_vec();

        // Should be same elements, different order (very likely)
        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
        for id in before {
            assert!(manager.is_in_zone(id, Zone::Deck));
        }
    }

    #[test]
    #[should_panic(expected = "Entity")]
    fn test_duplicate_entity_panics() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(EntityId(10), Zone::Deck);
        manager.add_to_zone(EntityId(10), Zone::Hand); // Should panic
    }

    #[test]
    fn test_total_cards() {
        let mut manager = ZoneManager::new();

        assert_eq!(manager.total_cards(), 0);

        manager.add_to_zone(EntityId(10), Zone::Deck);
        manager.add_to_zone(EntityId(11), Zone::Discard);
        manager.move_to_zone(EntityId(10), Zone::Hand);

        assert_eq!(manager.total_cards(), 2);
        let sum: usize = Zone::ALL.iter().map(|&z| manager.zone_size(z)).sum();
        assert_eq!(sum, 2);
    }
}
