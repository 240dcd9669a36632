//! Card catalog for template lookup.
//!
//! The `CardCatalog` stores every card template of a game, keyed by
//! `CatalogKey`, and stamps concrete `Card`s from them.

use rustc_hash::FxHashMap;

use super::definition::{file_name, CardTemplate, CatalogKey};
use super::instance::Card;
use crate::core::entity::EntityId;
use crate::core::error::{GameError, GameResult};
use crate::core::resources::ResourceKind;

const PLAYER_CARD_ASSETS: &str = "assets/cards/player-cards";

/// Read-only registry of card templates.
///
/// ## Example
///
/// ```
/// use pandemic_deckbuilder::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
///
/// let medic = catalog.get("medic").unwrap();
/// assert_eq!(medic.name, "Medic");
/// assert!(catalog.get("plague").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    templates: FxHashMap<CatalogKey, CardTemplate>,
    /// Registration order, for deterministic iteration.
    order: Vec<CatalogKey>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven player cards of the base game.
    #[must_use]
    pub fn standard() -> Self {
        let asset = |file: &str| format!("{PLAYER_CARD_ASSETS}/{file}");
        let mut catalog = Self::new();

        catalog.register(
            CardTemplate::new("credit", "Credit", asset("credit-card.svg")).with_effect(ResourceKind::Credit, 1),
        );
        catalog.register(
            CardTemplate::new("treat", "Treat Disease", asset("treat-disease.svg"))
                .with_effect(ResourceKind::Treat, 1),
        );
        catalog.register(CardTemplate::new("scout", "Scout", asset("scout.svg")).with_effect(ResourceKind::Scout, 1));
        catalog.register(
            CardTemplate::new("advancedTreat", "Advanced Treatment", asset("advanced-treatment.svg"))
                .with_effect(ResourceKind::Treat, 2),
        );
        catalog.register(CardTemplate::new("medic", "Medic", asset("medic.svg")).with_effect(ResourceKind::Treat, 3));
        catalog.register(
            CardTemplate::new("researcher", "Researcher", asset("researcher.svg"))
                .with_effect(ResourceKind::Credit, 1)
                .with_effect(ResourceKind::Scout, 1),
        );
        catalog.register(
            CardTemplate::new("decontamination", "Decontamination", asset("decontamination.svg"))
                .with_effect(ResourceKind::Treat, 1)
                .with_effect(ResourceKind::Credit, 1),
        );

        catalog
    }

    /// Register a template.
    ///
    /// Panics if a template with the same key already exists.
    pub fn register(&mut self, template: CardTemplate) {
        if self.templates.contains_key(&template.key) {
            panic!("Card template {:?} already registered", template.key);
        }
        self.order.push(template.key.clone());
        self.templates.insert(template.key.clone(), template);
    }

    /// Look up a template by key.
    pub fn get(&self, key: &str) -> GameResult<&CardTemplate> {
        self.templates
            .get(&CatalogKey::from(key))
            .ok_or_else(|| GameError::not_found(format_args!("catalog key '{key}'")))
    }

    /// Look up a template by image reference.
    ///
    /// Compares the final path segment, so a full asset URL resolves to the
    /// template whose image has the same file name.
    pub fn find_by_image(&self, image_ref: &str) -> GameResult<&CardTemplate> {
        let wanted = file_name(image_ref);
        self.iter()
            .find(|t| t.image_file_name() == wanted)
            .ok_or_else(|| GameError::not_found(format_args!("card image '{image_ref}'")))
    }

    /// Stamp a card from the template under `key`.
    pub fn instantiate(&self, key: &str, id: EntityId) -> GameResult<Card> {
        Ok(Card::from_template(id, self.get(key)?))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(&CatalogKey::from(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.order.iter().filter_map(|key| self.templates.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 7);
        let keys: Vec<_> = catalog.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["credit", "treat", "scout", "advancedTreat", "medic", "researcher", "decontamination"]
        );

        let medic = catalog.get("medic").unwrap();
        assert_eq!(medic.effects.get(ResourceKind::Treat), 3);
    }

    #[test]
    fn test_get_missing() {
        let catalog = CardCatalog::standard();
        let err = catalog.get("plague").unwrap_err();
        assert!(matches!(err, GameError::NotFound(_)));
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let catalog = CardCatalog::standard();
        let first = catalog.get("researcher").unwrap().clone();
        let second = catalog.get("researcher").unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_by_image() {
        let catalog = CardCatalog::standard();

        let found = catalog
            .find_by_image("http://localhost:8080/assets/cards/player-cards/medic.svg")
            .unwrap();
        assert_eq!(found.key.as_str(), "medic");

        assert!(catalog.find_by_image("assets/cards/special/card-back.svg").is_err());
    }

    #[test]
    fn test_instantiate() {
        let catalog = CardCatalog::standard();
        let a = catalog.instantiate("scout", EntityId(1)).unwrap();
        let b = catalog.instantiate("scout", EntityId(2)).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.effects, b.effects);
        assert!(catalog.instantiate("plague", EntityId(3)).is_err());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_key_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardTemplate::new("a", "A", "a.svg"));
        catalog.register(CardTemplate::new("a", "B", "b.svg"));
    }
}
