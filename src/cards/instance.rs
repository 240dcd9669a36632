//! Card instances - the concrete cards that move between zones.
//!
//! A `Card` is an immutable record stamped from a `CardTemplate`: it copies
//! the template's name, image and effects and gets a session-unique id. Where
//! a card is (deck, hand, played, discard) is tracked by the zone manager,
//! not by the card. Presentation metadata is never stored here.

use serde::{Deserialize, Serialize};

use super::definition::{CardTemplate, CatalogKey};
use crate::core::entity::EntityId;
use crate::core::resources::Effects;

/// A card in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id for this instance.
    pub id: EntityId,

    /// Catalog key of the template it was stamped from.
    pub key: CatalogKey,

    pub name: String,

    pub image: String,

    /// Copy of the template's effects.
    pub effects: Effects,
}

impl Card {
    /// Stamp a card from a template.
    #[must_use]
    pub fn from_template(id: EntityId, template: &CardTemplate) -> Self {
        Self {
            id,
            key: template.key.clone(),
            name: template.name.clone(),
            image: template.image.clone(),
            effects: template.effects.clone(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
