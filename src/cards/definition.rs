//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a kind of card. For
//! example, "Medic" always grants 3 treat. Concrete cards in a game are
//! stamped from a template and carry their own id (see `Card`).

use serde::{Deserialize, Serialize};

use crate::core::resources::{Effects, ResourceKind};

/// Stable catalog identity of a card kind (e.g. `"medic"`).
///
/// Market slots carry this key all the way to acquisition; display assets are
/// never used to recover a card's identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogKey(pub String);

impl CatalogKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CatalogKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl std::fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use pandemic_deckbuilder::cards::CardTemplate;
/// use pandemic_deckbuilder::core::ResourceKind;
///
/// let researcher = CardTemplate::new("researcher", "Researcher", "assets/researcher.svg")
///     .with_effect(ResourceKind::Credit, 1)
///     .with_effect(ResourceKind::Scout, 1);
///
/// assert_eq!(researcher.effects.get(ResourceKind::Scout), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Catalog key.
    pub key: CatalogKey,

    /// Display name.
    pub name: String,

    /// Opaque asset reference for the renderer.
    pub image: String,

    /// Resources granted when a card of this kind is played.
    pub effects: Effects,
}

impl CardTemplate {
    #[must_use]
    pub fn new(key: impl Into<CatalogKey>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            image: image.into(),
            effects: Effects::new(),
        }
    }

    /// Add a resource effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, kind: ResourceKind, amount: u32) -> Self {
        self.effects.add(kind, amount);
        self
    }

    /// Final path segment of the image reference.
    #[must_use]
    pub fn image_file_name(&self) -> &str {
        file_name(&self.image)
    }
}

pub(crate) fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
