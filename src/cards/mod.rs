//! Card system: templates, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CatalogKey`: Stable identity of a card kind
//! - `CardTemplate`: Static card data (name, image, effects)
//! - `Card`: A concrete card with a session-unique id
//! - `CardCatalog`: Template lookup and instantiation

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardTemplate, CatalogKey};
pub use instance::Card;
pub use registry::CardCatalog;
