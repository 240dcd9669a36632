//! Card identification.
//!
//! Every card record created during a session has a unique `EntityId`.
//! Ids are handed out by `EntityAllocator` in strictly increasing order and
//! are never reused, so two instantiations of the same catalog template are
//! always distinguishable.
//!
//! ```
//! use pandemic_deckbuilder::core::{EntityAllocator, EntityId};
//!
//! let mut ids = EntityAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_eq!(a, EntityId(0));
//! assert_ne!(a, b);
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic id source for a single session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next `alloc` will return.
    #[must_use]
    pub const fn next_id(&self) -> EntityId {
        EntityId(self.next)
    }

    /// Allocate a fresh id.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    ///
    /// Cards are never destroyed, so this equals the number of cards ever
    /// instantiated in the session.
    #[must_use]
    pub const fn allocated(&self) -> usize {
        self.next as usize
    }
}
