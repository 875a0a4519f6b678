//! Type construction helpers for the pool.
//!
//! Each constructor interns its type, so repeated calls return the same
//! [`Idx`] (and the same identity token).

use super::TypePool;
use crate::{Idx, Tag};

impl TypePool {
    // === Element Containers ===

    /// Create an array type `elem[]`.
    pub fn array(&self, elem: Idx) -> Idx {
        self.intern(Tag::Array, elem, Idx::NONE)
    }

    /// Create a list type `List<elem>`.
    pub fn list(&self, elem: Idx) -> Idx {
        self.intern(Tag::List, elem, Idx::NONE)
    }

    /// Create a sequence interface type `Sequence<elem>`.
    pub fn sequence(&self, elem: Idx) -> Idx {
        self.intern(Tag::Sequence, elem, Idx::NONE)
    }

    // === Key/Value Shapes ===

    /// Create a concrete dictionary type `Map<key, value>`.
    pub fn map(&self, key: Idx, value: Idx) -> Idx {
        self.intern(Tag::Map, key, value)
    }

    /// Create a dictionary interface type `MapInterface<key, value>`.
    pub fn map_interface(&self, key: Idx, value: Idx) -> Idx {
        self.intern(Tag::MapInterface, key, value)
    }

    /// Create an entry type `Pair<key, value>`.
    pub fn pair(&self, key: Idx, value: Idx) -> Idx {
        self.intern(Tag::Pair, key, value)
    }
}
