//! Pre-computed type shape flags.
//!
//! `TypeFlags` are computed once when a type is interned and cached, so every
//! capability query the converter makes is an O(1) bit test.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed shape properties of a pooled type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        // === Category Flags (bits 0-7) ===

        /// Built-in primitive type (int, bool, str, ...).
        const IS_PRIMITIVE = 1 << 0;
        /// Text type. Iterable in principle, never a collection here.
        const IS_TEXT = 1 << 1;
        /// User-registered class or interface.
        const IS_CLASS = 1 << 2;
        /// Key/value entry type.
        const IS_PAIR = 1 << 3;

        // === Shape Flags (bits 8-15) ===

        /// Zero-or-more elements reachable by ordered iteration.
        const IS_COLLECTION = 1 << 8;
        /// Associative collection (key -> value entries).
        const IS_KEY_VALUE = 1 << 9;
        /// Abstract type with no constructors of its own.
        const IS_INTERFACE = 1 << 10;
    }
}

impl TypeFlags {
    /// Check if the type is a collection.
    #[inline]
    pub const fn is_collection(self) -> bool {
        self.contains(Self::IS_COLLECTION)
    }

    /// Check if the type is a key/value shaped collection.
    #[inline]
    pub const fn is_key_value(self) -> bool {
        self.contains(Self::IS_KEY_VALUE)
    }

    /// Check if the type is an interface.
    #[inline]
    pub const fn is_interface(self) -> bool {
        self.contains(Self::IS_INTERFACE)
    }

    /// Flags for a collection whose elements have `elem` flags.
    ///
    /// A collection of pairs is key/value shaped.
    #[inline]
    pub const fn collection_of(elem: Self) -> Self {
        if elem.contains(Self::IS_PAIR) {
            Self::IS_COLLECTION.union(Self::IS_KEY_VALUE)
        } else {
            Self::IS_COLLECTION
        }
    }
}

#[cfg(test)]
mod tests;
