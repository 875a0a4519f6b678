//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its kind.
//! The tag determines how to interpret the associated `data` field:
//!
//! - 0-15: Primitives (data unused)
//! - 16-31: Element containers (data = element Idx)
//! - 32-47: Key/value shapes (data = index into extra[] holding key, value)
//! - 80-95: Registered classes (data = class index)

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Primitives (0-15) ===
    /// 64-bit signed integer.
    Int = 0,
    /// 64-bit floating point.
    Float = 1,
    /// Boolean.
    Bool = 2,
    /// UTF-8 text.
    Str = 3,
    /// Unicode scalar value.
    Char = 4,
    /// 8-bit unsigned integer.
    Byte = 5,
    /// Unit type `()`.
    Unit = 6,

    // === Element Containers (16-31) ===
    /// Fixed-length array `T[]`. No zero-argument constructor.
    Array = 16,
    /// Growable list `List<T>`.
    List = 17,
    /// Iterable interface `Sequence<T>`.
    Sequence = 18,

    // === Key/Value Shapes (32-47) ===
    /// Concrete dictionary `Map<K, V>`.
    Map = 32,
    /// Dictionary interface `MapInterface<K, V>`.
    MapInterface = 33,
    /// Key/value entry `Pair<K, V>`.
    Pair = 34,

    // === Registered Classes (80-95) ===
    /// User-registered class or interface.
    Class = 80,
}

impl Tag {
    /// Check if this tag uses the extra array for data.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(self, Self::Map | Self::MapInterface | Self::Pair)
    }

    /// Check if this tag represents a primitive type.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        (self as u8) < 16
    }

    /// Check if this tag wraps a single element type.
    #[inline]
    pub const fn is_element_container(self) -> bool {
        matches!(self, Self::Array | Self::List | Self::Sequence)
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Unit => "()",
            Self::Array => "array",
            Self::List => "List",
            Self::Sequence => "Sequence",
            Self::Map => "Map",
            Self::MapInterface => "MapInterface",
            Self::Pair => "Pair",
            Self::Class => "class",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Tag>() == 1);
