//! Unified type pool.
//!
//! Every type is stored once and addressed by an [`Idx`]. Shape flags and an
//! identity token are computed when a type is interned, so capability queries
//! never walk the type structure.
//!
//! # Thread Safety
//! All storage sits behind a single `RwLock`; every method takes `&self`.
//! Share the pool across threads with `Arc<TypePool>`.

mod class;
mod construct;
mod format;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{CacheToken, Idx, ReflectionCache, ReflectionCacheKey, Tag, TypeFlags};

pub use class::{ClassDef, ClassKind};

/// Method identifier for memoized constructor discovery.
const FIND_ZERO_ARG_CONSTRUCTOR: &str = "TypePool::zero_arg_constructor";

/// Handle to one constructor of a pooled type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constructor {
    /// Type the constructor builds.
    pub owner: Idx,
    /// Position in the owner's constructor list.
    pub index: usize,
    /// Number of parameters.
    pub arity: usize,
}

/// Compact type record: kind plus one data word.
#[derive(Copy, Clone, Debug)]
struct Item {
    tag: Tag,
    data: u32,
}

/// Structural identity used for deduplication.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
struct InternKey {
    tag: Tag,
    first: u32,
    second: u32,
}

struct PoolData {
    items: Vec<Item>,
    flags: Vec<TypeFlags>,
    /// Two-word payloads for key/value tags.
    extra: Vec<u32>,
    /// Per-type identity singletons.
    tokens: Vec<CacheToken>,
    intern_map: FxHashMap<InternKey, Idx>,
    classes: Vec<ClassDef>,
    class_names: FxHashMap<String, Idx>,
}

impl PoolData {
    fn with_primitives() -> Self {
        let mut data = PoolData {
            items: Vec::with_capacity(64),
            flags: Vec::with_capacity(64),
            extra: Vec::new(),
            tokens: Vec::with_capacity(64),
            intern_map: FxHashMap::default(),
            classes: Vec::new(),
            class_names: FxHashMap::default(),
        };
        for tag in [
            Tag::Int,
            Tag::Float,
            Tag::Bool,
            Tag::Str,
            Tag::Char,
            Tag::Byte,
            Tag::Unit,
        ] {
            let flags = if tag == Tag::Str {
                TypeFlags::IS_PRIMITIVE | TypeFlags::IS_TEXT
            } else {
                TypeFlags::IS_PRIMITIVE
            };
            data.push(tag, 0, flags);
        }
        debug_assert_eq!(data.items.len(), Idx::FIRST_DYNAMIC as usize);
        data
    }

    #[allow(clippy::cast_possible_truncation)]
    fn push(&mut self, tag: Tag, data: u32, flags: TypeFlags) -> Idx {
        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(Item { tag, data });
        self.flags.push(flags);
        self.tokens.push(CacheToken::new(idx));
        idx
    }

    #[allow(clippy::cast_possible_truncation)]
    fn push_extra(&mut self, first: Idx, second: Idx) -> u32 {
        let start = self.extra.len() as u32;
        self.extra.push(first.raw());
        self.extra.push(second.raw());
        start
    }

    #[inline]
    fn contains(&self, idx: Idx) -> bool {
        idx.index() < self.items.len()
    }

    #[inline]
    fn item(&self, idx: Idx) -> Option<Item> {
        self.items.get(idx.index()).copied()
    }

    #[inline]
    fn flags_of(&self, idx: Idx) -> TypeFlags {
        self.flags
            .get(idx.index())
            .copied()
            .unwrap_or(TypeFlags::empty())
    }

    fn extra_pair(&self, start: u32) -> Option<(Idx, Idx)> {
        let start = start as usize;
        let first = *self.extra.get(start)?;
        let second = *self.extra.get(start + 1)?;
        Some((Idx::from_raw(first), Idx::from_raw(second)))
    }

    fn class(&self, idx: Idx) -> Option<&ClassDef> {
        match self.item(idx)? {
            Item {
                tag: Tag::Class,
                data,
            } => self.classes.get(data as usize),
            _ => None,
        }
    }
}

/// Registry of every type known to a conversion pipeline.
pub struct TypePool {
    data: RwLock<PoolData>,
    ctor_cache: ReflectionCache<Option<Constructor>>,
}

impl TypePool {
    /// Create a pool holding the primitive types.
    pub fn new() -> Self {
        TypePool {
            data: RwLock::new(PoolData::with_primitives()),
            ctor_cache: ReflectionCache::new(),
        }
    }

    /// Number of types in the pool.
    pub fn len(&self) -> usize {
        self.data.read().items.len()
    }

    /// A pool always holds its primitives.
    pub fn is_empty(&self) -> bool {
        self.data.read().items.is_empty()
    }

    /// Check whether `idx` addresses a type in this pool.
    pub fn contains(&self, idx: Idx) -> bool {
        self.data.read().contains(idx)
    }

    /// Kind of a pooled type, `None` for indices outside the pool.
    pub fn tag(&self, idx: Idx) -> Option<Tag> {
        self.data.read().item(idx).map(|item| item.tag)
    }

    /// Pre-computed shape flags. Unknown indices have no flags.
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.data.read().flags_of(idx)
    }

    /// Identity token for a type.
    ///
    /// Every call for the same `idx` returns a clone of one allocation, so
    /// the token can key a [`ReflectionCache`].
    pub fn token(&self, idx: Idx) -> CacheToken {
        self.data
            .read()
            .tokens
            .get(idx.index())
            .cloned()
            .unwrap_or_else(|| CacheToken::new(idx))
    }

    /// First generic argument of a collection type.
    ///
    /// Element containers yield their element; key/value shapes yield their
    /// key; classes yield their declared element type.
    pub fn element_type(&self, idx: Idx) -> Option<Idx> {
        let data = self.data.read();
        let item = data.item(idx)?;
        match item.tag {
            Tag::Array | Tag::List | Tag::Sequence => Some(Idx::from_raw(item.data)),
            Tag::Map | Tag::MapInterface | Tag::Pair => {
                data.extra_pair(item.data).map(|(key, _)| key)
            }
            Tag::Class => data.class(idx).and_then(|class| class.element),
            _ => None,
        }
    }

    /// Key and value arguments of `Map`, `MapInterface` and `Pair` types.
    pub fn key_value_args(&self, idx: Idx) -> Option<(Idx, Idx)> {
        let data = self.data.read();
        let item = data.item(idx)?;
        if item.tag.uses_extra() {
            data.extra_pair(item.data)
        } else {
            None
        }
    }

    /// Constructor signatures of a type, in declaration order.
    ///
    /// Built-in containers: `List` has `()` and `(capacity: int)`, `Map` has
    /// `()`, arrays only `(length: int)`. Interfaces and primitives have none.
    pub fn constructor_signatures(&self, idx: Idx) -> Vec<Vec<Idx>> {
        let data = self.data.read();
        let Some(item) = data.item(idx) else {
            return Vec::new();
        };
        match item.tag {
            Tag::List => vec![Vec::new(), vec![Idx::INT]],
            Tag::Map => vec![Vec::new()],
            Tag::Array => vec![vec![Idx::INT]],
            Tag::Class => data
                .class(idx)
                .map(|class| class.constructors.clone())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Find the parameterless constructor of a type.
    ///
    /// Discovery scans the constructor list once per type; the outcome,
    /// including "none", is memoized.
    pub fn zero_arg_constructor(&self, idx: Idx) -> Option<Constructor> {
        let key = ReflectionCacheKey::new(FIND_ZERO_ARG_CONSTRUCTOR, self.token(idx));
        self.ctor_cache.get_or_insert_with(key, || {
            let found = self
                .constructor_signatures(idx)
                .iter()
                .position(Vec::is_empty)
                .map(|index| Constructor {
                    owner: idx,
                    index,
                    arity: 0,
                });
            tracing::trace!(ty = %self.display(idx), found = found.is_some(), "constructor discovery");
            found
        })
    }

    /// Number of memoized constructor lookups.
    pub fn cached_constructor_lookups(&self) -> usize {
        self.ctor_cache.len()
    }

    /// Intern a type, returning the existing index if already present.
    fn intern(&self, tag: Tag, first: Idx, second: Idx) -> Idx {
        let key = InternKey {
            tag,
            first: first.raw(),
            second: second.raw(),
        };
        let existing = self.data.read().intern_map.get(&key).copied();
        if let Some(idx) = existing {
            return idx;
        }

        let mut data = self.data.write();
        // Another writer may have won the race.
        if let Some(&idx) = data.intern_map.get(&key) {
            return idx;
        }
        let flags = Self::compute_flags(&data, tag, first);
        let word = if tag.uses_extra() {
            data.push_extra(first, second)
        } else {
            first.raw()
        };
        let idx = data.push(tag, word, flags);
        data.intern_map.insert(key, idx);
        idx
    }

    fn compute_flags(data: &PoolData, tag: Tag, first: Idx) -> TypeFlags {
        let elem = data.flags_of(first);
        match tag {
            Tag::Array | Tag::List => TypeFlags::collection_of(elem),
            Tag::Sequence => TypeFlags::collection_of(elem) | TypeFlags::IS_INTERFACE,
            Tag::Map => TypeFlags::IS_COLLECTION | TypeFlags::IS_KEY_VALUE,
            Tag::MapInterface => {
                TypeFlags::IS_COLLECTION | TypeFlags::IS_KEY_VALUE | TypeFlags::IS_INTERFACE
            }
            Tag::Pair => TypeFlags::IS_PAIR,
            _ => TypeFlags::empty(),
        }
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
