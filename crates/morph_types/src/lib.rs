//! Morph Types - type descriptors for shape conversion.
//!
//! This crate provides:
//! - `Idx` handles into a shared `TypePool`
//! - `Tag` and `TypeFlags` for O(1) shape queries (collection, key/value,
//!   interface)
//! - Class registration with constructor signatures
//! - `ReflectionCacheKey` and `ReflectionCache` for memoizing lookups by
//!   (method identifier, descriptor identity)

mod cache;
mod cache_key;
mod error;
mod flags;
mod idx;
mod pool;
mod property;
mod tag;

pub use cache::ReflectionCache;
pub use cache_key::{CacheToken, ReflectionCacheKey};
pub use error::RegistrationError;
pub use flags::TypeFlags;
pub use idx::Idx;
pub use pool::{ClassDef, ClassKind, Constructor, TypePool};
pub use property::PropertyInfo;
pub use tag::Tag;
