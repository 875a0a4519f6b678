//! Reflection cache key for method/type pairs.
//!
//! A `ReflectionCacheKey` pairs a method identifier with an identity token
//! (a type or property descriptor). Two keys collide only when the method
//! names match and both tokens are the *same allocation*: structurally equal
//! descriptors obtained from different lookups are distinct entries.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

use crate::PropertyInfo;

/// Multiplier used to mix the method hash with the token address.
const HASH_MULTIPLIER: u64 = 397;

/// Identity-compared handle to a type or property descriptor.
///
/// Cloning shares the allocation, so clones compare equal. Two tokens built
/// from equal but separately allocated values never do.
#[derive(Clone)]
pub struct CacheToken(Arc<dyn Any + Send + Sync>);

impl CacheToken {
    /// Allocate a fresh identity around `value`.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        CacheToken(Arc::new(value))
    }

    /// Use an existing shared allocation as the identity.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        CacheToken(value)
    }

    /// Token for a property descriptor; identity is the descriptor's `Arc`.
    pub fn from_property(property: &Arc<PropertyInfo>) -> Self {
        CacheToken(Arc::clone(property) as Arc<dyn Any + Send + Sync>)
    }

    /// Check whether both tokens share one allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &CacheToken) -> bool {
        self.addr() == other.addr()
    }

    /// Address of the shared allocation (data pointer only).
    #[inline]
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }

    /// Borrow the wrapped descriptor if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for CacheToken {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for CacheToken {}

impl Hash for CacheToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.addr());
    }
}

impl fmt::Debug for CacheToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CacheToken({:#x})", self.addr())
    }
}

/// Key for memoizing reflection-derived artifacts.
///
/// `method` must be non-empty. Neither precondition is checked in release
/// builds; violating them is a caller bug, not a reported error.
#[derive(Clone)]
pub struct ReflectionCacheKey {
    method: Arc<str>,
    token: CacheToken,
}

impl ReflectionCacheKey {
    /// Create a key from a method identifier and a descriptor token.
    #[inline]
    pub fn new(method: impl Into<Arc<str>>, token: CacheToken) -> Self {
        let method = method.into();
        debug_assert!(!method.is_empty(), "cache key method identifier is empty");
        ReflectionCacheKey { method, token }
    }

    /// The method identifier.
    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The descriptor token.
    #[inline]
    pub fn token(&self) -> &CacheToken {
        &self.token
    }

    /// Combined hash of both components.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.method.hash(&mut hasher);
        hasher.finish().wrapping_mul(HASH_MULTIPLIER) ^ self.token.addr() as u64
    }
}

impl PartialEq for ReflectionCacheKey {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method && self.token.ptr_eq(&other.token)
    }
}

impl Eq for ReflectionCacheKey {}

impl Hash for ReflectionCacheKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Debug for ReflectionCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReflectionCacheKey({}, {:?})", self.method, self.token)
    }
}
