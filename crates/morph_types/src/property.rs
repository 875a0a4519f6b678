//! Target property descriptors.

use crate::Idx;

/// Describes a property a converted value is destined for.
///
/// Share it as `Arc<PropertyInfo>`: the `Arc` is the per-call-site identity
/// used by [`CacheToken::from_property`](crate::CacheToken::from_property).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Property name as declared on the owning type.
    pub name: String,
    /// Declared type of the property.
    pub ty: Idx,
    /// Type that declares the property (`Idx::UNIT` when detached).
    pub declaring: Idx,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, ty: Idx, declaring: Idx) -> Self {
        PropertyInfo {
            name: name.into(),
            ty,
            declaring,
        }
    }
}
