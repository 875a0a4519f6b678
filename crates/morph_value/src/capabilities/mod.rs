//! Type capability queries consumed by the shape converter.
//!
//! The converter never inspects types itself. Everything it needs to know
//! about a target type (collection-ness, key/value shape, element type,
//! interface-ness, constructibility) comes through [`TypeCapabilities`].

use morph_types::{Constructor, Idx, Tag, TypePool};

use crate::Value;

/// Shape questions about pooled types, plus the factories that build empty
/// instances.
///
/// Implementations absorb their own failures: a type that cannot be built
/// yields `None`, never a panic.
pub trait TypeCapabilities: Send + Sync {
    /// Zero-or-more element container, excluding text.
    fn is_collection_type(&self, ty: Idx) -> bool;

    /// Associative (key -> value) collection.
    fn is_key_value_collection_type(&self, ty: Idx) -> bool;

    /// First generic argument of a collection type.
    fn element_type(&self, ty: Idx) -> Option<Idx>;

    fn is_interface(&self, ty: Idx) -> bool;

    /// Array type over `elem`, used when wrapping a scalar.
    fn array_of(&self, elem: Idx) -> Idx;

    /// Empty generic sequence over `elem`.
    fn empty_sequence(&self, elem: Idx) -> Value;

    fn find_zero_arg_constructor(&self, ty: Idx) -> Option<Constructor>;

    /// Run a constructor. `None` when the instance cannot be built.
    fn instantiate(&self, ctor: &Constructor) -> Option<Value>;

    /// Render a type for log output.
    fn describe(&self, ty: Idx) -> String {
        ty.to_string()
    }
}

impl TypeCapabilities for TypePool {
    fn is_collection_type(&self, ty: Idx) -> bool {
        self.flags(ty).is_collection()
    }

    fn is_key_value_collection_type(&self, ty: Idx) -> bool {
        self.flags(ty).is_key_value()
    }

    fn element_type(&self, ty: Idx) -> Option<Idx> {
        TypePool::element_type(self, ty)
    }

    fn is_interface(&self, ty: Idx) -> bool {
        self.flags(ty).is_interface()
    }

    fn array_of(&self, elem: Idx) -> Idx {
        self.array(elem)
    }

    fn empty_sequence(&self, elem: Idx) -> Value {
        Value::seq(self.sequence(elem), Vec::new())
    }

    fn find_zero_arg_constructor(&self, ty: Idx) -> Option<Constructor> {
        self.zero_arg_constructor(ty)
    }

    fn instantiate(&self, ctor: &Constructor) -> Option<Value> {
        if ctor.arity != 0 {
            tracing::debug!(ty = %self.display(ctor.owner), arity = ctor.arity, "only parameterless constructors can be run");
            return None;
        }
        let owner = ctor.owner;
        let flags = self.flags(owner);
        match self.tag(owner)? {
            Tag::Map => {
                let (key, value) = self.key_value_args(owner)?;
                Some(Value::map(owner, self.pair(key, value), Vec::new()))
            }
            Tag::List => Some(Value::seq(owner, Vec::new())),
            Tag::Class if flags.is_interface() => None,
            Tag::Class if flags.is_key_value() => {
                let entry_ty = TypePool::element_type(self, owner).unwrap_or(Idx::NONE);
                Some(Value::map(owner, entry_ty, Vec::new()))
            }
            Tag::Class if flags.is_collection() => Some(Value::seq(owner, Vec::new())),
            Tag::Class => Some(Value::object(owner, rustc_hash::FxHashMap::default())),
            _ => None,
        }
    }

    fn describe(&self, ty: Idx) -> String {
        self.display(ty)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
