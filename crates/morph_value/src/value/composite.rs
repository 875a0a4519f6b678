//! Typed composite values: sequences, maps, entries and objects.
//!
//! Every composite carries the pooled type it was built as. That type is the
//! value's runtime type for shape decisions.

use morph_types::Idx;
use rustc_hash::FxHashMap;

use super::{Heap, Value};

/// Ordered collection instance (array, list, sequence, collection class).
#[derive(Clone, Debug, PartialEq)]
pub struct SeqValue {
    pub ty: Idx,
    pub items: Heap<Vec<Value>>,
}

impl SeqValue {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Associative collection instance. Entries keep insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct MapValue {
    pub ty: Idx,
    /// Type of the entries the map yields when iterated.
    pub entry_ty: Idx,
    pub entries: Heap<Vec<(Value, Value)>>,
}

impl MapValue {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| if k == key { Some(v) } else { None })
    }
}

/// A single key/value entry.
#[derive(Clone, Debug, PartialEq)]
pub struct PairValue {
    pub ty: Idx,
    pub entry: Heap<(Value, Value)>,
}

impl PairValue {
    pub fn key(&self) -> &Value {
        let (key, _) = &*self.entry;
        key
    }

    pub fn value(&self) -> &Value {
        let (_, value) = &*self.entry;
        value
    }
}

/// Instance of a registered non-collection class.
///
/// `parent` links an object to the one it was nested under, which lets
/// property lookups fall back to ancestors.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub ty: Idx,
    pub fields: Heap<FxHashMap<String, Value>>,
    pub parent: Option<Heap<ObjectValue>>,
}

impl ObjectValue {
    /// Read a field declared directly on this object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Attach a parent object.
    #[must_use]
    pub fn with_parent(self, parent: ObjectValue) -> Self {
        ObjectValue {
            parent: Some(Heap::new(parent)),
            ..self
        }
    }

    /// This object followed by its ancestors, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = &ObjectValue> {
        std::iter::successors(Some(self), |obj| obj.parent.as_deref())
    }
}

#[cfg(test)]
mod tests;
