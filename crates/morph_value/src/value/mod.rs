//! Runtime values flowing through the conversion pipeline.
//!
//! # Arc Enforcement
//!
//! Heap-backed payloads go through factory methods on `Value`; `Heap<T>` has
//! a private constructor so external code cannot build them directly.
//!
//! ```text
//! let s = Value::string("hello");                 // OK
//! let xs = Value::seq(list_ty, vec![Value::int(1)]); // OK
//! ```
//!
//! # Absence
//!
//! There is no null variant. A missing value is `Option<Value>::None`
//! everywhere in the pipeline.

mod composite;
mod heap;

use std::fmt;

use morph_types::Idx;
use rustc_hash::FxHashMap;

pub use composite::{MapValue, ObjectValue, PairValue, SeqValue};
pub use heap::Heap;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Byte(u8),
    Unit,

    // Heap types
    /// Text. Never treated as a collection.
    Str(Heap<String>),
    /// Ordered collection.
    Seq(SeqValue),
    /// Associative collection.
    Map(MapValue),
    /// Key/value entry.
    Pair(PairValue),
    /// Class instance with named fields.
    Object(ObjectValue),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a collection value of type `ty`.
    #[inline]
    pub fn seq(ty: Idx, items: Vec<Value>) -> Self {
        Value::Seq(SeqValue {
            ty,
            items: Heap::new(items),
        })
    }

    /// Create an associative collection of type `ty` whose entries have
    /// type `entry_ty`.
    #[inline]
    pub fn map(ty: Idx, entry_ty: Idx, entries: Vec<(Value, Value)>) -> Self {
        Value::Map(MapValue {
            ty,
            entry_ty,
            entries: Heap::new(entries),
        })
    }

    /// Create a key/value entry.
    #[inline]
    pub fn pair(ty: Idx, key: Value, value: Value) -> Self {
        Value::Pair(PairValue {
            ty,
            entry: Heap::new((key, value)),
        })
    }

    /// Create an object of class `ty`.
    #[inline]
    pub fn object(ty: Idx, fields: FxHashMap<String, Value>) -> Self {
        Value::Object(ObjectValue {
            ty,
            fields: Heap::new(fields),
            parent: None,
        })
    }

    /// Create an object whose property lookups may fall back to `parent`.
    #[inline]
    pub fn object_with_parent(
        ty: Idx,
        fields: FxHashMap<String, Value>,
        parent: ObjectValue,
    ) -> Self {
        Value::Object(ObjectValue {
            ty,
            fields: Heap::new(fields),
            parent: Some(Heap::new(parent)),
        })
    }
}

// Value Methods

impl Value {
    /// The pooled type this value was built as.
    pub fn runtime_type(&self) -> Idx {
        match self {
            Value::Int(_) => Idx::INT,
            Value::Float(_) => Idx::FLOAT,
            Value::Bool(_) => Idx::BOOL,
            Value::Char(_) => Idx::CHAR,
            Value::Byte(_) => Idx::BYTE,
            Value::Unit => Idx::UNIT,
            Value::Str(_) => Idx::STR,
            Value::Seq(seq) => seq.ty,
            Value::Map(map) => map.ty,
            Value::Pair(pair) => pair.ty,
            Value::Object(obj) => obj.ty,
        }
    }

    /// Check if this value is text.
    #[inline]
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Check if this value is text made only of whitespace (or empty).
    pub fn is_blank(&self) -> bool {
        self.as_str().is_some_and(|s| s.trim().is_empty())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Items of an ordered collection.
    pub fn as_seq(&self) -> Option<&SeqValue> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Iterate the elements of a collection value in order.
    ///
    /// Maps yield their entries as `Pair` values. Returns `None` for values
    /// that hold no elements (scalars, text, entries, objects).
    pub fn elements(&self) -> Option<Elements<'_>> {
        match self {
            Value::Seq(seq) => Some(Elements::Seq(seq.items.iter())),
            Value::Map(map) => Some(Elements::Map {
                entry_ty: map.entry_ty,
                iter: map.entries.iter(),
            }),
            _ => None,
        }
    }

    /// Get the type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Byte(_) => "byte",
            Value::Unit => "()",
            Value::Str(_) => "str",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
            Value::Pair(_) => "pair",
            Value::Object(_) => "object",
        }
    }
}

/// Iterator over the elements of a collection value.
///
/// Enum dispatch instead of `Box<dyn Iterator>`: no allocation, no vtable.
pub enum Elements<'a> {
    Seq(std::slice::Iter<'a, Value>),
    Map {
        entry_ty: Idx,
        iter: std::slice::Iter<'a, (Value, Value)>,
    },
}

impl Iterator for Elements<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match self {
            Elements::Seq(iter) => iter.next().cloned(),
            Elements::Map { entry_ty, iter } => iter
                .next()
                .map(|(key, value)| Value::pair(*entry_ty, key.clone(), value.clone())),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Elements::Seq(iter) => iter.size_hint(),
            Elements::Map { iter, .. } => iter.size_hint(),
        }
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => (a - b).abs() < f64::EPSILON,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Pair(a), Value::Pair(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Byte(b) => write!(f, "Byte({b})"),
            Value::Unit => write!(f, "Unit"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Seq(seq) => write!(f, "Seq({:?}, {:?})", seq.ty, &**seq.items),
            Value::Map(map) => write!(f, "Map({:?}, {:?})", map.ty, &**map.entries),
            Value::Pair(pair) => write!(f, "Pair({:?}, {:?})", pair.key(), pair.value()),
            Value::Object(obj) => write!(f, "Object({:?}, {} fields)", obj.ty, obj.fields.len()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Byte(b) => write!(f, "0x{b:02x}"),
            Value::Unit => write!(f, "()"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Seq(seq) => {
                write!(f, "[")?;
                for (i, item) in seq.items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Pair(pair) => write!(f, "({}, {})", pair.key(), pair.value()),
            Value::Object(obj) => write!(f, "<object {}>", obj.ty),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
