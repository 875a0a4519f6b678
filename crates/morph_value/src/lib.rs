//! Morph Value - runtime values for shape conversion.
//!
//! This crate provides:
//! - `Value`, the runtime value model (scalars, text, sequences, maps,
//!   entries, objects), each composite tagged with its pooled type
//! - `TypeCapabilities`, the query interface the converter uses to learn a
//!   type's shape and to build empty instances, implemented for `TypePool`

mod capabilities;
mod value;

pub use capabilities::TypeCapabilities;
pub use value::{Elements, Heap, MapValue, ObjectValue, PairValue, SeqValue, Value};
