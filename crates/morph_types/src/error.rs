//! Type registration errors.

use thiserror::Error;

use crate::Idx;

/// Error returned when a class cannot be added to the pool.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A class with this name is already registered.
    #[error("class `{name}` is already registered")]
    DuplicateClass { name: String },
    /// Interfaces have no constructors.
    #[error("interface `{name}` cannot declare constructors")]
    InterfaceConstructor { name: String },
    /// The definition refers to a type the pool does not contain.
    #[error("class `{name}` refers to unknown type {idx:?}")]
    UnknownType { name: String, idx: Idx },
}
