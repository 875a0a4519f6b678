//! Per-call conversion input.

use morph_types::Idx;
use morph_value::Value;

use crate::ConversionDirection;

/// A value, the type it should be shaped into, and the direction override.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRequest {
    pub value: Option<Value>,
    pub target: Idx,
    pub direction: ConversionDirection,
}

impl ConversionRequest {
    /// Request with automatic direction.
    pub fn new(value: Option<Value>, target: Idx) -> Self {
        ConversionRequest {
            value,
            target,
            direction: ConversionDirection::Automatic,
        }
    }

    /// Override the direction.
    #[must_use]
    pub fn with_direction(self, direction: ConversionDirection) -> Self {
        ConversionRequest { direction, ..self }
    }
}
