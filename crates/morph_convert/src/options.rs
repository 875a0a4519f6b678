//! Converter configuration.

use crate::ConversionDirection;

/// Options for a [`ShapeConverter`](crate::ShapeConverter).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    /// Direction applied when the converter runs as a processor.
    pub direction: ConversionDirection,
}

impl ConvertOptions {
    /// Create options with automatic direction.
    pub const fn new() -> Self {
        ConvertOptions {
            direction: ConversionDirection::Automatic,
        }
    }

    /// Set the direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: ConversionDirection) -> Self {
        self.direction = direction;
        self
    }
}
