//! Conversion direction override.

use std::fmt;

/// How the converter decides whether the target is a collection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConversionDirection {
    /// Infer from the target type.
    #[default]
    Automatic,
    /// Treat the target as a collection regardless of its type.
    ToCollection,
    /// Treat the target as a scalar regardless of its type.
    FromCollection,
}

impl ConversionDirection {
    pub const fn name(self) -> &'static str {
        match self {
            ConversionDirection::Automatic => "automatic",
            ConversionDirection::ToCollection => "to_collection",
            ConversionDirection::FromCollection => "from_collection",
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
