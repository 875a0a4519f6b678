//! Morph Convert - shape conversion for property values.
//!
//! Coerces a value into the shape of a target type:
//! - a scalar headed for a collection is wrapped into a one-element array
//! - a collection headed for a scalar is unwrapped to its first element
//! - a missing value headed for a collection becomes an empty instance
//!
//! Type knowledge comes from a [`TypeCapabilities`] provider, usually a
//! shared [`TypePool`](morph_types::TypePool). Conversion is total: every
//! failure mode ends in `None`.
//!
//! # Tracing
//!
//! Set `RUST_LOG` and call [`init_tracing`] to see decisions:
//!
//! ```bash
//! RUST_LOG=morph_convert=trace cargo test -p morph_convert
//! ```

mod converter;
mod direction;
mod options;
mod processor;
mod request;

use std::sync::Once;

pub use converter::ShapeConverter;
pub use direction::ConversionDirection;
pub use morph_value::TypeCapabilities;
pub use options::ConvertOptions;
pub use processor::{
    AltPropertyProcessor, DefaultValueProcessor, ProcessContext, Processor, ProcessorChain,
    PropertyProcessor,
};
pub use request::ConversionRequest;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Call this at the start of a program or test to enable tracing output.
/// Controlled by the `RUST_LOG` environment variable; does nothing when it is
/// unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
