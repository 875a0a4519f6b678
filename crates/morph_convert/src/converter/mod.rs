//! Shape converter.
//!
//! Decides, per request, whether the target wants a collection and whether
//! the value is one, then wraps, unwraps, passes through, or synthesizes an
//! empty instance.
//!
//! | target \ value | scalar        | collection        | absent            |
//! |----------------|---------------|-------------------|-------------------|
//! | scalar         | passthrough   | first element     | `None`            |
//! | collection     | `[value]`     | passthrough       | empty instance    |
//!
//! Text is never a collection on either side, and a text value is never
//! reshaped, whatever the direction.

use std::sync::Arc;

use morph_types::Idx;
use morph_value::{TypeCapabilities, Value};
use tracing::trace;

use crate::{ConversionDirection, ConversionRequest, ConvertOptions};

/// Coerces values into the shape of their target type.
pub struct ShapeConverter<C> {
    caps: Arc<C>,
    options: ConvertOptions,
}

impl<C: TypeCapabilities> ShapeConverter<C> {
    /// Create a converter with default options.
    pub fn new(caps: Arc<C>) -> Self {
        Self::with_options(caps, ConvertOptions::new())
    }

    pub fn with_options(caps: Arc<C>, options: ConvertOptions) -> Self {
        ShapeConverter { caps, options }
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// The capabilities provider.
    pub fn capabilities(&self) -> &C {
        &self.caps
    }

    /// Convert a value into the shape of `request.target`.
    pub fn convert(&self, request: ConversionRequest) -> Option<Value> {
        let ConversionRequest {
            value,
            target,
            direction,
        } = request;
        let target_is_collection = self.target_is_collection(target, direction);

        match value {
            Some(value) => self.reshape(value, target_is_collection),
            None if target_is_collection => self.synthesize_empty(target),
            None => None,
        }
    }

    fn target_is_collection(&self, target: Idx, direction: ConversionDirection) -> bool {
        match direction {
            ConversionDirection::Automatic => {
                !target.is_str() && self.caps.is_collection_type(target)
            }
            ConversionDirection::ToCollection => true,
            ConversionDirection::FromCollection => false,
        }
    }

    fn value_is_collection(&self, value: &Value) -> bool {
        !value.is_str() && self.caps.is_collection_type(value.runtime_type())
    }

    fn reshape(&self, value: Value, target_is_collection: bool) -> Option<Value> {
        if value.is_str() {
            trace!("passthrough");
            return Some(value);
        }
        match (target_is_collection, self.value_is_collection(&value)) {
            (true, false) => {
                let array = self.caps.array_of(value.runtime_type());
                trace!(ty = %self.caps.describe(array), "wrap");
                Some(Value::seq(array, vec![value]))
            }
            (false, true) => {
                let first = value.elements().and_then(|mut elems| elems.next());
                trace!(found = first.is_some(), "unwrap");
                first
            }
            _ => {
                trace!(ty = %self.caps.describe(value.runtime_type()), "passthrough");
                Some(value)
            }
        }
    }

    fn synthesize_empty(&self, target: Idx) -> Option<Value> {
        if self.caps.is_interface(target) && !self.caps.is_key_value_collection_type(target) {
            let elem = self.caps.element_type(target)?;
            trace!(elem = %self.caps.describe(elem), "synthesize_empty");
            return Some(self.caps.empty_sequence(elem));
        }

        let Some(ctor) = self.caps.find_zero_arg_constructor(target) else {
            trace!(ty = %self.caps.describe(target), "no_constructor");
            return None;
        };
        trace!(ty = %self.caps.describe(target), "instantiate");
        self.caps.instantiate(&ctor)
    }
}

impl<C> Clone for ShapeConverter<C> {
    fn clone(&self) -> Self {
        ShapeConverter {
            caps: Arc::clone(&self.caps),
            options: self.options,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
