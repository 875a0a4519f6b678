//! Property value processors.
//!
//! A processor turns the current value of a [`ProcessContext`] into a new
//! one. Processors compose: [`ProcessorChain`] runs them in order, and
//! [`AltPropertyProcessor`] wraps another processor to supply a fallback.

mod property;

use std::sync::Arc;

use morph_types::PropertyInfo;
use morph_value::{TypeCapabilities, Value};
use tracing::debug;

use crate::{ConversionRequest, ShapeConverter};

pub use property::{AltPropertyProcessor, PropertyProcessor};

/// State threaded through a processor chain for one property.
#[derive(Clone, Debug)]
pub struct ProcessContext {
    /// Value produced so far. `None` means nothing was found.
    pub value: Option<Value>,
    /// Property the value is destined for.
    pub property: Arc<PropertyInfo>,
    /// Source object the property is being read from.
    pub content: Option<Value>,
}

impl ProcessContext {
    pub fn new(property: Arc<PropertyInfo>) -> Self {
        ProcessContext {
            value: None,
            property,
            content: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: Value) -> Self {
        self.content = Some(content);
        self
    }
}

/// One step of property value resolution.
pub trait Processor: Send + Sync {
    /// Name used in log output.
    fn name(&self) -> &'static str;

    /// Produce the next value. May read or reset `ctx.value`.
    fn process(&self, ctx: &mut ProcessContext) -> Option<Value>;
}

/// `None` or whitespace-only text.
pub(crate) fn is_empty(value: Option<&Value>) -> bool {
    match value {
        Some(value) => value.is_blank(),
        None => true,
    }
}

/// Ordered list of processors.
#[derive(Default)]
pub struct ProcessorChain {
    processors: Vec<Box<dyn Processor>>,
}

impl ProcessorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a processor.
    #[must_use]
    pub fn then(mut self, processor: impl Processor + 'static) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Run every processor in order and return the final value.
    ///
    /// Each processor's output becomes `ctx.value` for the next one.
    #[tracing::instrument(level = "debug", skip_all, fields(property = %ctx.property.name))]
    pub fn run(&self, mut ctx: ProcessContext) -> Option<Value> {
        for processor in &self.processors {
            let out = processor.process(&mut ctx);
            let produced = out.as_ref().map_or("none", Value::type_name);
            debug!(processor = processor.name(), produced, "step");
            ctx.value = out;
        }
        ctx.value
    }
}

/// Replaces an empty value with a fixed default.
pub struct DefaultValueProcessor {
    default: Value,
}

impl DefaultValueProcessor {
    pub fn new(default: Value) -> Self {
        DefaultValueProcessor { default }
    }
}

impl Processor for DefaultValueProcessor {
    fn name(&self) -> &'static str {
        "default_value"
    }

    fn process(&self, ctx: &mut ProcessContext) -> Option<Value> {
        if is_empty(ctx.value.as_ref()) {
            Some(self.default.clone())
        } else {
            ctx.value.clone()
        }
    }
}

/// Shapes the current value into the property's declared type.
impl<C: TypeCapabilities> Processor for ShapeConverter<C> {
    fn name(&self) -> &'static str {
        "shape_converter"
    }

    fn process(&self, ctx: &mut ProcessContext) -> Option<Value> {
        let request = ConversionRequest::new(ctx.value.clone(), ctx.property.ty)
            .with_direction(self.options().direction);
        self.convert(request)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
