//! Reading values off source objects.

use morph_value::{ObjectValue, Value};
use tracing::trace;

use super::{is_empty, ProcessContext, Processor};

/// Reads a named field from the source object.
///
/// The source is the object in `ctx.value`, or `ctx.content` when the value
/// is not an object. With `recursive`, ancestors are searched nearest first
/// until a non-empty field turns up.
#[derive(Clone, Debug)]
pub struct PropertyProcessor {
    pub property_name: String,
    pub recursive: bool,
    pub default_value: Option<Value>,
}

impl PropertyProcessor {
    pub fn new(
        property_name: impl Into<String>,
        recursive: bool,
        default_value: Option<Value>,
    ) -> Self {
        PropertyProcessor {
            property_name: property_name.into(),
            recursive,
            default_value,
        }
    }

    fn lookup(&self, source: &ObjectValue) -> Option<Value> {
        let depth = if self.recursive { usize::MAX } else { 1 };
        source
            .ancestry()
            .take(depth)
            .filter_map(|obj| obj.field(&self.property_name))
            .find(|value| !value.is_blank())
            .cloned()
    }
}

impl Processor for PropertyProcessor {
    fn name(&self) -> &'static str {
        "property"
    }

    fn process(&self, ctx: &mut ProcessContext) -> Option<Value> {
        let source = ctx
            .value
            .as_ref()
            .and_then(Value::as_object)
            .or_else(|| ctx.content.as_ref().and_then(Value::as_object));

        let found = source.and_then(|obj| self.lookup(obj));
        trace!(name = %self.property_name, found = found.is_some(), "property lookup");
        found.or_else(|| self.default_value.clone())
    }
}

/// Falls back to another processor when the current value is empty.
///
/// A non-empty value passes through untouched. Otherwise `ctx.value` is reset
/// to the source content and `next` decides.
pub struct AltPropertyProcessor {
    next: Box<dyn Processor>,
}

impl AltPropertyProcessor {
    /// Fall back to reading `property_name` from the content.
    pub fn new(
        property_name: impl Into<String>,
        recursive: bool,
        default_value: Option<Value>,
    ) -> Self {
        Self::wrapping(PropertyProcessor::new(
            property_name,
            recursive,
            default_value,
        ))
    }

    /// Fall back to an arbitrary processor.
    pub fn wrapping(next: impl Processor + 'static) -> Self {
        AltPropertyProcessor {
            next: Box::new(next),
        }
    }
}

impl Processor for AltPropertyProcessor {
    fn name(&self) -> &'static str {
        "alt_property"
    }

    fn process(&self, ctx: &mut ProcessContext) -> Option<Value> {
        if !is_empty(ctx.value.as_ref()) {
            return ctx.value.clone();
        }
        trace!(fallback = self.next.name(), "value empty, using fallback");
        ctx.value.clone_from(&ctx.content);
        self.next.process(ctx)
    }
}
