//! Human-readable type rendering.

use super::{PoolData, TypePool};
use crate::{Idx, Tag};

impl TypePool {
    /// Render a type, e.g. `int[]`, `List<str>`, `Map<str, Widget>`.
    pub fn display(&self, idx: Idx) -> String {
        let mut out = String::new();
        self.data.read().write_type(idx, &mut out);
        out
    }
}

impl PoolData {
    fn write_type(&self, idx: Idx, out: &mut String) {
        if let Some(name) = idx.name() {
            out.push_str(name);
            return;
        }
        let Some(item) = self.item(idx) else {
            out.push_str("<unknown>");
            return;
        };
        match item.tag {
            Tag::Array => {
                self.write_type(Idx::from_raw(item.data), out);
                out.push_str("[]");
            }
            Tag::List | Tag::Sequence => {
                out.push_str(item.tag.name());
                out.push('<');
                self.write_type(Idx::from_raw(item.data), out);
                out.push('>');
            }
            Tag::Map | Tag::MapInterface | Tag::Pair => {
                out.push_str(item.tag.name());
                out.push('<');
                if let Some((key, value)) = self.extra_pair(item.data) {
                    self.write_type(key, out);
                    out.push_str(", ");
                    self.write_type(value, out);
                }
                out.push('>');
            }
            Tag::Class => match self.class(idx) {
                Some(class) => out.push_str(&class.name),
                None => out.push_str("<class>"),
            },
            tag => out.push_str(tag.name()),
        }
    }
}
