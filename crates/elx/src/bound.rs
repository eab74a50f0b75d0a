//! Bound-tag constructors
//!
//! A [`BoundTag`] captures a tag and base attributes once and builds a
//! fresh element on every call. The captured base is never mutated.

use elx_dom::Namespace;

use crate::args::{normalize, IntoArgs, TagSlot};
use crate::attributes::Attributes;
use crate::builder::{Builder, Element};
use crate::error::Result;
use crate::shorthand::{expand, join_classes};
use crate::value::{AttrValue, StyleValue};

/// Reusable constructor over a fixed tag and base attributes
#[derive(Debug, Clone, PartialEq)]
pub struct BoundTag {
    tag: String,
    base: Attributes,
}

/// Prebound `div` constructor
pub fn div() -> BoundTag {
    BoundTag::new("div")
}

impl BoundTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_attributes(tag, Attributes::new())
    }

    pub fn with_attributes(tag: impl Into<String>, base: Attributes) -> Self {
        Self { tag: tag.into(), base }
    }

    /// The bound tag, shorthand included
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn base(&self) -> &Attributes {
        &self.base
    }

    /// Build one element.
    ///
    /// Strings are children here; pass [`crate::tag`] to override the
    /// bound tag. Call-time classes follow the base classes.
    pub fn call(&self, builder: &mut Builder<'_>, args: impl IntoArgs) -> Result<Element> {
        let mut base = self.base.clone();
        let bound = expand(&self.tag, &mut base, builder.config().default_tag());

        let call = normalize(args.into_args(), TagSlot::Explicit);
        let mut attributes = call.attributes;
        let tag = expand(&call.tag, &mut attributes, &bound);

        let merged = merge_attributes(base, attributes);
        builder.construct(Namespace::Html, &tag, &merged, &call.children)
    }
}

/// Merge call-time attributes over an (already owned) base copy
fn merge_attributes(mut base: Attributes, call: Attributes) -> Attributes {
    for (key, value) in call {
        let merged = match (key.as_str(), base.get(&key)) {
            ("class", Some(prev)) => {
                let class = join_classes([prev.class_text(), value.class_text()]);
                AttrValue::Text(class)
            }
            ("style", Some(prev)) => merge_style(prev, value),
            _ => value,
        };
        base.insert(key, merged);
    }
    base
}

fn merge_style(base: &AttrValue, call: AttrValue) -> AttrValue {
    match (base, call) {
        (AttrValue::Style(StyleValue::Map(base)), AttrValue::Style(StyleValue::Map(call))) => {
            let mut pairs = base.clone();
            for (name, value) in call {
                match pairs.iter_mut().find(|(n, _)| *n == name) {
                    Some(slot) => slot.1 = value,
                    None => pairs.push((name, value)),
                }
            }
            AttrValue::Style(StyleValue::Map(pairs))
        }
        (base, call) => {
            if let (Some(a), Some(b)) = (style_text(base), style_text(&call)) {
                return AttrValue::Style(StyleValue::Text(join_css(a, b)));
            }
            call
        }
    }
}

fn style_text(value: &AttrValue) -> Option<&str> {
    match value {
        AttrValue::Text(text) | AttrValue::Style(StyleValue::Text(text)) => Some(text),
        _ => None,
    }
}

fn join_css(base: &str, call: &str) -> String {
    let base = base.trim().trim_end_matches(';').trim_end();
    let call = call.trim();
    match (base.is_empty(), call.is_empty()) {
        (true, _) => call.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{base}; {call}"),
    }
}
