//! Attribute application
//!
//! Reserved keys dispatch through a small rule table; everything else
//! falls through to the generic attribute handler.

use elx_dom::{DomResult, DomTree, NodeId};

use crate::attributes::Attributes;
use crate::value::{AttrValue, StyleValue};

/// Prefix marking event-handler keys (`onclick`, `onMouseOver`)
pub const EVENT_PREFIX: &str = "on";

type ApplyFn = fn(&mut DomTree, NodeId, &str, &AttrValue) -> DomResult<()>;

#[derive(Debug, Clone, Copy)]
enum KeyRule {
    Exact(&'static str),
    /// Prefixed key holding a handler
    Event(&'static str),
}

impl KeyRule {
    fn matches(self, key: &str, value: &AttrValue) -> bool {
        match self {
            Self::Exact(name) => key == name,
            Self::Event(prefix) => {
                key.len() > prefix.len() && key.starts_with(prefix) && matches!(value, AttrValue::Handler(_))
            }
        }
    }
}

const RULES: &[(KeyRule, ApplyFn)] = &[
    (KeyRule::Exact("class"), apply_class as ApplyFn),
    (KeyRule::Exact("style"), apply_style as ApplyFn),
    (KeyRule::Event(EVENT_PREFIX), apply_listener as ApplyFn),
];

fn handler_for(key: &str, value: &AttrValue) -> ApplyFn {
    RULES
        .iter()
        .find(|(rule, _)| rule.matches(key, value))
        .map_or(apply_generic as ApplyFn, |(_, apply)| *apply)
}

/// Apply every attribute to `node` in insertion order
pub fn apply_attributes(tree: &mut DomTree, node: NodeId, attrs: &Attributes) -> DomResult<()> {
    for (key, value) in attrs.iter() {
        tracing::trace!("Applying {} to {}", key, node);
        handler_for(key, value)(tree, node, key, value)?;
    }
    Ok(())
}

fn apply_class(tree: &mut DomTree, node: NodeId, _key: &str, value: &AttrValue) -> DomResult<()> {
    let class = value.class_text();
    let class = class.split_whitespace().collect::<Vec<_>>().join(" ");
    if class.is_empty() {
        tree.remove_attribute(node, "class")?;
        return Ok(());
    }
    tree.set_class_name(node, &class)
}

fn apply_style(tree: &mut DomTree, node: NodeId, key: &str, value: &AttrValue) -> DomResult<()> {
    match value {
        AttrValue::Text(css) | AttrValue::Style(StyleValue::Text(css)) => tree.set_css_text(node, css),
        AttrValue::Style(StyleValue::Map(pairs)) => {
            tree.set_style_properties(node, pairs.iter().map(|(n, v)| (n.as_str(), v.as_str())))
        }
        other => apply_generic(tree, node, key, other),
    }
}

fn apply_listener(tree: &mut DomTree, node: NodeId, key: &str, value: &AttrValue) -> DomResult<()> {
    let AttrValue::Handler(listener) = value else {
        return apply_generic(tree, node, key, value);
    };
    let event = key[EVENT_PREFIX.len()..].to_ascii_lowercase();
    tree.add_event_listener(node, &event, listener.clone())
}

fn apply_generic(tree: &mut DomTree, node: NodeId, key: &str, value: &AttrValue) -> DomResult<()> {
    if value.is_false() {
        tree.remove_attribute(node, key)?;
        return Ok(());
    }
    if value.is_falsy() {
        return tree.set_attribute(node, key, "");
    }
    match value.to_attr_string() {
        Some(text) => tree.set_attribute(node, key, &text),
        None => {
            tracing::warn!("Skipping handler under non-event attribute {:?}", key);
            Ok(())
        }
    }
}
