//! Argument normalization
//!
//! Resolves the order-flexible `(tag?, attributes?, children?)` call
//! into one [`Call`]. All positional disambiguation happens in
//! [`normalize`]; later stages only see the canonical shape.

use crate::attributes::Attributes;
use crate::builder::Element;
use crate::value::{Arg, Child};

/// Whether a leading plain string may name the tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSlot {
    /// The first non-null argument is the tag when it is a string
    Positional,
    /// Only [`Arg::Tag`] sets the tag; strings are always children
    Explicit,
}

/// Normalized children
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Children {
    #[default]
    None,
    /// A lone string child, parsed as markup
    Markup(String),
    /// Literal children, possibly nested
    Nodes(Vec<Child>),
}

impl Children {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Canonical `(tag, attributes, children)` triple.
///
/// An empty tag means "use the default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Call {
    pub tag: String,
    pub attributes: Attributes,
    pub children: Children,
}

/// Resolve positional arguments into a [`Call`].
///
/// Null arguments are skipped wherever they appear. The first remaining
/// argument decides the tag: a string there is the tag, anything else
/// leaves the default in place. After that, strings, numbers, nodes and
/// lists append to the children and attribute maps merge key by key
/// with the later value winning.
pub fn normalize(args: Vec<Arg>, slot: TagSlot) -> Call {
    let mut tag: Option<String> = None;
    let mut tag_open = slot == TagSlot::Positional;
    let mut attributes = Attributes::new();
    let mut children = Vec::new();
    let mut child_args = 0usize;
    let mut lone_string = false;

    for arg in args {
        let arg = match arg {
            Arg::Null => continue,
            Arg::Tag(explicit) => {
                if tag.is_none() {
                    tag = Some(explicit);
                } else {
                    tracing::debug!("Ignoring extra tag argument {:?}", explicit);
                }
                tag_open = false;
                continue;
            }
            Arg::Str(s) if tag_open && tag.is_none() => {
                tag_open = false;
                tag = Some(s);
                continue;
            }
            other => other,
        };
        tag_open = false;

        match arg {
            Arg::Str(s) => {
                if s.is_empty() {
                    continue;
                }
                child_args += 1;
                lone_string = child_args == 1;
                children.push(Child::Text(s));
            }
            Arg::Num(n) => {
                child_args += 1;
                lone_string = false;
                children.push(Child::Number(n));
            }
            Arg::Node(id) => {
                child_args += 1;
                lone_string = false;
                children.push(Child::Node(id));
            }
            Arg::List(items) => {
                child_args += 1;
                lone_string = false;
                children.extend(items);
            }
            Arg::Attrs(attrs) => attributes.merge(attrs),
            Arg::Null | Arg::Tag(_) => {}
        }
    }

    let children = match children.as_slice() {
        [] => Children::None,
        [Child::Text(text)] if lone_string => Children::Markup(text.clone()),
        _ => Children::Nodes(children),
    };

    Call {
        tag: tag.unwrap_or_default(),
        attributes,
        children,
    }
}

/// Positional arguments accepted by the constructors
pub trait IntoArgs {
    fn into_args(self) -> Vec<Arg>;
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Arg> {
        Vec::new()
    }
}

impl<A: Into<Arg>> IntoArgs for (A,) {
    fn into_args(self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

impl<A: Into<Arg>, B: Into<Arg>> IntoArgs for (A, B) {
    fn into_args(self) -> Vec<Arg> {
        vec![self.0.into(), self.1.into()]
    }
}

impl<A: Into<Arg>, B: Into<Arg>, C: Into<Arg>> IntoArgs for (A, B, C) {
    fn into_args(self) -> Vec<Arg> {
        vec![self.0.into(), self.1.into(), self.2.into()]
    }
}

impl IntoArgs for Vec<Arg> {
    fn into_args(self) -> Vec<Arg> {
        self
    }
}

impl IntoArgs for Arg {
    fn into_args(self) -> Vec<Arg> {
        vec![self]
    }
}

impl IntoArgs for &str {
    fn into_args(self) -> Vec<Arg> {
        vec![self.into()]
    }
}

impl IntoArgs for String {
    fn into_args(self) -> Vec<Arg> {
        vec![self.into()]
    }
}

impl IntoArgs for Attributes {
    fn into_args(self) -> Vec<Arg> {
        vec![self.into()]
    }
}

impl IntoArgs for Element {
    fn into_args(self) -> Vec<Arg> {
        vec![self.into()]
    }
}

/// Arguments of the replace-children mutator
pub trait IntoChildren {
    fn into_children(self) -> Children;
}

impl IntoChildren for Children {
    fn into_children(self) -> Children {
        self
    }
}

impl IntoChildren for () {
    fn into_children(self) -> Children {
        Children::None
    }
}

impl IntoChildren for Child {
    fn into_children(self) -> Children {
        match self {
            Child::Text(text) if !text.is_empty() => Children::Markup(text),
            child if child.is_falsy() => Children::None,
            child => Children::Nodes(vec![child]),
        }
    }
}

impl IntoChildren for &str {
    fn into_children(self) -> Children {
        Child::from(self).into_children()
    }
}

impl IntoChildren for String {
    fn into_children(self) -> Children {
        Child::from(self).into_children()
    }
}

impl IntoChildren for Element {
    fn into_children(self) -> Children {
        Child::from(self).into_children()
    }
}

impl<T: Into<Child>> IntoChildren for Vec<T> {
    fn into_children(self) -> Children {
        if self.is_empty() {
            return Children::None;
        }
        Children::Nodes(vec![Child::from(self)])
    }
}

impl<A: Into<Child>> IntoChildren for (A,) {
    fn into_children(self) -> Children {
        self.0.into().into_children()
    }
}

impl<A: Into<Child>, B: Into<Child>> IntoChildren for (A, B) {
    fn into_children(self) -> Children {
        Children::Nodes(vec![self.0.into(), self.1.into()])
    }
}

impl<A: Into<Child>, B: Into<Child>, C: Into<Child>> IntoChildren for (A, B, C) {
    fn into_children(self) -> Children {
        Children::Nodes(vec![self.0.into(), self.1.into(), self.2.into()])
    }
}
