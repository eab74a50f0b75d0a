//! Value model for constructor arguments
//!
//! Each positional argument of a constructor call is an [`Arg`]. Children
//! nest as [`Child`] trees and attribute values are [`AttrValue`]s.

use elx_dom::{Listener, NodeId};

use crate::attributes::Attributes;
use crate::builder::Element;

/// Inline style, either css text or ordered property pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    Text(String),
    Map(Vec<(String, String)>),
}

impl StyleValue {
    pub fn text(css: impl Into<String>) -> Self {
        Self::Text(css.into())
    }

    /// Build the property form from `(name, value)` pairs
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Serialize either form as css text
    pub fn to_css_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Map(pairs) => pairs
                .iter()
                .map(|(k, v)| format!("{k}: {v};"))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Attribute value
#[derive(Debug, Clone)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    /// `false` removes the attribute, `true` sets it to `"true"`
    Bool(bool),
    /// Present with an empty value
    Empty,
    Style(StyleValue),
    /// Event handler, only meaningful under an `on*` key
    Handler(Listener),
}

impl AttrValue {
    /// Exactly boolean `false`
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Bool(false))
    }

    /// Empty, zero, NaN or `false`
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Empty | Self::Bool(false) => true,
            Self::Text(text) => text.is_empty(),
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Bool(true) | Self::Style(_) | Self::Handler(_) => false,
        }
    }

    /// String form used when the value lands in an attribute.
    /// Handlers have none.
    pub fn to_attr_string(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Bool(b) => Some(b.to_string()),
            Self::Empty => Some(String::new()),
            Self::Style(style) => Some(style.to_css_text()),
            Self::Handler(_) => None,
        }
    }

    /// Text contributed to a class list; falsy values contribute nothing
    pub(crate) fn class_text(&self) -> String {
        if self.is_falsy() {
            return String::new();
        }
        self.to_attr_string().unwrap_or_default()
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Empty, Self::Empty) => true,
            (Self::Style(a), Self::Style(b)) => a == b,
            (Self::Handler(a), Self::Handler(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// A child in a (possibly nested) children list
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Literal text node
    Text(String),
    Number(f64),
    Node(NodeId),
    List(Vec<Child>),
    /// Falsy placeholder, contributes nothing
    Empty,
}

impl Child {
    /// Skipped at any nesting depth
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}

/// One positional constructor argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Explicit tag, never mistaken for a child
    Tag(String),
    /// Tag when it comes first, otherwise a child
    Str(String),
    Num(f64),
    Node(NodeId),
    List(Vec<Child>),
    Attrs(Attributes),
    /// No-op at any position
    Null,
}

/// Explicit tag argument
pub fn tag(tag: impl Into<String>) -> Arg {
    Arg::Tag(tag.into())
}

/// Event handler attribute value
pub fn listener<F>(f: F) -> AttrValue
where
    F: Fn(&mut elx_dom::Event) + 'static,
{
    AttrValue::Handler(Listener::new(f))
}

/// Numbers render without a trailing `.0` when integral
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Child {
                fn from(n: $ty) -> Self {
                    Child::Number(n as f64)
                }
            }

            impl From<$ty> for Arg {
                fn from(n: $ty) -> Self {
                    Arg::Num(n as f64)
                }
            }

            impl From<$ty> for AttrValue {
                fn from(n: $ty) -> Self {
                    AttrValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i32, i64, u32, u64, usize);

// ----------------------------------------------------------------------
// Child conversions
// ----------------------------------------------------------------------

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Text(s.to_string())
    }
}

impl From<String> for Child {
    fn from(s: String) -> Self {
        Child::Text(s)
    }
}

impl From<&String> for Child {
    fn from(s: &String) -> Self {
        Child::Text(s.clone())
    }
}

impl From<NodeId> for Child {
    fn from(id: NodeId) -> Self {
        Child::Node(id)
    }
}

impl From<Element> for Child {
    fn from(el: Element) -> Self {
        Child::Node(el.id())
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(items: Vec<T>) -> Self {
        Child::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Child {
    fn from(items: [T; N]) -> Self {
        Child::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Child::Empty, Into::into)
    }
}

// ----------------------------------------------------------------------
// Arg conversions
// ----------------------------------------------------------------------

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<NodeId> for Arg {
    fn from(id: NodeId) -> Self {
        Arg::Node(id)
    }
}

impl From<Element> for Arg {
    fn from(el: Element) -> Self {
        Arg::Node(el.id())
    }
}

impl From<Attributes> for Arg {
    fn from(attrs: Attributes) -> Self {
        Arg::Attrs(attrs)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Arg {
    fn from(items: [T; N]) -> Self {
        Arg::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

// ----------------------------------------------------------------------
// AttrValue conversions
// ----------------------------------------------------------------------

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::Text(s.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<StyleValue> for AttrValue {
    fn from(style: StyleValue) -> Self {
        AttrValue::Style(style)
    }
}

impl From<Listener> for AttrValue {
    fn from(listener: Listener) -> Self {
        AttrValue::Handler(listener)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Empty, Into::into)
    }
}
