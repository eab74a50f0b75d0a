//! elx - declarative element construction
//!
//! Builds fully configured, detached element nodes from an order-flexible
//! `(tag?, attributes?, children?)` call:
//!
//! ```rust,ignore
//! use elx::{attrs, Builder, Document};
//!
//! let mut doc = Document::default();
//! let mut b = Builder::new(&mut doc);
//! let card = b.h(("div#main.card", attrs! { "hidden" => false }, ["text"]))?;
//! let icon = b.svg(r#"<circle r="4"/>"#)?;
//! card.replace_children(&mut b, "<b>markup</b>")?;
//! ```
//!
//! Tag shorthand (`tag#id.class`) expands into attributes, nested children
//! flatten in order, and a lone string child is parsed as markup.

pub mod apply;
pub mod args;
pub mod attributes;
pub mod bound;
pub mod builder;
pub mod compose;
pub mod config;
pub mod error;
pub mod lookup;
pub mod shorthand;
pub mod value;

pub use apply::apply_attributes;
pub use args::{normalize, Call, Children, IntoArgs, IntoChildren, TagSlot};
pub use attributes::Attributes;
pub use bound::{div, BoundTag};
pub use builder::{Builder, Element};
pub use compose::{append_children, compose, is_node};
pub use config::BuilderConfig;
pub use error::{BuildError, Result};
pub use lookup::{by_id, NodeRef};
pub use shorthand::{expand, unify_class_aliases};
pub use value::{listener, tag, Arg, AttrValue, Child, StyleValue};

pub use elx_dom::{Document, Event, Listener, Namespace, NodeId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
