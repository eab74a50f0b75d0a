//! elx HTML
//!
//! Markup support for the elx DOM, built on html5ever:
//! fragment parsing (innerHTML assignment) and serialization
//! (innerHTML/outerHTML reads).

mod parser;
mod serializer;

pub use elx_dom::{DomTree, NodeId};
pub use parser::{parse_fragment, set_inner_html, FragmentContext};
pub use serializer::{inner_html, outer_html, HtmlSerializer};
