//! elx DOM - Document Object Model
//!
//! Arena-based node tree that the element builder constructs into.
//! Nodes are created detached and stay owned by the tree; callers
//! attach them with [`DomTree::append_child`].

mod document;
mod events;
mod node;
mod operations;
mod style;
mod tree;

pub use document::Document;
pub use events::{Event, EventListener, Listener};
pub use node::{Attribute, ElementData, Namespace, Node, NodeData, QualName};
pub use operations::{DomError, DomResult};
pub use style::StyleDeclaration;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this id can refer to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}
