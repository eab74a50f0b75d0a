//! Document - High-level document API

use std::collections::HashMap;

use crate::{DomError, DomResult, DomTree, NodeId};

/// Tags whose elements may host an embedded document
const FRAME_TAGS: &[&str] = &["iframe", "frame"];

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Embedded documents keyed by their frame element
    frames: HashMap<NodeId, Document>,
}

impl Document {
    /// Create a new document with an html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();
        let (html, head, body) = match build_skeleton(&mut tree) {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!("Document skeleton incomplete: {}", err);
                (NodeId::NONE, NodeId::NONE, NodeId::NONE)
            }
        };

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            frames: HashMap::new(),
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            frames: HashMap::new(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID, searching the whole document
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.element_by_id_within(self.tree.root(), id)
    }

    /// First descendant of `root` whose id attribute equals `id`
    pub fn element_by_id_within(&self, root: NodeId, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree
            .descendants(root)
            .into_iter()
            .find(|&node| self.tree.get_attribute(node, "id") == Some(id))
    }

    /// Whether `node` is an element able to host an embedded document
    pub fn is_frame(&self, node: NodeId) -> bool {
        self.tree
            .tag_name(node)
            .is_some_and(|tag| FRAME_TAGS.contains(&tag))
    }

    /// Attach an embedded document to a frame element, returning the
    /// previously embedded one
    pub fn set_frame_document(&mut self, frame: NodeId, document: Document) -> DomResult<Option<Document>> {
        if !self.tree.is_node(frame) {
            return Err(DomError::NotFound(frame));
        }
        if !self.is_frame(frame) {
            return Err(DomError::InvalidNodeType(frame));
        }
        tracing::debug!("Embedding {} into frame {}", document.url(), frame);
        Ok(self.frames.insert(frame, document))
    }

    /// The document embedded in a frame element
    pub fn frame_document(&self, frame: NodeId) -> Option<&Document> {
        self.frames.get(&frame)
    }

    pub fn frame_document_mut(&mut self, frame: NodeId) -> Option<&mut Document> {
        self.frames.get_mut(&frame)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

/// Link `<html><head/><body/></html>` under the document node
fn build_skeleton(tree: &mut DomTree) -> DomResult<(NodeId, NodeId, NodeId)> {
    let html = tree.create_element("html");
    let head = tree.create_element("head");
    let body = tree.create_element("body");

    let root = tree.root();
    tree.append_child(root, html)?;
    tree.append_child(html, head)?;
    tree.append_child(html, body)?;
    Ok((html, head, body))
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
