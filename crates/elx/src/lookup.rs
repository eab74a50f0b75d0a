//! Lookup by id
//!
//! A frame root is searched through its embedded document, so a result
//! names the document it was found in.

use elx_dom::{Document, DomTree, NodeId};

/// A node together with the document that owns it
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    pub document: &'a Document,
    pub id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn tree(&self) -> &'a DomTree {
        self.document.tree()
    }

    pub fn tag_name(&self) -> Option<&'a str> {
        self.tree().tag_name(self.id)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&'a str> {
        self.tree().get_attribute(self.id, name)
    }

    pub fn outer_html(&self) -> String {
        elx_html::outer_html(self.tree(), self.id)
    }
}

/// Find the element with `id` under `root` (the whole document when
/// `None`).
///
/// When `root` is a frame with an embedded document, that document is
/// searched from its top instead.
pub fn by_id<'a>(document: &'a Document, id: &str, root: Option<NodeId>) -> Option<NodeRef<'a>> {
    let root = root.unwrap_or_else(|| document.tree().root());
    if let Some(embedded) = document.frame_document(root) {
        tracing::trace!("Descending into frame {} for #{}", root, id);
        return by_id(embedded, id, None);
    }
    document
        .element_by_id_within(root, id)
        .map(|node| NodeRef { document, id: node })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_child(doc: &mut Document, parent: NodeId, tag: &str, id: &str) -> NodeId {
        let tree = doc.tree_mut();
        let node = tree.create_element(tag);
        tree.set_attribute(node, "id", id).unwrap();
        tree.append_child(parent, node).unwrap();
        node
    }

    #[test]
    fn test_whole_document() {
        let mut doc = Document::default();
        let body = doc.body();
        let node = with_child(&mut doc, body, "p", "x");

        let found = by_id(&doc, "x", None).unwrap();
        assert_eq!(found.id, node);
        assert_eq!(found.tag_name(), Some("p"));
        assert!(std::ptr::eq(found.document, &doc));
    }

    #[test]
    fn test_missing_is_none() {
        let doc = Document::default();
        assert!(by_id(&doc, "nope", None).is_none());
        assert!(by_id(&doc, "", None).is_none());
    }

    #[test]
    fn test_root_limits_search() {
        let mut doc = Document::default();
        let (head, body) = (doc.head(), doc.body());
        with_child(&mut doc, head, "meta", "m");

        assert!(by_id(&doc, "m", Some(body)).is_none());
        assert!(by_id(&doc, "m", Some(head)).is_some());
    }

    #[test]
    fn test_frame_descent() {
        let mut inner = Document::new("about:frame");
        let inner_body = inner.body();
        let target = with_child(&mut inner, inner_body, "span", "deep");

        let mut doc = Document::default();
        let body = doc.body();
        let frame = with_child(&mut doc, body, "iframe", "frame");
        doc.set_frame_document(frame, inner).unwrap();

        let found = by_id(&doc, "deep", Some(frame)).unwrap();
        assert_eq!(found.id, target);
        assert_eq!(found.document.url(), "about:frame");
        assert!(by_id(&doc, "deep", None).is_none());
    }
}
