//! Edge case tests for elx-dom
//!
//! Invalid ids, empty inputs and deep trees.

use elx_dom::{Document, DomError, DomTree, NodeId};

// ============================================================================
// INVALID IDS
// ============================================================================

#[test]
fn test_operations_on_missing_node() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");

    assert_eq!(tree.append_child(div, NodeId::NONE), Err(DomError::NotFound(NodeId::NONE)));
    assert_eq!(tree.set_attribute(NodeId::NONE, "id", "x"), Err(DomError::NotFound(NodeId::NONE)));
    assert!(tree.get_attribute(NodeId::NONE, "id").is_none());
    assert_eq!(tree.children(NodeId::NONE).count(), 0);
}

#[test]
fn test_ids_from_other_tree() {
    let mut big = DomTree::new();
    for _ in 0..10 {
        big.create_element("p");
    }
    let foreign = big.create_element("p");

    let tree = DomTree::new();
    assert!(!tree.is_node(foreign));
}

#[test]
fn test_attributes_on_text_rejected() {
    let mut tree = DomTree::new();
    let text = tree.create_text("plain");

    assert_eq!(tree.set_attribute(text, "id", "x"), Err(DomError::InvalidNodeType(text)));
    assert_eq!(tree.set_style_property(text, "color", "red"), Err(DomError::InvalidNodeType(text)));
}

#[test]
fn test_document_node_cannot_be_appended() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    let root = tree.root();

    assert_eq!(tree.append_child(div, root), Err(DomError::InvalidNodeType(root)));
}

// ============================================================================
// EMPTY CONTENT
// ============================================================================

#[test]
fn test_empty_text_node() {
    let mut tree = DomTree::new();
    let text = tree.create_text("");
    assert_eq!(tree.text_content(text), "");
}

#[test]
fn test_detach_twice() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    let span = tree.create_element("span");
    tree.append_child(div, span).unwrap();

    tree.detach(span).unwrap();
    tree.detach(span).unwrap();
    assert_eq!(tree.children(div).count(), 0);
}

#[test]
fn test_duplicate_ids_first_wins() {
    let mut doc = Document::new("about:blank");
    let body = doc.body();
    let first = doc.tree.create_element("div");
    let second = doc.tree.create_element("div");
    doc.tree.set_attribute(first, "id", "dup").unwrap();
    doc.tree.set_attribute(second, "id", "dup").unwrap();
    doc.tree.append_child(body, first).unwrap();
    doc.tree.append_child(body, second).unwrap();

    assert_eq!(doc.get_element_by_id("dup"), Some(first));
}

// ============================================================================
// STRESS
// ============================================================================

#[test]
fn test_deep_nesting() {
    let mut tree = DomTree::with_capacity(10_001);
    let mut parent = tree.create_element("div");
    let top = parent;

    for _ in 0..10_000 {
        let child = tree.create_element("div");
        tree.append_child(parent, child).unwrap();
        parent = child;
    }

    assert_eq!(tree.descendants(top).len(), 10_000);
}
