//! Comprehensive tests for elx-dom
//!
//! Tree structure, attributes, style and event dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use elx_dom::{Document, DomTree, Event, Listener, Namespace};

#[test]
fn test_dom_tree_creation() {
    let mut tree = DomTree::new();

    // div > span > text
    let div = tree.create_element("div");
    let span = tree.create_element("span");
    let text = tree.create_text("Hello, World!");

    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, span).unwrap();
    tree.append_child(span, text).unwrap();

    assert_eq!(tree.len(), 4); // root + div + span + text

    let div_node = tree.get(div).unwrap();
    assert_eq!(div_node.parent, tree.root());
    assert_eq!(div_node.first_child, span);

    let span_node = tree.get(span).unwrap();
    assert_eq!(span_node.parent, div);
    assert_eq!(span_node.first_child, text);
}

#[test]
fn test_dom_tree_siblings() {
    let mut tree = DomTree::new();

    let div = tree.create_element("div");
    let child1 = tree.create_element("p");
    let child2 = tree.create_element("p");
    let child3 = tree.create_element("p");

    tree.append_child(div, child1).unwrap();
    tree.append_child(div, child2).unwrap();
    tree.append_child(div, child3).unwrap();

    let node1 = tree.get(child1).unwrap();
    assert_eq!(node1.next_sibling, child2);
    assert!(!node1.prev_sibling.is_valid());

    let node2 = tree.get(child2).unwrap();
    assert_eq!(node2.prev_sibling, child1);
    assert_eq!(node2.next_sibling, child3);

    let node3 = tree.get(child3).unwrap();
    assert_eq!(node3.prev_sibling, child2);
    assert!(!node3.next_sibling.is_valid());
}

#[test]
fn test_dom_tree_detach_middle() {
    let mut tree = DomTree::new();

    let div = tree.create_element("div");
    let p1 = tree.create_element("p");
    let p2 = tree.create_element("p");
    let p3 = tree.create_element("p");

    tree.append_child(div, p1).unwrap();
    tree.append_child(div, p2).unwrap();
    tree.append_child(div, p3).unwrap();

    tree.detach(p2).unwrap();

    assert_eq!(tree.get(p1).unwrap().next_sibling, p3);
    assert_eq!(tree.get(p3).unwrap().prev_sibling, p1);
    assert!(!tree.get(p2).unwrap().parent.is_valid());
}

#[test]
fn test_children_iterator_order() {
    let mut tree = DomTree::new();
    let ul = tree.create_element("ul");

    for label in ["a", "b", "c"] {
        let li = tree.create_element("li");
        let text = tree.create_text(label);
        tree.append_child(li, text).unwrap();
        tree.append_child(ul, li).unwrap();
    }

    let labels: Vec<String> = tree.children(ul).map(|(id, _)| tree.text_content(id)).collect();
    assert_eq!(labels, ["a", "b", "c"]);
}

#[test]
fn test_descendants_document_order() {
    let mut tree = DomTree::new();
    let a = tree.create_element("a");
    let b = tree.create_element("b");
    let c = tree.create_element("c");
    let d = tree.create_element("d");
    tree.append_child(a, b).unwrap();
    tree.append_child(b, c).unwrap();
    tree.append_child(a, d).unwrap();

    assert_eq!(tree.descendants(a), vec![b, c, d]);
}

#[test]
fn test_attributes() {
    let mut tree = DomTree::new();
    let input = tree.create_element("input");

    tree.set_attribute(input, "type", "checkbox").unwrap();
    tree.set_attribute(input, "checked", "").unwrap();
    assert_eq!(tree.get_attribute(input, "checked"), Some(""));

    assert_eq!(tree.remove_attribute(input, "checked").unwrap(), Some(String::new()));
    assert!(!tree.has_attribute(input, "checked"));
    assert_eq!(tree.remove_attribute(input, "checked").unwrap(), None);
}

#[test]
fn test_svg_namespace() {
    let mut tree = DomTree::new();
    let svg = tree.create_element_ns(Namespace::Svg, "svg");
    let elem = tree.get(svg).unwrap().as_element().unwrap();
    assert_eq!(elem.name.ns, Namespace::Svg);
}

#[test]
fn test_listeners_accumulate() {
    let mut tree = DomTree::new();
    let button = tree.create_element("button");
    let log = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second"] {
        let log = log.clone();
        tree.add_event_listener(button, "click", Listener::new(move |_| log.borrow_mut().push(tag)))
            .unwrap();
    }

    let invoked = tree.dispatch_event(button, &mut Event::new("click")).unwrap();
    assert_eq!(invoked, 2);
    assert_eq!(*log.borrow(), ["first", "second"]);
}

#[test]
fn test_dispatch_bubbles_to_ancestors() {
    let mut tree = DomTree::new();
    let outer = tree.create_element("div");
    let inner = tree.create_element("span");
    tree.append_child(outer, inner).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    tree.add_event_listener(outer, "click", Listener::new(move |e| s.borrow_mut().push(e.current_target)))
        .unwrap();

    tree.dispatch_event(inner, &mut Event::new("click")).unwrap();
    assert_eq!(*seen.borrow(), [outer]);

    tree.dispatch_event(inner, &mut Event::non_bubbling("click")).unwrap();
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_stop_propagation() {
    let mut tree = DomTree::new();
    let outer = tree.create_element("div");
    let inner = tree.create_element("span");
    tree.append_child(outer, inner).unwrap();

    tree.add_event_listener(inner, "click", Listener::new(|e| e.stop_propagation())).unwrap();
    tree.add_event_listener(outer, "click", Listener::new(|_| panic!("should not bubble"))).unwrap();

    assert_eq!(tree.dispatch_event(inner, &mut Event::new("click")).unwrap(), 1);
}

#[test]
fn test_document_structure() {
    let doc = Document::new("about:blank");

    assert!(doc.document_element().is_valid());
    assert!(doc.head().is_valid());
    assert!(doc.body().is_valid());

    let tree = doc.tree();
    let html_node = tree.get(doc.document_element()).unwrap();
    assert_eq!(html_node.parent, tree.root());
}
