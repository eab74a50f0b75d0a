//! DOM Tree (arena-based allocation)
//!
//! Every node ever created lives in the arena. Detaching a node only
//! unlinks it; its id stays valid for re-insertion.

use crate::events::{Event, EventListener, Listener};
use crate::node::{ElementData, Namespace, Node, NodeData, QualName};
use crate::operations::{DomError, DomResult};
use crate::style::StyleDeclaration;
use crate::NodeId;

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create a tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::document());
        Self { nodes }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, document node included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if nothing besides the document node exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached HTML element
    pub fn create_element(&mut self, local: &str) -> NodeId {
        self.create_element_ns(Namespace::Html, local)
    }

    /// Create a detached element in the given namespace
    pub fn create_element_ns(&mut self, ns: Namespace, local: &str) -> NodeId {
        // HTML tag names are case-insensitive, foreign ones (viewBox, foreignObject) are not
        let local = match ns {
            Namespace::Html => local.to_ascii_lowercase(),
            _ => local.to_string(),
        };
        self.push(Node::element(QualName::new(ns, local)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    /// Whether `id` names a constructed element, text or comment node.
    ///
    /// Never panics; the sentinel, out-of-range ids and the document
    /// node all answer `false`.
    pub fn is_node(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| !matches!(n.data, NodeData::Document))
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn element(&self, id: NodeId) -> DomResult<&ElementData> {
        self.node(id)?
            .as_element()
            .ok_or(DomError::InvalidNodeType(id))
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType(id))
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while let Some(n) = self.get(current) {
            if current == ancestor {
                return true;
            }
            current = n.parent;
        }
        false
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is moved.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if !self.node(parent)?.can_have_children() {
            return Err(DomError::InvalidNodeType(parent));
        }
        if matches!(self.node(child)?.data, NodeData::Document) {
            return Err(DomError::InvalidNodeType(child));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child)?;

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        Ok(child)
    }

    /// Unlink a node from its parent. Detached nodes are left as they are.
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let node = self.node(id)?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Detach every child of `id`
    pub fn clear_children(&mut self, id: NodeId) -> DomResult<()> {
        let mut child = self.node(id)?.first_child;
        while child.is_valid() {
            let next = self.nodes[child.index()].next_sibling;
            self.detach(child)?;
            child = next;
        }
        Ok(())
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Descendants of `id` in document order, `id` itself excluded
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        stack.reverse();
        while let Some(current) = stack.pop() {
            out.push(current);
            let mut kids: Vec<NodeId> = self.children(current).map(|(c, _)| c).collect();
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Local tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.name.local.as_str())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|d| self.get(d).and_then(Node::as_text))
            .collect()
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.set_attr(name, value.to_string());
        Ok(())
    }

    /// Remove an attribute; absent attributes are not an error
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.element_mut(id)?.remove_attr(name))
    }

    pub fn set_class_name(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        self.set_attribute(id, "class", class)
    }

    // ------------------------------------------------------------------
    // Inline style
    // ------------------------------------------------------------------

    /// Raw text of the `style` attribute
    pub fn css_text(&self, id: NodeId) -> &str {
        self.get_attribute(id, "style").unwrap_or("")
    }

    /// Replace the `style` attribute verbatim. Blank text removes it.
    pub fn set_css_text(&mut self, id: NodeId, css_text: &str) -> DomResult<()> {
        if css_text.trim().is_empty() {
            self.remove_attribute(id, "style")?;
            return Ok(());
        }
        self.set_attribute(id, "style", css_text)
    }

    /// Parsed inline style
    pub fn style(&self, id: NodeId) -> StyleDeclaration {
        StyleDeclaration::parse(self.css_text(id))
    }

    pub fn style_property(&self, id: NodeId, name: &str) -> Option<String> {
        self.style(id).get_property(name).map(str::to_string)
    }

    pub fn set_style_property(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.set_style_properties(id, [(name, value)])
    }

    /// Set several properties with one rewrite of the `style` attribute.
    /// The given values are stored verbatim; an empty value removes.
    pub fn set_style_properties<'v, I>(&mut self, id: NodeId, properties: I) -> DomResult<()>
    where
        I: IntoIterator<Item = (&'v str, &'v str)>,
    {
        self.element(id)?;
        let mut style = self.style(id);
        for (name, value) in properties {
            style.set_property(name.trim(), value.trim());
        }
        self.set_css_text(id, &style.css_text())
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Register a listener. Earlier listeners for the same event are kept.
    pub fn add_event_listener(&mut self, id: NodeId, event_type: &str, listener: Listener) -> DomResult<()> {
        self.element_mut(id)?.listeners.push(EventListener {
            event_type: event_type.to_ascii_lowercase(),
            listener,
        });
        Ok(())
    }

    /// Listeners registered on `id` for `event_type`, in registration order
    pub fn listeners<'a>(&'a self, id: NodeId, event_type: &'a str) -> impl Iterator<Item = &'a Listener> + 'a {
        self.get(id)
            .and_then(Node::as_element)
            .into_iter()
            .flat_map(|e| e.listeners.iter())
            .filter(move |l| l.event_type.eq_ignore_ascii_case(event_type))
            .map(|l| &l.listener)
    }

    /// Dispatch an event at `target`, bubbling to ancestors when the
    /// event bubbles. Returns the number of listeners invoked.
    pub fn dispatch_event(&self, target: NodeId, event: &mut Event) -> DomResult<usize> {
        self.node(target)?;
        event.target = target;

        let mut invoked = 0;
        let mut current = target;
        while current.is_valid() {
            event.current_target = current;
            let listeners: Vec<Listener> = self.listeners(current, &event.event_type).cloned().collect();
            for listener in listeners {
                listener.call(event);
                invoked += 1;
            }
            if !event.bubbles || event.is_propagation_stopped() {
                break;
            }
            current = self.get(current).map_or(NodeId::NONE, |n| n.parent);
        }

        tracing::trace!("Dispatched {} to {} listeners", event.event_type, invoked);
        Ok(invoked)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_detached() {
        let mut tree = DomTree::new();
        let div = tree.create_element("DIV");

        let node = tree.get(div).unwrap();
        assert!(!node.parent.is_valid());
        assert_eq!(tree.tag_name(div), Some("div"));
    }

    #[test]
    fn test_foreign_names_keep_case() {
        let mut tree = DomTree::new();
        let fo = tree.create_element_ns(Namespace::Svg, "foreignObject");
        assert_eq!(tree.tag_name(fo), Some("foreignObject"));
    }

    #[test]
    fn test_is_node() {
        let mut tree = DomTree::new();
        let text = tree.create_text("hi");

        assert!(tree.is_node(text));
        assert!(!tree.is_node(tree.root()));
        assert!(!tree.is_node(NodeId::NONE));
        assert!(!tree.is_node(NodeId(999)));
    }

    #[test]
    fn test_append_moves_child() {
        let mut tree = DomTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let child = tree.create_element("span");

        tree.append_child(a, child).unwrap();
        tree.append_child(b, child).unwrap();

        assert_eq!(tree.children(a).count(), 0);
        assert_eq!(tree.children(b).count(), 1);
        assert_eq!(tree.get(child).unwrap().parent, b);
    }

    #[test]
    fn test_append_ancestor_rejected() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner).unwrap();

        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest { parent: inner, child: outer })
        );
        assert!(tree.append_child(inner, inner).is_err());
    }

    #[test]
    fn test_append_to_text_rejected() {
        let mut tree = DomTree::new();
        let text = tree.create_text("x");
        let span = tree.create_element("span");

        assert_eq!(tree.append_child(text, span), Err(DomError::InvalidNodeType(text)));
    }

    #[test]
    fn test_clear_children() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        for _ in 0..3 {
            let li = tree.create_element("li");
            tree.append_child(ul, li).unwrap();
        }

        tree.clear_children(ul).unwrap();
        assert_eq!(tree.children(ul).count(), 0);
        assert!(!tree.get(ul).unwrap().first_child.is_valid());
    }

    #[test]
    fn test_style_property_roundtrip() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");

        tree.set_style_property(div, "color", "red").unwrap();
        tree.set_style_property(div, "margin-top", "4px").unwrap();

        assert_eq!(tree.css_text(div), "color: red; margin-top: 4px;");
        assert_eq!(tree.style_property(div, "color").as_deref(), Some("red"));
    }

    #[test]
    fn test_style_properties_keep_semicolon_values() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");

        tree.set_style_properties(div, [("background", "url(data:image/png;base64,AAAA)"), ("color", "red")])
            .unwrap();
        assert_eq!(tree.css_text(div), "background: url(data:image/png;base64,AAAA); color: red;");

        tree.set_style_property(div, "width", "1px").unwrap();
        let background = tree.style_property(div, "background").unwrap();
        assert!(background.contains("data:image/png;base64,AAAA"));
        assert_eq!(tree.style_property(div, "color").as_deref(), Some("red"));
        assert_eq!(tree.style_property(div, "width").as_deref(), Some("1px"));
    }

    #[test]
    fn test_blank_css_text_removes_style() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.set_css_text(div, "color: red").unwrap();
        tree.set_css_text(div, "  ").unwrap();

        assert!(!tree.has_attribute(div, "style"));
    }

    #[test]
    fn test_text_content() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        let b = tree.create_element("b");
        let t1 = tree.create_text("Hello, ");
        let t2 = tree.create_text("World");
        tree.append_child(p, t1).unwrap();
        tree.append_child(p, b).unwrap();
        tree.append_child(b, t2).unwrap();

        assert_eq!(tree.text_content(p), "Hello, World");
    }
}
