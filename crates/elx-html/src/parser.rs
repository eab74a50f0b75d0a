//! HTML fragment parser
//!
//! Uses html5ever's RcDom and converts the result into detached nodes of
//! an existing [`DomTree`]. html5ever never rejects input; malformed
//! markup goes through its own error recovery.

use elx_dom::{DomResult, DomTree, Namespace, NodeId};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_fragment as html5ever_fragment, LocalName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// Element the fragment is parsed "inside of"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentContext {
    pub local: String,
    pub namespace: Namespace,
}

impl FragmentContext {
    /// `<body>` context, the innerHTML default
    pub fn html_body() -> Self {
        Self {
            local: "body".to_string(),
            namespace: Namespace::Html,
        }
    }

    /// `<svg>` context; element content parses into the SVG namespace
    pub fn svg() -> Self {
        Self {
            local: "svg".to_string(),
            namespace: Namespace::Svg,
        }
    }

    /// Context taken from an existing element, falling back to body
    pub fn for_element(tree: &DomTree, node: NodeId) -> Self {
        match tree.get(node).and_then(|n| n.as_element()) {
            Some(elem) => Self {
                local: elem.name.local.clone(),
                namespace: elem.name.ns.clone(),
            },
            None => Self::html_body(),
        }
    }
}

impl Default for FragmentContext {
    fn default() -> Self {
        Self::html_body()
    }
}

/// Parse `markup` into detached top-level nodes of `tree`.
///
/// Returns the ids of the top-level nodes in document order.
pub fn parse_fragment(tree: &mut DomTree, markup: &str, context: &FragmentContext) -> Vec<NodeId> {
    tracing::debug!("Parsing fragment in <{}> context ({} bytes)", context.local, markup.len());

    let context_name = QualName::new(
        None,
        html5ever::Namespace::from(context.namespace.url()),
        LocalName::from(context.local.as_str()),
    );
    let dom = html5ever_fragment(RcDom::default(), ParseOpts::default(), context_name, Vec::new(), false)
        .one(markup);

    // The fragment's nodes sit under a synthetic <html> element
    let document = &dom.document;
    let children = document.children.borrow();
    let container = children
        .iter()
        .find(|child| matches!(&child.data, RcNodeData::Element { name, .. } if &*name.local == "html"))
        .cloned()
        .unwrap_or_else(|| document.clone());

    let top_level: Vec<NodeId> = container
        .children
        .borrow()
        .iter()
        .filter_map(|child| convert_node(child, tree))
        .collect();

    tracing::debug!("Parsed {} top-level nodes", top_level.len());
    top_level
}

/// Replace the children of `node` with the parsed `markup`, using the
/// node itself as parsing context.
pub fn set_inner_html(tree: &mut DomTree, node: NodeId, markup: &str) -> DomResult<()> {
    tree.clear_children(node)?;
    let context = FragmentContext::for_element(tree, node);
    for child in parse_fragment(tree, markup, &context) {
        tree.append_child(node, child)?;
    }
    Ok(())
}

/// Convert an RcDom node (and its subtree) into our DOM format
fn convert_node(handle: &Handle, tree: &mut DomTree) -> Option<NodeId> {
    match &handle.data {
        RcNodeData::Text { contents } => Some(tree.create_text(&contents.borrow())),
        RcNodeData::Comment { contents } => Some(tree.create_comment(contents)),
        RcNodeData::Element { name, attrs, .. } => {
            let ns = Namespace::from_url(&name.ns);
            let id = tree.create_element_ns(ns, &name.local);

            for attr in attrs.borrow().iter() {
                let attr_name = match &attr.name.prefix {
                    Some(prefix) => format!("{}:{}", &**prefix, &*attr.name.local),
                    None => attr.name.local.to_string(),
                };
                tree.set_attribute(id, &attr_name, &attr.value).ok()?;
            }

            for child in handle.children.borrow().iter() {
                if let Some(child_id) = convert_node(child, tree) {
                    tree.append_child(id, child_id).ok()?;
                }
            }
            Some(id)
        }
        // Doctypes and processing instructions have no place in a fragment
        RcNodeData::Document | RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_fragment() {
        let mut tree = DomTree::new();
        let nodes = parse_fragment(&mut tree, "<b>hi</b> there", &FragmentContext::default());

        assert_eq!(nodes.len(), 2);
        assert_eq!(tree.tag_name(nodes[0]), Some("b"));
        assert_eq!(tree.text_content(nodes[0]), "hi");
        assert_eq!(tree.get(nodes[1]).unwrap().as_text(), Some(" there"));
    }

    #[test]
    fn test_parsed_nodes_are_detached() {
        let mut tree = DomTree::new();
        let nodes = parse_fragment(&mut tree, "<p>a</p>", &FragmentContext::default());
        assert!(!tree.get(nodes[0]).unwrap().parent.is_valid());
    }

    #[test]
    fn test_svg_context_namespace() {
        let mut tree = DomTree::new();
        let nodes = parse_fragment(&mut tree, r#"<circle r="4"/>"#, &FragmentContext::svg());

        let elem = tree.get(nodes[0]).unwrap().as_element().unwrap();
        assert_eq!(elem.name.ns, Namespace::Svg);
        assert_eq!(elem.get_attr("r"), Some("4"));
    }

    #[test]
    fn test_set_inner_html_replaces() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let old = tree.create_text("old");
        tree.append_child(div, old).unwrap();

        set_inner_html(&mut tree, div, "<i>new</i>").unwrap();

        assert_eq!(tree.children(div).count(), 1);
        assert_eq!(tree.text_content(div), "new");
    }
}
