//! Markup serialization for innerHTML/outerHTML reads

use elx_dom::{DomTree, ElementData, Namespace, NodeData, NodeId};

/// HTML elements written without an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source", "track", "wbr",
];

/// HTML elements whose text children are written unescaped
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Serializer settings
#[derive(Debug, Clone)]
pub struct HtmlSerializer {
    /// Break lines and indent nested elements
    pub pretty_print: bool,
    /// One indentation level
    pub indent: String,
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output with two spaces per level
    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            ..Self::default()
        }
    }

    /// Markup of the children of `node`
    pub fn serialize_inner(&self, tree: &DomTree, node: NodeId) -> String {
        let mut writer = Writer::new(self, tree);
        writer.children(node, 0);
        writer.out
    }

    /// Markup of `node` itself and everything below it
    pub fn serialize_outer(&self, tree: &DomTree, node: NodeId) -> String {
        let mut writer = Writer::new(self, tree);
        writer.node(node, 0);
        writer.out
    }
}

struct Writer<'a> {
    settings: &'a HtmlSerializer,
    tree: &'a DomTree,
    out: String,
}

impl<'a> Writer<'a> {
    fn new(settings: &'a HtmlSerializer, tree: &'a DomTree) -> Self {
        Self {
            settings,
            tree,
            out: String::new(),
        }
    }

    fn break_line(&mut self, depth: usize) {
        if !self.settings.pretty_print {
            return;
        }
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(&self.settings.indent);
        }
    }

    fn node(&mut self, id: NodeId, depth: usize) {
        let tree = self.tree;
        let Some(node) = tree.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Document => self.children(id, depth),
            NodeData::Element(elem) => self.element(id, elem, node.first_child.is_valid(), depth),
            NodeData::Text(text) => escape_into(&mut self.out, text, Escape::Text),
            NodeData::Comment(text) => {
                self.out.push_str("<!--");
                self.out.push_str(text);
                self.out.push_str("-->");
            }
        }
    }

    fn element(&mut self, id: NodeId, elem: &ElementData, has_children: bool, depth: usize) {
        let tag = elem.name.local.as_str();
        let html = elem.name.ns == Namespace::Html;

        if depth > 0 {
            self.break_line(depth);
        }
        self.out.push('<');
        self.out.push_str(tag);
        for attr in &elem.attrs {
            self.out.push(' ');
            self.out.push_str(&attr.name);
            // Empty values are written as bare boolean attributes
            if !attr.value.is_empty() {
                self.out.push_str("=\"");
                escape_into(&mut self.out, &attr.value, Escape::Attribute);
                self.out.push('"');
            }
        }

        if html && VOID_ELEMENTS.contains(&tag) {
            self.out.push('>');
            return;
        }
        if !html && !has_children {
            self.out.push_str("/>");
            return;
        }
        self.out.push('>');

        if html && RAW_TEXT_ELEMENTS.contains(&tag) {
            for (_, child) in self.tree.children(id) {
                if let Some(text) = child.as_text() {
                    self.out.push_str(text);
                }
            }
        } else {
            self.children(id, depth + 1);
        }

        if has_children {
            self.break_line(depth);
        }
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn children(&mut self, parent: NodeId, depth: usize) {
        let tree = self.tree;
        for (child, _) in tree.children(parent) {
            self.node(child, depth);
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Escape {
    Text,
    Attribute,
}

fn escape_into(out: &mut String, text: &str, mode: Escape) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if mode == Escape::Attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// innerHTML of `node`
pub fn inner_html(tree: &DomTree, node: NodeId) -> String {
    HtmlSerializer::new().serialize_inner(tree, node)
}

/// outerHTML of `node`
pub fn outer_html(tree: &DomTree, node: NodeId) -> String {
    HtmlSerializer::new().serialize_outer(tree, node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        let mut out = String::new();
        escape_into(&mut out, "Hello <world> & \"friends\"", Escape::Text);
        assert_eq!(out, "Hello &lt;world&gt; &amp; \"friends\"");
    }

    #[test]
    fn test_escape_attribute() {
        let mut out = String::new();
        escape_into(&mut out, "Hello <world> & \"friends\"", Escape::Attribute);
        assert_eq!(out, "Hello &lt;world&gt; &amp; &quot;friends&quot;");
    }

    #[test]
    fn test_outer_html() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let br = tree.create_element("br");
        let text = tree.create_text("a < b");
        tree.set_attribute(div, "id", "x").unwrap();
        tree.set_attribute(div, "hidden", "").unwrap();
        tree.append_child(div, text).unwrap();
        tree.append_child(div, br).unwrap();

        assert_eq!(outer_html(&tree, div), r#"<div id="x" hidden>a &lt; b<br></div>"#);
        assert_eq!(inner_html(&tree, div), "a &lt; b<br>");
    }

    #[test]
    fn test_empty_svg_self_closes() {
        let mut tree = DomTree::new();
        let svg = tree.create_element_ns(Namespace::Svg, "svg");
        let circle = tree.create_element_ns(Namespace::Svg, "circle");
        tree.set_attribute(circle, "r", "2").unwrap();
        tree.append_child(svg, circle).unwrap();

        assert_eq!(outer_html(&tree, svg), r#"<svg><circle r="2"/></svg>"#);
    }

    #[test]
    fn test_pretty_print() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let li = tree.create_element("li");
        tree.append_child(ul, li).unwrap();

        assert_eq!(HtmlSerializer::pretty().serialize_outer(&tree, ul), "<ul>\n  <li></li>\n</ul>");
    }
}
