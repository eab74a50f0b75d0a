//! Element factory
//!
//! [`Builder`] runs normalization, shorthand expansion, attribute
//! application and children composition against one [`Document`].

use elx_dom::{Document, Namespace, NodeId};
use elx_html::FragmentContext;

use crate::apply::apply_attributes;
use crate::args::{normalize, Children, IntoArgs, IntoChildren, TagSlot};
use crate::attributes::Attributes;
use crate::compose::{compose, validate};
use crate::config::BuilderConfig;
use crate::error::Result;
use crate::lookup::{by_id, NodeRef};
use crate::shorthand::expand;

/// Handle to a constructed element.
///
/// The node itself lives in the document's tree; the handle carries the
/// replace-children mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element(NodeId);

impl Element {
    pub fn id(self) -> NodeId {
        self.0
    }

    /// Clear this element and recompose its children.
    ///
    /// A lone string is parsed as markup; anything else is literal.
    pub fn replace_children(self, builder: &mut Builder<'_>, children: impl IntoChildren) -> Result<Element> {
        builder.replace_children(self, children)
    }
}

impl From<Element> for NodeId {
    fn from(el: Element) -> Self {
        el.0
    }
}

/// Constructs elements into a document
#[derive(Debug)]
pub struct Builder<'d> {
    doc: &'d mut Document,
    config: BuilderConfig,
}

impl<'d> Builder<'d> {
    pub fn new(doc: &'d mut Document) -> Self {
        Self::with_config(doc, BuilderConfig::default())
    }

    pub fn with_config(doc: &'d mut Document, config: BuilderConfig) -> Self {
        Self { doc, config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &*self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut *self.doc
    }

    /// Build an HTML element from `(tag?, attributes?, children?)`.
    ///
    /// ```rust,ignore
    /// let card = b.h(("div#main.card", attrs! { "title" => "t" }, ["text"]))?;
    /// ```
    pub fn h(&mut self, args: impl IntoArgs) -> Result<Element> {
        let call = normalize(args.into_args(), TagSlot::Positional);
        let mut attributes = call.attributes;
        let tag = expand(&call.tag, &mut attributes, self.config.default_tag());
        self.construct(Namespace::Html, &tag, &attributes, &call.children)
    }

    /// Build an SVG element. The tag defaults to the configured svg root.
    ///
    /// A tag starting with `<` is a literal fragment, parsed directly into
    /// the SVG namespace.
    pub fn svg(&mut self, args: impl IntoArgs) -> Result<Element> {
        let call = normalize(args.into_args(), TagSlot::Positional);
        if call.tag.trim_start().starts_with('<') {
            if !call.attributes.is_empty() || !call.children.is_none() {
                tracing::debug!(
                    "Ignoring {} attributes and children passed with svg markup",
                    call.attributes.len()
                );
            }
            return self.svg_fragment(&call.tag);
        }
        let mut attributes = call.attributes;
        let tag = expand(&call.tag, &mut attributes, self.config.svg_tag());
        self.construct(Namespace::Svg, &tag, &attributes, &call.children)
    }

    /// A single parsed element is returned as is; anything else is wrapped
    /// in an svg root.
    fn svg_fragment(&mut self, markup: &str) -> Result<Element> {
        let tree = self.doc.tree_mut();
        let nodes = elx_html::parse_fragment(tree, markup, &FragmentContext::svg());

        let elements: Vec<NodeId> = nodes
            .iter()
            .copied()
            .filter(|&id| tree.get(id).is_some_and(|n| n.is_element()))
            .collect();
        if let [single] = elements.as_slice() {
            tracing::debug!("Built svg fragment <{}>", tree.tag_name(*single).unwrap_or_default());
            return Ok(Element(*single));
        }

        let root = tree.create_element_ns(Namespace::Svg, self.config.svg_tag());
        for node in nodes {
            tree.append_child(root, node)?;
        }
        tracing::debug!("Wrapped {} svg fragment elements in {}", elements.len(), root);
        Ok(Element(root))
    }

    /// Replace every child of `element`.
    ///
    /// On error the element keeps its previous children.
    pub fn replace_children(&mut self, element: Element, children: impl IntoChildren) -> Result<Element> {
        let children = children.into_children();
        let tree = self.doc.tree_mut();
        validate(tree, element.id(), &children)?;
        tree.clear_children(element.id())?;
        compose(tree, element.id(), &children)?;
        Ok(element)
    }

    /// Create, populate and return one detached element
    pub(crate) fn construct(
        &mut self,
        ns: Namespace,
        tag: &str,
        attributes: &Attributes,
        children: &Children,
    ) -> Result<Element> {
        let tree = self.doc.tree_mut();
        let node = tree.create_element_ns(ns, tag);
        apply_attributes(tree, node, attributes)?;
        compose(tree, node, children)?;

        tracing::debug!("Built <{}> {} ({} attributes)", tag, node, attributes.len());
        Ok(Element(node))
    }

    /// Attach `child` under `parent`
    pub fn append(&mut self, parent: impl Into<NodeId>, child: Element) -> Result<Element> {
        self.doc.tree_mut().append_child(parent.into(), child.id())?;
        Ok(child)
    }

    /// Look up an element of the document by id
    pub fn by_id(&self, id: &str, root: Option<NodeId>) -> Option<NodeRef<'_>> {
        by_id(&*self.doc, id, root)
    }

    pub fn inner_html(&self, element: Element) -> String {
        elx_html::inner_html(self.doc.tree(), element.id())
    }

    pub fn outer_html(&self, element: Element) -> String {
        elx_html::outer_html(self.doc.tree(), element.id())
    }
}
