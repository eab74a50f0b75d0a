//! Children composition
//!
//! A lone string child is markup; everything inside a list is literal.
//! Nested lists flatten in document order at any depth.

use elx_dom::{DomError, DomResult, DomTree, NodeId};

use crate::args::Children;
use crate::value::{format_number, Arg, Child};

/// Whether `value` refers to a constructed node of `tree`
pub fn is_node(tree: &DomTree, value: &Child) -> bool {
    matches!(value, Child::Node(id) if tree.is_node(*id))
}

impl Arg {
    /// Whether this argument refers to a constructed node of `tree`
    pub fn is_node_in(&self, tree: &DomTree) -> bool {
        matches!(self, Arg::Node(id) if tree.is_node(*id))
    }
}

/// Add `children` to `parent`.
///
/// Children are checked up front, so on error nothing was appended.
pub fn compose(tree: &mut DomTree, parent: NodeId, children: &Children) -> DomResult<()> {
    validate(tree, parent, children)?;
    match children {
        Children::None => Ok(()),
        Children::Markup(markup) => elx_html::set_inner_html(tree, parent, markup),
        Children::Nodes(list) => append_children(tree, parent, list).map(|_| ()),
    }
}

/// Check that every node in `children` may be appended under `parent`
pub fn validate(tree: &DomTree, parent: NodeId, children: &Children) -> DomResult<()> {
    let node = tree.get(parent).ok_or(DomError::NotFound(parent))?;
    if !node.can_have_children() {
        return Err(DomError::InvalidNodeType(parent));
    }
    let Children::Nodes(list) = children else {
        return Ok(());
    };

    let mut stack = vec![list.iter()];
    while let Some(iter) = stack.last_mut() {
        let Some(child) = iter.next() else {
            stack.pop();
            continue;
        };
        match child {
            Child::List(items) => stack.push(items.iter()),
            Child::Node(id) if tree.is_node(*id) && tree.is_inclusive_ancestor(*id, parent) => {
                return Err(DomError::HierarchyRequest { parent, child: *id });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Append a nested list as literal children, returning how many nodes
/// were appended
pub fn append_children(tree: &mut DomTree, parent: NodeId, list: &[Child]) -> DomResult<usize> {
    let mut appended = 0;
    let mut stack = vec![list.iter()];

    while let Some(iter) = stack.last_mut() {
        let Some(child) = iter.next() else {
            stack.pop();
            continue;
        };
        match child {
            Child::List(items) => stack.push(items.iter()),
            leaf => {
                if append_leaf(tree, parent, leaf)? {
                    appended += 1;
                }
            }
        }
    }

    Ok(appended)
}

fn append_leaf(tree: &mut DomTree, parent: NodeId, child: &Child) -> DomResult<bool> {
    if child.is_falsy() {
        return Ok(false);
    }
    let node = match child {
        Child::Text(text) => tree.create_text(text),
        Child::Number(n) => tree.create_text(&format_number(*n)),
        Child::Node(id) if tree.is_node(*id) => *id,
        Child::Node(id) => {
            tracing::warn!("Skipping child {}: not a node of this document", id);
            return Ok(false);
        }
        Child::List(_) | Child::Empty => return Ok(false),
    };
    tree.append_child(parent, node)?;
    Ok(true)
}
