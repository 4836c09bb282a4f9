//! # Tree Operations
//!
//! Address-by-id operations over a root node sequence. Every search is a
//! pre-order depth-first walk and the first match wins; ids are unique, so
//! the first match is the only match in a well-formed document.
//!
//! Removal and duplication check the whole current level before recursing
//! into children, matching how sibling lists are scanned by an editor
//! splice.

use crate::id_generator::IdGenerator;
use crate::model::{Node, Props};
use std::collections::HashSet;

/// Find a node by id (node checked before its children)
pub fn find_node<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_node`]
pub fn find_node_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = node.children.as_mut() {
            if let Some(found) = find_node_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn contains_node(nodes: &[Node], id: &str) -> bool {
    find_node(nodes, id).is_some()
}

/// Append `node` under `parent_id`, or at the root when no parent is given.
///
/// Hands the node back when the parent cannot be resolved.
pub fn insert_under(nodes: &mut Vec<Node>, parent_id: Option<&str>, node: Node) -> Result<(), Node> {
    match parent_id {
        None => {
            nodes.push(node);
            Ok(())
        }
        Some(parent_id) => match find_node_mut(nodes, parent_id) {
            Some(parent) => {
                parent.children_mut().push(node);
                Ok(())
            }
            None => Err(node),
        },
    }
}

/// Remove the first node with `id` from whichever sequence holds it
pub fn remove_by_id(nodes: &mut Vec<Node>, id: &str) -> Option<Node> {
    if let Some(pos) = nodes.iter().position(|n| n.id == id) {
        return Some(nodes.remove(pos));
    }

    for node in nodes.iter_mut() {
        if let Some(children) = node.children.as_mut() {
            if let Some(removed) = remove_by_id(children, id) {
                return Some(removed);
            }
        }
    }

    None
}

/// Shallow-merge `partial` into the node's props. Returns false if not found.
pub fn update_props(nodes: &mut [Node], id: &str, partial: &Props) -> bool {
    match find_node_mut(nodes, id) {
        Some(node) => {
            let mut merged = node.props.clone();
            for (key, value) in partial {
                merged.insert(key.clone(), value.clone());
            }
            node.props = merged;
            true
        }
        None => false,
    }
}

/// Deep-clone the node with `id`, give the clone and all its descendants
/// fresh ids, and insert it right after the original. Returns the clone's id.
pub fn duplicate(nodes: &mut Vec<Node>, id: &str, ids: &mut dyn IdGenerator) -> Option<String> {
    if let Some(pos) = nodes.iter().position(|n| n.id == id) {
        let mut clone = nodes[pos].clone();
        reassign_ids(&mut clone, ids);
        let new_id = clone.id.clone();
        nodes.insert(pos + 1, clone);
        return Some(new_id);
    }

    for node in nodes.iter_mut() {
        if let Some(children) = node.children.as_mut() {
            if let Some(new_id) = duplicate(children, id, ids) {
                return Some(new_id);
            }
        }
    }

    None
}

/// Replace ids of `node` and its subtree, pre-order
pub fn reassign_ids(node: &mut Node, ids: &mut dyn IdGenerator) {
    node.id = ids.new_id();
    if let Some(children) = node.children.as_mut() {
        for child in children {
            reassign_ids(child, ids);
        }
    }
}

/// All ids in pre-order
pub fn collect_ids(nodes: &[Node]) -> Vec<String> {
    let mut out = Vec::new();
    walk(nodes, &mut |node: &Node| out.push(node.id.clone()));
    out
}

/// Ids that occur more than once, in first-repeat order
pub fn duplicate_ids(nodes: &[Node]) -> Vec<String> {
    repeated_ids(std::iter::once(nodes))
}

/// Ids that occur more than once across several trees, e.g. every page
pub fn repeated_ids<'a>(trees: impl IntoIterator<Item = &'a [Node]>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();
    for nodes in trees {
        walk(nodes, &mut |node: &Node| {
            if !seen.insert(node.id.clone()) && !repeated.contains(&node.id) {
                repeated.push(node.id.clone());
            }
        });
    }
    repeated
}

/// Sibling sequence addressed by a parent id (root when `None`).
/// A leaf parent yields an empty slice; nothing is created.
pub fn children_of_mut<'a>(nodes: &'a mut [Node], parent_id: Option<&str>) -> Option<&'a mut [Node]> {
    match parent_id {
        None => Some(nodes),
        Some(parent_id) => {
            find_node_mut(nodes, parent_id).map(|parent| parent.children.as_deref_mut().unwrap_or_default())
        }
    }
}

fn walk(nodes: &[Node], visit: &mut dyn FnMut(&Node)) {
    for node in nodes {
        visit(node);
        walk(node.children(), visit);
    }
}
