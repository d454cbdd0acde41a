//! Tree search.
//!
//! Every search is a depth-first pre-order walk: a node is visited before its
//! descendants, default-slot children before named slots, and named slots in
//! insertion order. When ids collide the first node in that order wins, so
//! results are deterministic but not necessarily the node a caller had in
//! mind; [`validate_unique_ids`] detects the condition.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::node::Node;
use crate::path::PathSegment;

pub fn find_by_id<'a>(root: &'a Node, id: &str) -> Option<&'a Node> {
    if root.id == id {
        return Some(root);
    }
    root.child_nodes().find_map(|child| find_by_id(child, id))
}

pub fn find_by_id_mut<'a>(root: &'a mut Node, id: &str) -> Option<&'a mut Node> {
    if root.id == id {
        return Some(root);
    }
    root.child_nodes_mut()
        .find_map(|child| find_by_id_mut(child, id))
}

/// The node whose default slot or named slot directly holds `id`.
///
/// `None` when `id` is the root or absent.
pub fn find_parent<'a>(root: &'a Node, id: &str) -> Option<&'a Node> {
    for child in root.child_nodes() {
        if child.id == id {
            return Some(root);
        }
        if let Some(parent) = find_parent(child, id) {
            return Some(parent);
        }
    }
    None
}

/// Segments leading from `root` to `id`; empty for the root or an absent id.
pub fn get_path(root: &Node, id: &str) -> Vec<PathSegment> {
    let mut path = Vec::new();
    if !path_into(root, id, &mut path) {
        path.clear();
    }
    path
}

fn path_into(node: &Node, id: &str, path: &mut Vec<PathSegment>) -> bool {
    for (segment, child) in node.placements() {
        path.push(segment);
        if child.id == id || path_into(child, id, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Depth of `id` below `root` (the root is at depth 0).
pub fn depth(root: &Node, id: &str) -> Option<usize> {
    if root.id == id {
        return Some(0);
    }
    root.child_nodes()
        .find_map(|child| depth(child, id).map(|d| d + 1))
}

/// Like [`depth`], but `-1` when `id` is not in the tree.
pub fn get_depth(root: &Node, id: &str) -> isize {
    depth(root, id).map_or(-1, |d| d as isize)
}

/// Every id in the tree, pre-order.
pub fn get_all_ids(root: &Node) -> Vec<String> {
    let mut ids = Vec::new();
    collect_ids(root, &mut ids);
    ids
}

fn collect_ids(node: &Node, ids: &mut Vec<String>) {
    ids.push(node.id.clone());
    for child in node.child_nodes() {
        collect_ids(child, ids);
    }
}

/// Outcome of [`validate_unique_ids`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueIdReport {
    pub is_valid: bool,
    /// Ids seen more than once, in order of first appearance.
    pub duplicates: IndexSet<String>,
}

pub fn validate_unique_ids(root: &Node) -> UniqueIdReport {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for id in get_all_ids(root) {
        *counts.entry(id).or_default() += 1;
    }
    let duplicates: IndexSet<String> = counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(id, _)| id)
        .collect();
    UniqueIdReport {
        is_valid: duplicates.is_empty(),
        duplicates,
    }
}
