//! Structural edits.
//!
//! None of these consult a schema: a tree may pass through states the schema
//! considers illegal (for example halfway through a drag) and is checked only
//! when a validator runs. See [`crate::checked`] for the opt-in alternative.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::find::{find_by_id, find_by_id_mut};
use crate::node::{Node, Slots};

fn insert_at(nodes: &mut Vec<Node>, child: Node, index: Option<usize>) {
    match index {
        Some(i) if i <= nodes.len() => nodes.insert(i, child),
        _ => nodes.push(child),
    }
}

/// Inserts `child` into the default slot of `parent`.
///
/// `index` beyond the end (or `None`) appends. The default slot is created if
/// absent. Always succeeds.
pub fn add_child(parent: &mut Node, child: Node, index: Option<usize>) -> bool {
    insert_at(parent.children.get_or_insert_with(Vec::new), child, index);
    true
}

/// Inserts `child` into `parent.slots[slot]`, creating the slot if absent.
pub fn add_to_slot(parent: &mut Node, slot: &str, child: Node, index: Option<usize>) -> bool {
    let members = parent
        .slots
        .get_or_insert_with(Slots::new)
        .entry(slot.to_string())
        .or_default();
    insert_at(members, child, index);
    true
}

/// [`add_child`] on the node with id `parent_id`; false if it is absent.
pub fn insert_child(root: &mut Node, parent_id: &str, child: Node, index: Option<usize>) -> bool {
    match find_by_id_mut(root, parent_id) {
        Some(parent) => add_child(parent, child, index),
        None => false,
    }
}

/// [`add_to_slot`] on the node with id `parent_id`; false if it is absent.
pub fn insert_into_slot(
    root: &mut Node,
    parent_id: &str,
    slot: &str,
    child: Node,
    index: Option<usize>,
) -> bool {
    match find_by_id_mut(root, parent_id) {
        Some(parent) => add_to_slot(parent, slot, child, index),
        None => false,
    }
}

/// Takes the first node with `id` (pre-order) out of the tree.
///
/// The root itself is never detached. A named slot emptied by the removal is
/// deleted from its parent's slot map.
pub fn detach(root: &mut Node, id: &str) -> Option<Node> {
    if let Some(children) = root.children.as_mut() {
        for i in 0..children.len() {
            if children[i].id == id {
                return Some(children.remove(i));
            }
            if let Some(found) = detach(&mut children[i], id) {
                return Some(found);
            }
        }
    }
    let slots = root.slots.as_mut()?;
    for slot_index in 0..slots.len() {
        let Some((_, members)) = slots.get_index_mut(slot_index) else {
            continue;
        };
        let mut removed = None;
        for i in 0..members.len() {
            if members[i].id == id {
                removed = Some(members.remove(i));
                break;
            }
            if let Some(found) = detach(&mut members[i], id) {
                return Some(found);
            }
        }
        if let Some(node) = removed {
            if members.is_empty() {
                slots.shift_remove_index(slot_index);
            }
            return Some(node);
        }
    }
    None
}

/// Removes the first node with `id`; false if no such node (or it is the root).
pub fn remove(root: &mut Node, id: &str) -> bool {
    let removed = detach(root, id).is_some();
    debug!(id, removed, "remove");
    removed
}

/// Where a moved node lands inside its new parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertPosition {
    /// Named slot; `None` targets the default slot.
    pub slot: Option<String>,
    /// Insertion index; `None` appends.
    pub index: Option<usize>,
}

impl InsertPosition {
    pub fn append() -> Self {
        Self::default()
    }

    pub fn at(index: usize) -> Self {
        Self {
            slot: None,
            index: Some(index),
        }
    }

    pub fn slot(name: impl Into<String>) -> Self {
        Self {
            slot: Some(name.into()),
            index: None,
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    fn insert(&self, parent: &mut Node, child: Node) -> bool {
        match &self.slot {
            Some(slot) => add_to_slot(parent, slot, child, self.index),
            None => add_child(parent, child, self.index),
        }
    }
}

/// How [`move_node_with`] sequences its steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveMode {
    /// Copy the node, remove the original, then look up the destination.
    ///
    /// Not transactional: if the destination cannot be found after the
    /// original was removed (it is absent, or it lived inside the moved
    /// subtree) the node is dropped and is no longer in the tree.
    #[default]
    Faithful,
    /// Check the source and the destination before touching the tree. On
    /// failure the tree is left unchanged.
    Transactional,
}

/// Relocates node `id` under `new_parent_id` using [`MoveMode::Faithful`].
///
/// Returns false when any step fails. **A false return may mean the node
/// was lost**; use [`move_node_with`] with [`MoveMode::Transactional`] when
/// that is unacceptable.
pub fn move_node(root: &mut Node, id: &str, new_parent_id: &str, position: InsertPosition) -> bool {
    move_node_with(root, id, new_parent_id, position, MoveMode::Faithful)
}

pub fn move_node_with(
    root: &mut Node,
    id: &str,
    new_parent_id: &str,
    position: InsertPosition,
    mode: MoveMode,
) -> bool {
    match mode {
        MoveMode::Faithful => move_faithful(root, id, new_parent_id, &position),
        MoveMode::Transactional => move_transactional(root, id, new_parent_id, &position),
    }
}

fn move_faithful(root: &mut Node, id: &str, new_parent_id: &str, position: &InsertPosition) -> bool {
    let Some(copy) = find_by_id(root, id).cloned() else {
        debug!(id, "move: source not found");
        return false;
    };
    if !remove(root, id) {
        debug!(id, "move: source could not be removed");
        return false;
    }
    let Some(parent) = find_by_id_mut(root, new_parent_id) else {
        warn!(
            id,
            new_parent_id, "move: destination not found after removal; node dropped from tree"
        );
        return false;
    };
    position.insert(parent, copy)
}

fn move_transactional(
    root: &mut Node,
    id: &str,
    new_parent_id: &str,
    position: &InsertPosition,
) -> bool {
    let Some(source) = find_by_id(root, id) else {
        debug!(id, "move: source not found");
        return false;
    };
    if find_by_id(source, new_parent_id).is_some() {
        debug!(id, new_parent_id, "move: destination lies inside the moved subtree");
        return false;
    }
    if find_by_id(root, new_parent_id).is_none() {
        debug!(new_parent_id, "move: destination not found");
        return false;
    }
    let Some(node) = detach(root, id) else {
        debug!(id, "move: source could not be removed");
        return false;
    };
    match find_by_id_mut(root, new_parent_id) {
        Some(parent) => position.insert(parent, node),
        None => false,
    }
}

/// Shallow-merges `patch` into the properties of node `id`.
pub fn update_properties(root: &mut Node, id: &str, patch: Map<String, Value>) -> bool {
    match find_by_id_mut(root, id) {
        Some(node) => {
            node.properties.extend(patch);
            true
        }
        None => false,
    }
}
