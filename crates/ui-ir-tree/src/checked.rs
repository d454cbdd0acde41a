//! Schema-aware inserts for callers that want edits refused up front.
//!
//! The plain functions in [`crate::mutate`] never look at a schema; these
//! wrappers consult a [`SchemaRegistry`] first and leave `parent` untouched
//! when the insert would be reported by the validator.

use ui_ir_schema::SchemaRegistry;

use crate::error::{InsertRejection, TreeError, TreeResult};
use crate::mutate::{add_child, add_to_slot};
use crate::node::Node;

fn rejected(parent: &Node, child: &Node, reason: InsertRejection) -> TreeError {
    TreeError::IllegalInsert {
        parent: parent.type_name.clone(),
        child: child.type_name.clone(),
        reason,
    }
}

/// [`add_child`] that refuses illegal containment and over-capacity inserts.
pub fn add_child_checked(
    registry: &SchemaRegistry,
    parent: &mut Node,
    child: Node,
    index: Option<usize>,
) -> TreeResult<()> {
    if !registry.can_contain(&parent.type_name, &child.type_name) {
        return Err(rejected(parent, &child, InsertRejection::Containment));
    }
    if let Some(max) = registry.max_children(&parent.type_name) {
        if parent.child_count() >= max {
            return Err(rejected(parent, &child, InsertRejection::Capacity { max }));
        }
    }
    add_child(parent, child, index);
    Ok(())
}

/// [`add_to_slot`] that refuses disallowed slot names and illegal containment.
pub fn add_to_slot_checked(
    registry: &SchemaRegistry,
    parent: &mut Node,
    slot: &str,
    child: Node,
    index: Option<usize>,
) -> TreeResult<()> {
    if !registry.is_slot_allowed(&parent.type_name, slot) {
        return Err(rejected(parent, &child, InsertRejection::Slot(slot.to_string())));
    }
    if !registry.can_contain(&parent.type_name, &child.type_name) {
        return Err(rejected(parent, &child, InsertRejection::Containment));
    }
    add_to_slot(parent, slot, child, index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_forbidden_nesting() {
        let reg = SchemaRegistry::with_defaults();
        let mut button = Node::new("b", "Button");
        let err = add_child_checked(&reg, &mut button, Node::new("s", "HStack"), None).unwrap_err();
        assert!(matches!(
            err,
            TreeError::IllegalInsert {
                reason: InsertRejection::Containment,
                ..
            }
        ));
        assert!(button.children.is_none());
    }

    #[test]
    fn refuses_over_capacity() {
        let reg = SchemaRegistry::with_defaults();
        let mut button = Node::new("b", "Button");
        add_child_checked(&reg, &mut button, Node::new("t1", "Text"), None).unwrap();
        let err = add_child_checked(&reg, &mut button, Node::new("t2", "Text"), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot insert `Text` into `Button`: default slot already holds its maximum of 1 children"
        );
        assert_eq!(button.child_count(), 1);
    }

    #[test]
    fn slot_checks() {
        let reg = SchemaRegistry::with_defaults();
        let mut button = Node::new("b", "Button");
        add_to_slot_checked(&reg, &mut button, "icon", Node::new("i", "Icon"), None).unwrap();
        assert!(matches!(
            add_to_slot_checked(&reg, &mut button, "footer", Node::new("t", "Text"), None),
            Err(TreeError::IllegalInsert {
                reason: InsertRejection::Slot(_),
                ..
            })
        ));
        assert!(add_to_slot_checked(&reg, &mut button, "content", Node::new("v", "VStack"), None).is_err());
        assert_eq!(button.slot_names().collect::<Vec<_>>(), vec!["icon"]);
    }
}
