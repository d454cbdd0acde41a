//! The IR node shape and its wire codec.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TreeResult;
use crate::path::PathSegment;

/// Type-specific node properties. Opaque to the mutation engine.
pub type Properties = Map<String, Value>;

/// Named slots, iterated in insertion order.
pub type Slots = IndexMap<String, Vec<Node>>;

/// One typed element of the IR tree.
///
/// Wire shape: `{ id, type, properties?, children?: [Node], slots?: { name: [Node] } }`.
/// A node owns its children outright; moving a node between parents means
/// taking it out of one container and putting it into another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Properties,
    /// The default slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Slots>,
}

impl Node {
    /// A bare node with no properties, children, or slots.
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            properties: Properties::new(),
            children: None,
            slots: None,
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Appends `child` to the default slot, creating it if absent.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Appends `child` to the named slot, creating it if absent.
    pub fn with_slot_child(mut self, slot: impl Into<String>, child: Node) -> Self {
        self.slots
            .get_or_insert_with(Slots::new)
            .entry(slot.into())
            .or_default()
            .push(child);
        self
    }

    /// Default-slot children; empty when the slot is absent.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    pub fn slot(&self, name: &str) -> Option<&[Node]> {
        self.slots.as_ref()?.get(name).map(Vec::as_slice)
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().flat_map(|s| s.keys()).map(String::as_str)
    }

    /// Direct children in walk order: default slot first, then named slots
    /// in insertion order.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        let children = self.children.iter().flatten();
        let slotted = self.slots.iter().flat_map(|s| s.values()).flatten();
        children.chain(slotted)
    }

    pub fn child_nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        let children = self.children.iter_mut().flatten();
        let slotted = self.slots.iter_mut().flat_map(|s| s.values_mut()).flatten();
        children.chain(slotted)
    }

    /// Direct children paired with their position in this node.
    pub fn placements(&self) -> impl Iterator<Item = (PathSegment, &Node)> {
        let children = self
            .children()
            .iter()
            .enumerate()
            .map(|(index, node)| (PathSegment::Child { index }, node));
        let slotted = self.slots.iter().flatten().flat_map(|(name, members)| {
            members.iter().enumerate().map(move |(index, node)| {
                (
                    PathSegment::Slot {
                        name: name.clone(),
                        index,
                    },
                    node,
                )
            })
        });
        children.chain(slotted)
    }

    /// Decodes a node from its wire shape.
    ///
    /// Anything that is not a tree (a non-object, a non-string id, a
    /// non-array `children`, ...) is rejected with [`TreeError::Decode`].
    ///
    /// [`TreeError::Decode`]: crate::TreeError::Decode
    pub fn from_value(value: Value) -> TreeResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(src: &str) -> TreeResult<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn to_value(&self) -> TreeResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string_pretty(&self) -> TreeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Node {
        Node::new("root", "VStack")
            .with_child(Node::new("a", "Text"))
            .with_slot_child("icon", Node::new("i", "Icon"))
            .with_child(Node::new("b", "Text"))
    }

    #[test]
    fn walk_order_is_children_then_slots() {
        let root = sample();
        let ids: Vec<&str> = root.child_nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "i"]);
    }

    #[test]
    fn placements_carry_positions() {
        let root = sample();
        let segments: Vec<PathSegment> = root.placements().map(|(seg, _)| seg).collect();
        assert_eq!(
            segments,
            vec![
                PathSegment::Child { index: 0 },
                PathSegment::Child { index: 1 },
                PathSegment::Slot {
                    name: "icon".into(),
                    index: 0
                },
            ]
        );
    }

    #[test]
    fn decodes_wire_shape() {
        let node = Node::from_value(json!({
            "id": "btn",
            "type": "Button",
            "properties": {"variant": "ghost"},
            "slots": {"content": [{"id": "t", "type": "Text"}]}
        }))
        .unwrap();
        assert_eq!(node.type_name, "Button");
        assert!(node.children.is_none());
        assert_eq!(node.slot("content").unwrap()[0].id, "t");
        assert_eq!(node.properties["variant"], json!("ghost"));
    }

    #[test]
    fn encodes_without_absent_fields() {
        let value = Node::new("t", "Text").to_value().unwrap();
        assert_eq!(value, json!({"id": "t", "type": "Text"}));
        let value = Node::new("s", "HStack")
            .with_child(Node::new("t", "Text"))
            .to_value()
            .unwrap();
        assert_eq!(
            value,
            json!({"id": "s", "type": "HStack", "children": [{"id": "t", "type": "Text"}]})
        );
    }

    #[test]
    fn rejects_non_trees() {
        assert!(Node::from_value(json!([1, 2])).is_err());
        assert!(Node::from_value(json!({"id": 3, "type": "Text"})).is_err());
        assert!(Node::from_value(json!({"id": "x", "type": "Text", "children": {}})).is_err());
        assert!(Node::from_json_str("{").is_err());
    }
}
