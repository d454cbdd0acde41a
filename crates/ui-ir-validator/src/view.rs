//! Read-only access to a tree, shared by typed nodes and raw JSON.

use serde_json::Value;
use ui_ir_tree::Node;

/// A string field as found on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    Missing,
    NotString,
    Str(&'a str),
}

impl<'a> Field<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Field::Str(s) => Some(*s),
            _ => None,
        }
    }
}

/// A container field (`children`, `slots`, or one slot entry).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<T> {
    Absent,
    Present(T),
    Malformed,
}

pub type SlotEntries<'a, T> = Vec<(&'a str, Shape<&'a [T]>)>;

/// What the validator needs to read from a node.
pub trait TreeView: Sized {
    fn id_field(&self) -> Field<'_>;
    fn type_field(&self) -> Field<'_>;
    fn property(&self, key: &str) -> Option<&Value>;
    fn children_shape(&self) -> Shape<&[Self]>;
    fn slots_shape(&self) -> Shape<SlotEntries<'_, Self>>;
}

fn non_empty(s: &str) -> Field<'_> {
    if s.is_empty() {
        Field::Missing
    } else {
        Field::Str(s)
    }
}

impl TreeView for Node {
    fn id_field(&self) -> Field<'_> {
        non_empty(&self.id)
    }

    fn type_field(&self) -> Field<'_> {
        non_empty(&self.type_name)
    }

    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    fn children_shape(&self) -> Shape<&[Self]> {
        match &self.children {
            Some(children) => Shape::Present(children.as_slice()),
            None => Shape::Absent,
        }
    }

    fn slots_shape(&self) -> Shape<SlotEntries<'_, Self>> {
        match &self.slots {
            Some(slots) => Shape::Present(
                slots
                    .iter()
                    .map(|(name, members)| (name.as_str(), Shape::Present(members.as_slice())))
                    .collect(),
            ),
            None => Shape::Absent,
        }
    }
}

fn string_field<'a>(value: &'a Value, key: &str) -> Field<'a> {
    match value.get(key) {
        None => Field::Missing,
        Some(Value::String(s)) => non_empty(s),
        Some(_) => Field::NotString,
    }
}

fn array_shape(value: Option<&Value>) -> Shape<&[Value]> {
    match value {
        None | Some(Value::Null) => Shape::Absent,
        Some(Value::Array(items)) => Shape::Present(items.as_slice()),
        Some(_) => Shape::Malformed,
    }
}

impl TreeView for Value {
    fn id_field(&self) -> Field<'_> {
        string_field(self, "id")
    }

    fn type_field(&self) -> Field<'_> {
        string_field(self, "type")
    }

    fn property(&self, key: &str) -> Option<&Value> {
        self.get("properties")?.get(key)
    }

    fn children_shape(&self) -> Shape<&[Self]> {
        array_shape(self.get("children"))
    }

    fn slots_shape(&self) -> Shape<SlotEntries<'_, Self>> {
        match self.get("slots") {
            None | Some(Value::Null) => Shape::Absent,
            Some(Value::Object(map)) => Shape::Present(
                map.iter()
                    .map(|(name, members)| (name.as_str(), array_shape(Some(members))))
                    .collect(),
            ),
            Some(_) => Shape::Malformed,
        }
    }
}
