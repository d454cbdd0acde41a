//! Structural paths from the root to a node.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// One step down the tree: an index into the default slot or into a named
/// slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "container", rename_all = "lowercase")]
pub enum PathSegment {
    Child { index: usize },
    Slot { name: String, index: usize },
}

impl PathSegment {
    pub fn index(&self) -> usize {
        match self {
            PathSegment::Child { index } | PathSegment::Slot { index, .. } => *index,
        }
    }

    pub fn slot_name(&self) -> Option<&str> {
        match self {
            PathSegment::Child { .. } => None,
            PathSegment::Slot { name, .. } => Some(name),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Child { index } => write!(f, "/children/{index}"),
            PathSegment::Slot { name, index } => {
                f.write_str("/slots/")?;
                // slot names are pointer components: `~` and `/` need escapes
                for ch in name.chars() {
                    match ch {
                        '~' => f.write_str("~0")?,
                        '/' => f.write_str("~1")?,
                        _ => f.write_char(ch)?,
                    }
                }
                write!(f, "/{index}")
            }
        }
    }
}

/// Formats a path as a JSON Pointer into the node's wire shape.
///
/// ```
/// use ui_ir_tree::{path_to_pointer, PathSegment};
///
/// let path = [
///     PathSegment::Child { index: 0 },
///     PathSegment::Slot { name: "icon".into(), index: 1 },
/// ];
/// assert_eq!(path_to_pointer(&path), "/children/0/slots/icon/1");
/// assert_eq!(path_to_pointer(&[]), "");
/// ```
pub fn path_to_pointer(path: &[PathSegment]) -> String {
    path.iter().map(ToString::to_string).collect()
}

/// Follows `path` from `root`. An empty path yields the root.
pub fn get_by_path<'a>(root: &'a Node, path: &[PathSegment]) -> Option<&'a Node> {
    path.iter().try_fold(root, |node, segment| match segment {
        PathSegment::Child { index } => node.children().get(*index),
        PathSegment::Slot { name, index } => node.slot(name)?.get(*index),
    })
}

pub fn get_by_path_mut<'a>(root: &'a mut Node, path: &[PathSegment]) -> Option<&'a mut Node> {
    path.iter().try_fold(root, |node, segment| match segment {
        PathSegment::Child { index } => node.children.as_mut()?.get_mut(*index),
        PathSegment::Slot { name, index } => node.slots.as_mut()?.get_mut(name)?.get_mut(*index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_slot_names() {
        let seg = PathSegment::Slot {
            name: "a/b~c".into(),
            index: 2,
        };
        assert_eq!(seg.to_string(), "/slots/a~1b~0c/2");
    }

    #[test]
    fn follows_paths() {
        let root = Node::new("r", "VStack").with_child(
            Node::new("b", "Button").with_slot_child("icon", Node::new("i", "Icon")),
        );
        let path = vec![
            PathSegment::Child { index: 0 },
            PathSegment::Slot {
                name: "icon".into(),
                index: 0,
            },
        ];
        assert_eq!(get_by_path(&root, &path).map(|n| n.id.as_str()), Some("i"));
        assert_eq!(get_by_path(&root, &[]).map(|n| n.id.as_str()), Some("r"));
        assert!(get_by_path(&root, &[PathSegment::Child { index: 3 }]).is_none());
    }

    #[test]
    fn segment_accessors() {
        let child = PathSegment::Child { index: 4 };
        let slot = PathSegment::Slot {
            name: "icon".into(),
            index: 1,
        };
        assert_eq!(child.index(), 4);
        assert_eq!(child.slot_name(), None);
        assert_eq!(slot.index(), 1);
        assert_eq!(slot.slot_name(), Some("icon"));
    }

    #[test]
    fn edits_through_mutable_paths() {
        let mut root = Node::new("r", "VStack")
            .with_child(Node::new("t", "Text"))
            .with_child(Node::new("b", "Button").with_slot_child("icon", Node::new("i", "Icon")));
        let path = [
            PathSegment::Child { index: 1 },
            PathSegment::Slot {
                name: "icon".into(),
                index: 0,
            },
        ];
        get_by_path_mut(&mut root, &path)
            .unwrap()
            .properties
            .insert("name".into(), serde_json::json!("close"));
        assert_eq!(
            get_by_path(&root, &path).unwrap().properties["name"],
            serde_json::json!("close")
        );
        assert!(get_by_path_mut(&mut root, &[PathSegment::Slot {
            name: "missing".into(),
            index: 0,
        }])
        .is_none());
        assert_eq!(get_by_path_mut(&mut root, &[]).map(|n| n.id.clone()), Some("r".to_string()));
    }

    #[test]
    fn serializes_with_container_tag() {
        let value = serde_json::to_value(PathSegment::Slot {
            name: "content".into(),
            index: 0,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"container": "slot", "name": "content", "index": 0})
        );
    }
}
