//! `ui-ir-tree`: the UI IR tree model and mutation engine.
//!
//! A tree is a single owned [`Node`]; every operation takes the root by
//! reference and works in place. Searches and edits fail soft (`bool` /
//! `Option`), and no edit consults the schema, so callers may build
//! transiently invalid trees and validate them when convenient.
//!
//! # Example
//!
//! ```
//! use ui_ir_schema::SchemaRegistry;
//! use ui_ir_tree::{add_child, find_parent, move_node, InsertPosition, NodeFactory, Properties};
//!
//! let registry = SchemaRegistry::with_defaults();
//! let mut factory = NodeFactory::new(&registry);
//!
//! let mut root = factory.create("VStack", Properties::new());
//! let row = factory.create("HStack", Properties::new());
//! let label = factory.create("Text", Properties::new());
//! let (row_id, label_id) = (row.id.clone(), label.id.clone());
//!
//! add_child(&mut root, label, None);
//! add_child(&mut root, row, None);
//! assert!(move_node(&mut root, &label_id, &row_id, InsertPosition::append()));
//! assert_eq!(find_parent(&root, &label_id).unwrap().id, row_id);
//! ```

pub mod checked;
pub mod error;
pub mod factory;
pub mod find;
pub mod id;
pub mod mutate;
pub mod node;
pub mod path;

pub use checked::{add_child_checked, add_to_slot_checked};
pub use error::{InsertRejection, TreeError, TreeResult};
pub use factory::{create_node, CreateOptions, NodeFactory};
pub use find::{
    depth, find_by_id, find_by_id_mut, find_parent, get_all_ids, get_depth, get_path,
    validate_unique_ids, UniqueIdReport,
};
pub use id::{generate_id, IdGenerator};
pub use mutate::{
    add_child, add_to_slot, detach, insert_child, insert_into_slot, move_node, move_node_with,
    remove, update_properties, InsertPosition, MoveMode,
};
pub use node::{Node, Properties, Slots};
pub use path::{get_by_path, get_by_path_mut, path_to_pointer, PathSegment};
