//! `ui-ir`: one import for the whole UI IR engine.
//!
//! Re-exports the schema registry, the tree model with its mutation engine,
//! and the validator, and hosts the logic behind the `ui-ir` binary.

pub mod cli;

pub use ui_ir_schema as schema;
pub use ui_ir_tree as tree;
pub use ui_ir_validator as validator;

pub use ui_ir_schema::{LayoutHint, SchemaDocument, SchemaError, SchemaRegistry, TypeDefinition};
pub use ui_ir_tree::{
    add_child, add_to_slot, create_node, find_by_id, find_parent, get_all_ids, get_depth,
    get_path, move_node, move_node_with, remove, update_properties, validate_unique_ids,
    InsertPosition, MoveMode, Node, NodeFactory, PathSegment, Properties, TreeError,
};
pub use ui_ir_validator::{validate, validate_value, ValidationReport, Validator};
