//! `ui-ir-schema`: the component type registry for the UI IR tree.
//!
//! A [`SchemaRegistry`] holds one [`TypeDefinition`] per component type and
//! answers structural questions about it: may it hold children, how many,
//! under which slot names, and which child types it may contain.
//!
//! # Example
//!
//! ```
//! use ui_ir_schema::{SchemaRegistry, TypeDefinition};
//!
//! let mut reg = SchemaRegistry::with_defaults();
//! reg.register_type(TypeDefinition::container("Card").slot("header"));
//!
//! assert!(reg.can_contain("Card", "Button"));
//! assert!(!reg.can_contain("Button", "HStack"));
//! assert!(reg.is_slot_allowed("Card", "header"));
//! ```

pub mod defaults;
pub mod document;
pub mod registry;
pub mod type_def;

pub use document::{NestingRule, SchemaDocument, SchemaError, SchemaResult};
pub use registry::{SchemaRegistry, MAIN_SLOT};
pub use type_def::{LayoutHint, TypeDefinition};
