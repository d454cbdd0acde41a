//! `ui-ir-validator`: structural checks for UI IR trees.
//!
//! Validation never stops at the first problem. The whole tree is walked and
//! every finding is collected into a [`ValidationReport`]; only errors make a
//! tree invalid, warnings are advisory. Trees can be checked in their typed
//! form ([`validate`]) or as raw JSON ([`validate_value`]), the latter also
//! catching missing or mistyped `id`/`type` fields that the typed form cannot
//! represent.
//!
//! # Example
//!
//! ```
//! use ui_ir_schema::SchemaRegistry;
//! use ui_ir_tree::Node;
//! use ui_ir_validator::{validate, ErrorKind};
//!
//! let registry = SchemaRegistry::with_defaults();
//! let root = Node::new("b", "Button")
//!     .with_slot_child("content", Node::new("row", "HStack"));
//!
//! let report = validate(&registry, &root);
//! assert!(!report.is_valid);
//! assert_eq!(report.errors[0].kind, ErrorKind::InvalidNesting);
//! assert_eq!(report.errors[0].path, "/slots/content/0");
//! ```

pub mod types;
pub mod validator;
pub mod view;

pub use types::{
    ErrorKind, Issue, ValidationError, ValidationReport, ValidationWarning, ValidatorOptions,
    WarningKind,
};
pub use validator::{validate, validate_value, Validator};
pub use view::{Field, Shape, SlotEntries, TreeView};
