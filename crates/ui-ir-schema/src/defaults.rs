//! The built-in component schema.

use serde_json::json;

use crate::registry::SchemaRegistry;
use crate::type_def::{LayoutHint, TypeDefinition};

pub const HSTACK: &str = "HStack";
pub const VSTACK: &str = "VStack";
pub const BUTTON: &str = "Button";
pub const TEXT: &str = "Text";
pub const ICON: &str = "Icon";

pub const ALIGN_VALUES: [&str; 4] = ["start", "center", "end", "stretch"];
pub const GAP_TOKENS: [&str; 6] = ["none", "xs", "sm", "md", "lg", "xl"];
pub const BUTTON_VARIANTS: [&str; 4] = ["primary", "secondary", "ghost", "danger"];

fn stack(name: &str, layout: LayoutHint) -> TypeDefinition {
    TypeDefinition::container(name)
        .layout(layout)
        .default_prop("gap", json!("md"))
        .default_prop("align", json!("start"))
        .recognise("gap", GAP_TOKENS)
        .recognise("align", ALIGN_VALUES)
}

/// Definitions of the default schema, in registration order.
pub fn default_types() -> Vec<TypeDefinition> {
    vec![
        stack(HSTACK, LayoutHint::Horizontal),
        stack(VSTACK, LayoutHint::Vertical),
        TypeDefinition::container(BUTTON)
            .layout(LayoutHint::Inline)
            .slot("icon")
            .slot("content")
            .max_children(1)
            .interactive(true)
            .default_prop("variant", json!("primary"))
            .recognise("variant", BUTTON_VARIANTS),
        TypeDefinition::leaf(TEXT)
            .layout(LayoutHint::Inline)
            .default_prop("content", json!("")),
        TypeDefinition::leaf(ICON)
            .layout(LayoutHint::Inline)
            .default_prop("name", json!("")),
    ]
}

impl SchemaRegistry {
    /// A registry seeded with the default component schema.
    ///
    /// Interactive buttons may not hold layout containers.
    pub fn with_defaults() -> Self {
        let mut reg = SchemaRegistry::new();
        for def in default_types() {
            reg.register_type(def);
        }
        reg.forbid_nesting(BUTTON, HSTACK);
        reg.forbid_nesting(BUTTON, VSTACK);
        reg
    }
}
