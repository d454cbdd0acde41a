//! Type definitions: the schema metadata held for one component type.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Presentational layout hint. Never enforced structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutHint {
    Horizontal,
    Vertical,
    Inline,
    #[default]
    Block,
    Overlay,
}

/// Schema metadata for one component type.
///
/// `max_children == None` means the default slot is unbounded. A type whose
/// `slots` list contains `"main"` accepts any slot name (see
/// [`SchemaRegistry::is_slot_allowed`](crate::SchemaRegistry::is_slot_allowed)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    pub name: String,
    #[serde(default)]
    pub layout: LayoutHint,
    #[serde(default)]
    pub slots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_children: Option<usize>,
    #[serde(default)]
    pub can_have_children: bool,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub defaults: Map<String, Value>,
    /// Interactive types are expected to carry an accessible name.
    #[serde(default)]
    pub interactive: bool,
    /// Recognised values per property key. Values outside the list are
    /// reported as `deprecated-value` warnings by the validator.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub property_values: IndexMap<String, Vec<Value>>,
}

impl TypeDefinition {
    /// A type that may hold children in its default slot.
    pub fn container(name: impl Into<String>) -> Self {
        Self {
            can_have_children: true,
            ..Self::leaf(name)
        }
    }

    /// A type that may not hold children.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: LayoutHint::default(),
            slots: Vec::new(),
            max_children: None,
            can_have_children: false,
            defaults: Map::new(),
            interactive: false,
            property_values: IndexMap::new(),
        }
    }

    pub fn layout(mut self, layout: LayoutHint) -> Self {
        self.layout = layout;
        self
    }

    pub fn slot(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.slots.contains(&name) {
            self.slots.push(name);
        }
        self
    }

    pub fn max_children(mut self, max: usize) -> Self {
        self.max_children = Some(max);
        self
    }

    pub fn default_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.defaults.insert(key.into(), value);
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Declares the recognised values of a property.
    pub fn recognise<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.property_values
            .insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn has_slots(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Returns `Some(false)` when `value` is outside the recognised set for
    /// `key`, `Some(true)` when inside, `None` when `key` has no enumeration.
    pub fn recognises(&self, key: &str, value: &Value) -> Option<bool> {
        self.property_values.get(key).map(|allowed| allowed.contains(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_sets_fields() {
        let def = TypeDefinition::container("Card")
            .layout(LayoutHint::Vertical)
            .slot("header")
            .slot("header")
            .max_children(3)
            .default_prop("padding", json!("sm"));
        assert_eq!(def.slots, vec!["header".to_string()]);
        assert_eq!(def.max_children, Some(3));
        assert!(def.can_have_children);
        assert_eq!(def.defaults["padding"], json!("sm"));
    }

    #[test]
    fn recognises_enumerated_values() {
        let def = TypeDefinition::container("Row").recognise("align", ["start", "end"]);
        assert_eq!(def.recognises("align", &json!("start")), Some(true));
        assert_eq!(def.recognises("align", &json!("middle")), Some(false));
        assert_eq!(def.recognises("gap", &json!("md")), None);
    }

    #[test]
    fn decodes_camel_case_document_with_defaults() {
        let def: TypeDefinition = serde_json::from_value(json!({
            "name": "Panel",
            "layout": "overlay",
            "canHaveChildren": true,
            "maxChildren": 2
        }))
        .unwrap();
        assert_eq!(def.layout, LayoutHint::Overlay);
        assert_eq!(def.max_children, Some(2));
        assert!(def.slots.is_empty());
        assert!(!def.interactive);
    }
}
