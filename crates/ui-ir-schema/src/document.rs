//! Schema documents: type definitions supplied from JSON or TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::registry::SchemaRegistry;
use crate::type_def::TypeDefinition;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid JSON schema document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML schema document: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

/// A parent/child pair that may not nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestingRule {
    pub parent: String,
    pub child: String,
}

/// A serialisable set of type definitions plus forbidden nestings.
///
/// ```json
/// {
///   "types": [{ "name": "Card", "canHaveChildren": true, "slots": ["header"] }],
///   "forbidNesting": [{ "parent": "Card", "child": "Card" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
    #[serde(default)]
    pub forbid_nesting: Vec<NestingRule>,
}

impl SchemaDocument {
    pub fn from_json_str(src: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_toml_str(src: &str) -> SchemaResult<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Reads a document from disk; `.toml` files are TOML, anything else JSON.
    pub fn from_path(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str(&src)
        } else {
            Self::from_json_str(&src)
        }
    }
}

impl SchemaRegistry {
    /// Registers every type and nesting rule of `doc`.
    pub fn extend_from(&mut self, doc: SchemaDocument) {
        debug!(
            types = doc.types.len(),
            rules = doc.forbid_nesting.len(),
            "loading schema document"
        );
        for def in doc.types {
            self.register_type(def);
        }
        for rule in doc.forbid_nesting {
            self.forbid_nesting(rule.parent, rule.child);
        }
    }

    pub fn from_document(doc: SchemaDocument) -> Self {
        let mut reg = Self::new();
        reg.extend_from(doc);
        reg
    }

    pub fn from_json_str(src: &str) -> SchemaResult<Self> {
        SchemaDocument::from_json_str(src).map(Self::from_document)
    }

    pub fn from_toml_str(src: &str) -> SchemaResult<Self> {
        SchemaDocument::from_toml_str(src).map(Self::from_document)
    }

    /// Snapshot of the registry as a document.
    pub fn to_document(&self) -> SchemaDocument {
        SchemaDocument {
            types: self.definitions().cloned().collect(),
            forbid_nesting: self
                .forbidden_pairs()
                .map(|(parent, child)| NestingRule {
                    parent: parent.to_string(),
                    child: child.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_json_document() {
        let reg = SchemaRegistry::from_json_str(
            r#"{
                "types": [
                    {"name": "Card", "canHaveChildren": true, "slots": ["header"], "maxChildren": 4},
                    {"name": "Badge"}
                ],
                "forbidNesting": [{"parent": "Card", "child": "Card"}]
            }"#,
        )
        .unwrap();
        assert_eq!(reg.types(), vec!["Card", "Badge"]);
        assert_eq!(reg.max_children("Card"), Some(4));
        assert!(reg.can_contain("Card", "Badge"));
        assert!(!reg.can_contain("Card", "Card"));
    }

    #[test]
    fn loads_toml_document() {
        let reg = SchemaRegistry::from_toml_str(
            r#"
            [[types]]
            name = "Grid"
            layout = "block"
            canHaveChildren = true

            [types.defaults]
            columns = 2

            [types.propertyValues]
            density = ["compact", "comfortable"]

            [[types]]
            name = "Cell"
            "#,
        )
        .unwrap();
        let grid = reg.get_type("Grid").unwrap();
        assert_eq!(grid.defaults["columns"], json!(2));
        assert_eq!(grid.recognises("density", &json!("compact")), Some(true));
        assert_eq!(reg.leaves(), vec!["Cell"]);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            SchemaRegistry::from_json_str(r#"{"types": [{"slots": []}]}"#),
            Err(SchemaError::Json(_))
        ));
        assert!(matches!(
            SchemaRegistry::from_toml_str("types = 3"),
            Err(SchemaError::Toml(_))
        ));
    }

    #[test]
    fn document_snapshot_rebuilds_registry() {
        let reg = SchemaRegistry::with_defaults();
        let rebuilt = SchemaRegistry::from_document(reg.to_document());
        assert_eq!(rebuilt.types(), reg.types());
        assert!(!rebuilt.can_contain("Button", "HStack"));
    }
}
