//! The schema registry: which component types exist and how they nest.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::type_def::TypeDefinition;

/// Slot name that, when allowed by a type, makes every slot name legal.
pub const MAIN_SLOT: &str = "main";

/// Registry of component type definitions.
///
/// Types are kept in registration order. Forbidden parent/child pairs are
/// data, so new component kinds never require touching the queries below.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: IndexMap<String, TypeDefinition>,
    /// Forbidden child types keyed by parent type.
    forbidden: IndexMap<String, IndexSet<String>>,
}

impl SchemaRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type, replacing any previous definition with the same name.
    pub fn register_type(&mut self, def: TypeDefinition) {
        if self.types.contains_key(&def.name) {
            warn!(type_name = %def.name, "replacing type definition");
        } else {
            debug!(type_name = %def.name, "registering type definition");
        }
        self.types.insert(def.name.clone(), def);
    }

    /// Forbids `child` from being nested directly inside `parent`.
    pub fn forbid_nesting(&mut self, parent: impl Into<String>, child: impl Into<String>) {
        self.forbidden
            .entry(parent.into())
            .or_default()
            .insert(child.into());
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn can_have_children(&self, name: &str) -> bool {
        self.types.get(name).is_some_and(|def| def.can_have_children)
    }

    /// Allowed slot names in declaration order; empty for unknown types.
    pub fn allowed_slots(&self, name: &str) -> &[String] {
        self.types.get(name).map(|def| def.slots.as_slice()).unwrap_or(&[])
    }

    /// True iff `slot` is allowed for `name`, or `"main"` is.
    ///
    /// The `"main"` rule makes such a type accept arbitrary slot names.
    pub fn is_slot_allowed(&self, name: &str, slot: &str) -> bool {
        let allowed = self.allowed_slots(name);
        allowed.iter().any(|s| s == slot || s == MAIN_SLOT)
    }

    /// Child ceiling; `None` when unbounded or the type is unknown.
    pub fn max_children(&self, name: &str) -> Option<usize> {
        self.types.get(name).and_then(|def| def.max_children)
    }

    /// Whether a `child` node may sit directly under a `parent` node.
    ///
    /// Does not look at how many children the parent currently holds.
    pub fn can_contain(&self, parent: &str, child: &str) -> bool {
        let Some(parent_def) = self.types.get(parent) else {
            return false;
        };
        if !self.types.contains_key(child) || !parent_def.can_have_children {
            return false;
        }
        if parent_def.max_children == Some(0) {
            return false;
        }
        !self.is_forbidden(parent, child)
    }

    pub fn is_forbidden(&self, parent: &str, child: &str) -> bool {
        self.forbidden
            .get(parent)
            .is_some_and(|children| children.contains(child))
    }

    /// Forbidden pairs, grouped by parent in first-forbidden order.
    pub fn forbidden_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forbidden.iter().flat_map(|(parent, children)| {
            children
                .iter()
                .map(move |child| (parent.as_str(), child.as_str()))
        })
    }

    /// All registered type names in registration order.
    pub fn types(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// Types that can contain children.
    pub fn containers(&self) -> Vec<&str> {
        self.types
            .values()
            .filter(|def| def.can_have_children)
            .map(|def| def.name.as_str())
            .collect()
    }

    /// Types that cannot contain children.
    pub fn leaves(&self) -> Vec<&str> {
        self.types
            .values()
            .filter(|def| !def.can_have_children)
            .map(|def| def.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
