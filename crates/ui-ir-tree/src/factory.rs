//! Node creation seeded from type defaults.

use tracing::debug;
use ui_ir_schema::SchemaRegistry;

use crate::id::IdGenerator;
use crate::node::{Node, Properties, Slots};

/// Options for [`NodeFactory`].
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// When false, ids are `{prefix or type}-{n}` from a per-factory counter.
    pub auto_generate_ids: bool,
    pub id_prefix: Option<String>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            auto_generate_ids: true,
            id_prefix: None,
        }
    }
}

/// Creates nodes with per-type defaults from a registry.
///
/// Container-capable types start with an empty default slot; types with
/// allowed slot names additionally start with an empty slot map. Unknown types
/// get neither and no default properties.
#[derive(Debug)]
pub struct NodeFactory<'r> {
    registry: &'r SchemaRegistry,
    ids: IdGenerator,
}

impl<'r> NodeFactory<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self::with_options(registry, CreateOptions::default())
    }

    pub fn with_options(registry: &'r SchemaRegistry, options: CreateOptions) -> Self {
        let ids = if options.auto_generate_ids {
            IdGenerator::Random {
                prefix: options.id_prefix,
            }
        } else {
            IdGenerator::Sequential {
                prefix: options.id_prefix,
                next: 1,
            }
        };
        Self { registry, ids }
    }

    /// Creates a node with a fresh id.
    pub fn create(&mut self, type_name: &str, properties: Properties) -> Node {
        let id = self.ids.next_id(type_name);
        self.create_with_id(id, type_name, properties)
    }

    /// Creates a node with a caller-supplied id.
    pub fn create_with_id(
        &self,
        id: impl Into<String>,
        type_name: &str,
        properties: Properties,
    ) -> Node {
        let mut node = Node::new(id, type_name);
        if let Some(def) = self.registry.get_type(type_name) {
            node.properties = def.defaults.clone();
            if def.can_have_children {
                node.children = Some(Vec::new());
                if def.has_slots() {
                    node.slots = Some(Slots::new());
                }
            }
        } else {
            debug!(type_name, "creating node of unregistered type");
        }
        node.properties.extend(properties);
        node
    }
}

/// Creates a single node with a random id.
pub fn create_node(registry: &SchemaRegistry, type_name: &str, properties: Properties) -> Node {
    NodeFactory::new(registry).create(type_name, properties)
}
