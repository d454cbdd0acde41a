//! The validation walk.

use serde_json::Value;
use tracing::debug;
use ui_ir_schema::{SchemaRegistry, TypeDefinition};
use ui_ir_tree::{path_to_pointer, Node, PathSegment};

use crate::types::{
    ErrorKind, Issue, ValidationReport, ValidatorOptions, WarningKind,
};
use crate::view::{Field, Shape, TreeView};

const ACCESSIBLE_NAME_KEYS: [&str; 2] = ["label", "ariaLabel"];
const CONTENT_SLOT: &str = "content";

/// Validates trees against a registry.
///
/// The walk is pre-order and never stops early: every node, child, and slot
/// member is visited even after errors were recorded on its ancestors.
#[derive(Debug, Clone)]
pub struct Validator<'r> {
    registry: &'r SchemaRegistry,
    options: ValidatorOptions,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            options: ValidatorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn validate<T: TreeView>(&self, root: &T) -> ValidationReport {
        let mut walk = Walk {
            registry: self.registry,
            options: &self.options,
            path: Vec::new(),
            report: ValidationReport::default(),
        };
        walk.visit(root, 0);
        let mut report = walk.report;
        report.is_valid = report.errors.is_empty();
        debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validated tree"
        );
        report
    }
}

/// Validates a typed tree with default options.
pub fn validate(registry: &SchemaRegistry, root: &Node) -> ValidationReport {
    Validator::new(registry).validate(root)
}

/// Validates a tree in its raw wire shape with default options.
pub fn validate_value(registry: &SchemaRegistry, root: &Value) -> ValidationReport {
    Validator::new(registry).validate(root)
}

struct Walk<'v> {
    registry: &'v SchemaRegistry,
    options: &'v ValidatorOptions,
    path: Vec<PathSegment>,
    report: ValidationReport,
}

impl Walk<'_> {
    fn error(&mut self, kind: ErrorKind, node_id: Option<&str>, message: String) {
        self.report.errors.push(Issue {
            kind,
            node_id: node_id.map(str::to_string),
            path: path_to_pointer(&self.path),
            message,
        });
    }

    fn warn(&mut self, kind: WarningKind, node_id: Option<&str>, message: String) {
        self.report.warnings.push(Issue {
            kind,
            node_id: node_id.map(str::to_string),
            path: path_to_pointer(&self.path),
            message,
        });
    }

    fn required_field(&mut self, field: Field<'_>, name: &str, node_id: Option<&str>) {
        match field {
            Field::Missing => self.error(
                ErrorKind::MissingRequiredField,
                node_id,
                format!("node is missing required field `{name}`"),
            ),
            Field::NotString => self.error(
                ErrorKind::MissingRequiredField,
                node_id,
                format!("field `{name}` must be a string"),
            ),
            Field::Str(_) => {}
        }
    }

    fn visit<T: TreeView>(&mut self, node: &T, depth: usize) {
        let node_id = node.id_field().as_str();
        self.required_field(node.id_field(), "id", node_id);
        self.required_field(node.type_field(), "type", node_id);

        let registry = self.registry;
        let def = match node.type_field().as_str() {
            Some(type_name) => {
                let def = registry.get_type(type_name);
                if def.is_none() {
                    self.error(
                        ErrorKind::InvalidType,
                        node_id,
                        format!("unknown component type `{type_name}`"),
                    );
                }
                def
            }
            None => None,
        };

        let children = node.children_shape();
        let slots = node.slots_shape();

        if matches!(children, Shape::Malformed) {
            self.error(
                ErrorKind::InvalidNesting,
                node_id,
                "`children` must be an array of nodes".to_string(),
            );
        }
        if matches!(slots, Shape::Malformed) {
            self.error(
                ErrorKind::InvalidSlot,
                node_id,
                "`slots` must map slot names to arrays of nodes".to_string(),
            );
        }

        if let Some(def) = def {
            if let Shape::Present(children) = &children {
                self.check_child_count(def, node_id, children.len());
            }
            if self.options.warnings {
                self.soft_checks(def, node, node_id, &children, &slots);
            }
        }
        if self.options.warnings && depth == self.options.depth_warning + 1 {
            self.warn(
                WarningKind::PerformanceConcern,
                node_id,
                format!(
                    "tree is nested deeper than {} levels",
                    self.options.depth_warning
                ),
            );
        }

        let parent = def.map(|d| d.name.as_str());
        if let Shape::Present(children) = children {
            for (index, child) in children.iter().enumerate() {
                self.path.push(PathSegment::Child { index });
                self.check_containment(parent, child);
                self.visit(child, depth + 1);
                self.path.pop();
            }
        }

        let Shape::Present(slots) = slots else {
            return;
        };
        for (name, members) in slots {
            if let Some(parent) = parent {
                if !registry.is_slot_allowed(parent, name) {
                    self.error(
                        ErrorKind::InvalidSlot,
                        node_id,
                        format!("slot `{name}` is not allowed on `{parent}`"),
                    );
                }
            }
            let members = match members {
                Shape::Present(members) => members,
                Shape::Absent => continue,
                Shape::Malformed => {
                    self.error(
                        ErrorKind::InvalidSlot,
                        node_id,
                        format!("slot `{name}` must be an array of nodes"),
                    );
                    continue;
                }
            };
            for (index, member) in members.iter().enumerate() {
                self.path.push(PathSegment::Slot {
                    name: name.to_string(),
                    index,
                });
                self.check_containment(parent, member);
                self.visit(member, depth + 1);
                self.path.pop();
            }
        }
    }

    fn check_child_count(&mut self, def: &TypeDefinition, node_id: Option<&str>, count: usize) {
        if !def.can_have_children {
            self.error(
                ErrorKind::InvalidNesting,
                node_id,
                format!("`{}` cannot have children", def.name),
            );
        } else if let Some(max) = def.max_children {
            if count > max {
                self.error(
                    ErrorKind::InvalidNesting,
                    node_id,
                    format!(
                        "`{}` allows at most {max} children, found {count}",
                        def.name
                    ),
                );
            }
        }
    }

    /// Records an error on `child` when its parent type may not contain it.
    /// Skipped when the parent's type is unknown or the child has no type.
    fn check_containment<T: TreeView>(&mut self, parent: Option<&str>, child: &T) {
        let (Some(parent), Some(child_type)) = (parent, child.type_field().as_str()) else {
            return;
        };
        if !self.registry.can_contain(parent, child_type) {
            self.error(
                ErrorKind::InvalidNesting,
                child.id_field().as_str(),
                format!("`{child_type}` cannot be placed inside `{parent}`"),
            );
        }
    }

    fn soft_checks<T: TreeView>(
        &mut self,
        def: &TypeDefinition,
        node: &T,
        node_id: Option<&str>,
        children: &Shape<&[T]>,
        slots: &Shape<Vec<(&str, Shape<&[T]>)>>,
    ) {
        for key in def.property_values.keys() {
            let Some(value) = node.property(key) else {
                continue;
            };
            if def.recognises(key, value) == Some(false) {
                self.warn(
                    WarningKind::DeprecatedValue,
                    node_id,
                    format!(
                        "`{key}` = {value} is not a recognised value for `{}`",
                        def.name
                    ),
                );
            }
        }

        let child_count = match children {
            Shape::Present(children) => children.len(),
            _ => 0,
        };
        if child_count > self.options.child_count_warning {
            self.warn(
                WarningKind::PerformanceConcern,
                node_id,
                format!(
                    "`{}` holds {child_count} children (more than {})",
                    def.name, self.options.child_count_warning
                ),
            );
        }

        if def.interactive && !has_accessible_name(node, child_count, slots) {
            self.warn(
                WarningKind::AccessibilityIssue,
                node_id,
                format!(
                    "interactive `{}` has no label, content, or children",
                    def.name
                ),
            );
        }
    }
}

fn has_accessible_name<T: TreeView>(
    node: &T,
    child_count: usize,
    slots: &Shape<Vec<(&str, Shape<&[T]>)>>,
) -> bool {
    let labelled = ACCESSIBLE_NAME_KEYS.iter().any(|key| {
        node.property(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    });
    let has_content = match slots {
        Shape::Present(slots) => slots.iter().any(|(name, members)| {
            *name == CONTENT_SLOT && matches!(members, Shape::Present(m) if !m.is_empty())
        }),
        _ => false,
    };
    labelled || has_content || child_count > 0
}
