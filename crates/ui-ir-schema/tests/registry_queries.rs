use serde_json::json;
use ui_ir_schema::defaults::{BUTTON, HSTACK, ICON, TEXT, VSTACK};
use ui_ir_schema::{SchemaRegistry, TypeDefinition};

#[test]
fn default_containment_matrix() {
    let reg = SchemaRegistry::with_defaults();
    let containers = [HSTACK, VSTACK];
    for parent in containers {
        for child in [HSTACK, VSTACK, BUTTON, TEXT, ICON] {
            assert!(
                reg.can_contain(parent, child),
                "{parent} should contain {child}"
            );
        }
    }
    for leaf in [TEXT, ICON] {
        for child in reg.types() {
            assert!(!reg.can_contain(leaf, child), "{leaf} must not contain {child}");
        }
    }
    assert!(!reg.can_contain(BUTTON, HSTACK));
    assert!(!reg.can_contain(BUTTON, VSTACK));
}

#[test]
fn main_slot_looseness_is_preserved() {
    let mut reg = SchemaRegistry::with_defaults();
    reg.register_type(TypeDefinition::container("Layout").slot("main").slot("aside"));
    assert!(reg.is_slot_allowed("Layout", "anyUnlistedName"));
    assert!(reg.is_slot_allowed("Layout", "aside"));
    assert!(!reg.is_slot_allowed(BUTTON, "anyUnlistedName"));
}

#[test]
fn runtime_registration_extends_defaults() {
    let mut reg = SchemaRegistry::with_defaults();
    reg.register_type(
        TypeDefinition::container("List")
            .max_children(10)
            .default_prop("dense", json!(false)),
    );
    assert!(reg.has_type("List"));
    assert!(reg.can_contain("List", BUTTON));
    assert!(reg.can_contain(HSTACK, "List"));
    assert_eq!(reg.max_children("List"), Some(10));
    assert_eq!(reg.get_type("List").unwrap().defaults["dense"], json!(false));
    assert!(reg.containers().contains(&"List"));
}

#[test]
fn ceiling_is_not_compared_with_current_children() {
    let mut reg = SchemaRegistry::new();
    reg.register_type(TypeDefinition::container("Single").max_children(1));
    reg.register_type(TypeDefinition::leaf("Dot"));
    assert!(reg.can_contain("Single", "Dot"));
}
