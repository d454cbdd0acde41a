use std::path::PathBuf;

use serde_json::{json, Value};
use ui_ir::cli::{
    list_ids, load_registry, move_in_document, new_node, validate_document, CliError, MoveArgs,
};

const DOC: &str = r#"{
    "id": "root",
    "type": "VStack",
    "children": [
        {"id": "title", "type": "Text", "properties": {"content": "Hi"}},
        {"id": "row", "type": "HStack", "children": [
            {"id": "ok", "type": "Button", "slots": {"content": [{"id": "ok-label", "type": "Text"}]}}
        ]}
    ]
}"#;

fn move_args(id: &str, parent: &str, transactional: bool) -> MoveArgs {
    MoveArgs {
        id: id.into(),
        new_parent_id: parent.into(),
        slot: None,
        index: None,
        transactional,
    }
}

#[test]
fn validate_well_formed_document() {
    let registry = load_registry(None).unwrap();
    let report = validate_document(&registry, DOC).unwrap();
    assert!(report.is_valid, "{:?}", report.errors);
}

#[test]
fn validate_rejects_bad_json() {
    let registry = load_registry(None).unwrap();
    assert!(matches!(
        validate_document(&registry, "{not json"),
        Err(CliError::Json(_))
    ));
}

#[test]
fn ids_in_pre_order() {
    let (ids, report) = list_ids(DOC).unwrap();
    assert_eq!(ids, vec!["root", "title", "row", "ok", "ok-label"]);
    assert!(report.is_valid);
}

#[test]
fn ids_reports_duplicates() {
    let doc = r#"{"id": "a", "type": "VStack", "children": [{"id": "a", "type": "Text"}]}"#;
    let (_, report) = list_ids(doc).unwrap();
    assert!(!report.is_valid);
    assert!(report.duplicates.contains("a"));
}

#[test]
fn move_then_print() {
    let outcome = move_in_document(DOC, &move_args("title", "row", false)).unwrap();
    assert!(outcome.moved);
    let tree: Value = serde_json::from_str(&outcome.tree).unwrap();
    assert_eq!(tree["children"].as_array().unwrap().len(), 1);
    assert_eq!(tree["children"][0]["children"][1]["id"], json!("title"));
}

#[test]
fn failed_moves_by_mode() {
    let faithful = move_in_document(DOC, &move_args("row", "ok", false)).unwrap();
    assert!(!faithful.moved);
    assert!(!faithful.tree.contains("\"row\""));

    let transactional =
        move_in_document(DOC, &move_args("row", "ok", true)).unwrap();
    assert!(!transactional.moved);
    let before: Value = serde_json::from_str(DOC).unwrap();
    let after: Value = serde_json::from_str(&transactional.tree).unwrap();
    assert_eq!(before, after);
}

#[test]
fn new_node_with_schema_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.toml");
    std::fs::write(
        &path,
        r#"
[[types]]
name = "Card"
canHaveChildren = true
slots = ["header"]

[types.defaults]
elevation = 2
"#,
    )
    .unwrap();

    let registry = load_registry(Some(&path)).unwrap();
    let node: Value = serde_json::from_str(&new_node(&registry, "Card").unwrap()).unwrap();
    assert_eq!(node["type"], json!("Card"));
    assert_eq!(node["properties"]["elevation"], json!(2));
    assert_eq!(node["children"], json!([]));
    assert_eq!(node["slots"], json!({}));
    assert!(node["id"].as_str().unwrap().starts_with("Card-"));
}

#[test]
fn missing_schema_file_is_an_error() {
    let path = PathBuf::from("/definitely/not/here.json");
    assert!(matches!(load_registry(Some(&path)), Err(CliError::Schema(_))));
}
