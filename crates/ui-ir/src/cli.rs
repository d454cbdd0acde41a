//! Core logic of the `ui-ir` binary.
//!
//! Every command reads a tree document (except `new`) and returns the text to
//! print, so the binary only deals with stdin, stdout, and exit codes.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use ui_ir_schema::{SchemaDocument, SchemaError, SchemaRegistry};
use ui_ir_tree::{
    get_all_ids, move_node_with, validate_unique_ids, InsertPosition, MoveMode, Node, NodeFactory,
    Properties, TreeError, UniqueIdReport,
};
use ui_ir_validator::{validate_value, ValidationReport};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "ui-ir")]
#[command(about = "Validate and edit UI IR tree documents read from stdin")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate a tree and print the report as JSON
    Validate {
        /// Schema file extending the default components (`.toml` or JSON)
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// Print every node id in pre-order
    Ids,
    /// Move a node under a new parent and print the tree
    Move(MoveArgs),
    /// Print a freshly created node
    New {
        /// Component type to create
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Schema file extending the default components (`.toml` or JSON)
        #[arg(long)]
        schema: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct MoveArgs {
    /// Node to move
    pub id: String,
    /// Destination parent
    pub new_parent_id: String,
    /// Named slot of the destination; the default slot when omitted
    #[arg(long)]
    pub slot: Option<String>,
    /// Insertion index; appends when omitted or past the end
    #[arg(long)]
    pub index: Option<usize>,
    /// Leave the tree untouched when the move cannot complete
    #[arg(long)]
    pub transactional: bool,
}

impl MoveArgs {
    fn position(&self) -> InsertPosition {
        InsertPosition {
            slot: self.slot.clone(),
            index: self.index,
        }
    }

    pub fn mode(&self) -> MoveMode {
        if self.transactional {
            MoveMode::Transactional
        } else {
            MoveMode::Faithful
        }
    }
}

/// The default registry, extended by a schema file when one is given.
pub fn load_registry(schema: Option<&PathBuf>) -> CliResult<SchemaRegistry> {
    let mut registry = SchemaRegistry::with_defaults();
    if let Some(path) = schema {
        debug!(path = %path.display(), "loading schema file");
        registry.extend_from(SchemaDocument::from_path(path)?);
    }
    Ok(registry)
}

/// Validates a raw tree document.
pub fn validate_document(registry: &SchemaRegistry, doc_json: &str) -> CliResult<ValidationReport> {
    let doc: Value = serde_json::from_str(doc_json)?;
    Ok(validate_value(registry, &doc))
}

/// Every id in pre-order, plus the duplicate report.
pub fn list_ids(doc_json: &str) -> CliResult<(Vec<String>, UniqueIdReport)> {
    let root = Node::from_json_str(doc_json)?;
    Ok((get_all_ids(&root), validate_unique_ids(&root)))
}

/// Outcome of a move: whether it succeeded and the resulting tree.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub moved: bool,
    pub tree: String,
}

pub fn move_in_document(doc_json: &str, args: &MoveArgs) -> CliResult<MoveOutcome> {
    let mut root = Node::from_json_str(doc_json)?;
    let moved = move_node_with(
        &mut root,
        &args.id,
        &args.new_parent_id,
        args.position(),
        args.mode(),
    );
    Ok(MoveOutcome {
        moved,
        tree: root.to_json_string_pretty()?,
    })
}

/// A freshly created node of `type_name` with type defaults applied.
pub fn new_node(registry: &SchemaRegistry, type_name: &str) -> CliResult<String> {
    let node = NodeFactory::new(registry).create(type_name, Properties::new());
    Ok(node.to_json_string_pretty()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        let argv = std::iter::once("ui-ir").chain(args.iter().copied());
        Cli::try_parse_from(argv).map(|cli| cli.command)
    }

    #[test]
    fn parse_move() {
        let cmd = parse(&[
            "move",
            "a",
            "b",
            "--slot",
            "icon",
            "--index",
            "2",
            "--transactional",
        ]);
        let Ok(Command::Move(args)) = cmd else {
            panic!("expected a move command");
        };
        assert_eq!(args.id, "a");
        assert_eq!(args.new_parent_id, "b");
        assert_eq!(args.position(), InsertPosition::slot("icon").with_index(2));
        assert_eq!(args.mode(), MoveMode::Transactional);
    }

    #[test]
    fn parse_defaults() {
        assert_eq!(parse(&["validate"]).unwrap(), Command::Validate { schema: None });
        assert_eq!(
            parse(&["new", "Text", "--schema", "s.toml"]).unwrap(),
            Command::New {
                type_name: "Text".into(),
                schema: Some(PathBuf::from("s.toml")),
            }
        );
        let Command::Move(args) = parse(&["move", "a", "b"]).unwrap() else {
            panic!("expected move");
        };
        assert_eq!(args.position(), InsertPosition::append());
        assert_eq!(args.mode(), MoveMode::Faithful);
    }

    #[test]
    fn parse_errors() {
        let cases: [&[&str]; 7] = [
            &[],
            &["frobnicate"],
            &["move", "a"],
            &["ids", "extra"],
            &["move", "a", "b", "--index", "x"],
            &["validate", "--schema"],
            &["validate", "--verbose"],
        ];
        for bad in cases {
            assert!(parse(bad).is_err(), "{bad:?}");
        }
    }
}
