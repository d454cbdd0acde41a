//! `ui-ir`: validate and edit UI IR tree documents.
//!
//! Usage:
//!   ui-ir validate [--schema FILE]
//!   ui-ir ids
//!   ui-ir move <id> <new-parent-id> [--slot NAME] [--index N] [--transactional]
//!   ui-ir new <type> [--schema FILE]
//!
//! Tree documents are read from stdin. Log output goes to stderr and is
//! filtered by `UI_IR_LOG` (default `warn`).

use std::io::{self, Read, Write};
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;
use clap::Parser;
use ui_ir::cli::{
    list_ids, load_registry, move_in_document, new_node, validate_document, Cli, CliResult,
    Command,
};

fn init_logging() {
    let filter = EnvFilter::try_from_env("UI_IR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_stdin() -> CliResult<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn print(text: &str) -> CliResult<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn run(command: Command) -> CliResult<bool> {
    match command {
        Command::Validate { schema } => {
            let registry = load_registry(schema.as_ref())?;
            let report = validate_document(&registry, read_stdin()?.trim())?;
            print(&serde_json::to_string_pretty(&report)?)?;
            Ok(report.is_valid)
        }
        Command::Ids => {
            let (ids, report) = list_ids(read_stdin()?.trim())?;
            print(&ids.join("\n"))?;
            for id in &report.duplicates {
                eprintln!("duplicate id: {id}");
            }
            Ok(report.is_valid)
        }
        Command::Move(args) => {
            let outcome = move_in_document(read_stdin()?.trim(), &args)?;
            if !outcome.moved {
                warn!(id = %args.id, parent = %args.new_parent_id, "move failed");
            }
            print(&outcome.tree)?;
            Ok(outcome.moved)
        }
        Command::New { type_name, schema } => {
            let registry = load_registry(schema.as_ref())?;
            print(&new_node(&registry, &type_name)?)?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
