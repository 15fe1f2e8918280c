//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kvsync_core::DEFAULT_ID_ATTRIBUTE;

#[derive(Parser, Debug)]
#[command(name = "kvsync")]
#[command(about = "Inspect and edit kvsync stores")]
#[command(version)]
pub struct Args {
    /// SQLite database file
    #[arg(long, default_value = "kvsync.db")]
    pub db: PathBuf,

    /// Use an in-memory substrate instead of --db (discarded on exit)
    #[arg(long)]
    pub memory: bool,

    /// Store name (namespace of the index key and entry keys)
    #[arg(short, long)]
    pub store: String,

    /// Refuse writes once the substrate holds this many entries
    #[arg(long)]
    pub max_entries: Option<usize>,

    /// Refuse writes that would grow keys plus values past this many bytes
    #[arg(long)]
    pub max_bytes: Option<usize>,

    /// Attribute holding each record's identifier
    #[arg(long, default_value = DEFAULT_ID_ATTRIBUTE)]
    pub id_attribute: String,

    /// Log level (debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every record in index order
    List,
    /// Print one record
    Get { id: String },
    /// Store a new record given as a JSON object
    Create { json: String },
    /// Overwrite (or insert) a record given as a JSON object
    Update { json: String },
    /// Remove one record
    Delete { id: String },
    /// Remove the store's index and all of its entries
    Clear,
    /// Print every key in the substrate, across all stores
    Keys,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["kvsync", "--store", "Todos", "list"]).unwrap();

        assert_eq!(args.db, PathBuf::from("kvsync.db"));
        assert!(!args.memory);
        assert_eq!(args.id_attribute, "id");
        assert_eq!(args.command, Command::List);
    }

    #[test]
    fn test_parse_subcommand_argument() {
        let args = Args::try_parse_from([
            "kvsync",
            "--memory",
            "-s",
            "Todos",
            "create",
            r#"{"title":"a"}"#,
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Command::Create {
                json: r#"{"title":"a"}"#.to_string()
            }
        );
    }

    #[test]
    fn test_store_is_required() {
        assert!(Args::try_parse_from(["kvsync", "list"]).is_err());
    }
}
