//! Resolved CLI configuration

use std::path::PathBuf;

use kvsync_core::StorageQuotas;

use crate::args::Args;

/// Where entries live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Sqlite(PathBuf),
    Memory,
}

/// Configuration for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub backend: Backend,
    pub store: String,
    /// `None` leaves the backend unwrapped.
    pub quotas: Option<StorageQuotas>,
    pub id_attribute: String,
    pub log_level: String,
}

impl CliConfig {
    pub fn from_args(args: &Args) -> Self {
        let backend = if args.memory {
            Backend::Memory
        } else {
            Backend::Sqlite(args.db.clone())
        };

        // An unset limit is unbounded, not the browser default
        let quotas = match (args.max_entries, args.max_bytes) {
            (None, None) => None,
            (entries, bytes) => Some(StorageQuotas::new(
                entries.unwrap_or(usize::MAX),
                bytes.unwrap_or(usize::MAX),
            )),
        };

        Self {
            backend,
            store: args.store.clone(),
            quotas,
            id_attribute: args.id_attribute.clone(),
            log_level: args.log_level.clone(),
        }
    }

    /// In-memory configuration for `store` with no quotas.
    pub fn memory(store: impl Into<String>) -> Self {
        Self {
            backend: Backend::Memory,
            store: store.into(),
            quotas: None,
            id_attribute: kvsync_core::DEFAULT_ID_ATTRIBUTE.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from([
            "kvsync",
            "--db",
            "todos.db",
            "--store",
            "Todos",
            "--max-entries",
            "10",
            "--id-attribute",
            "_id",
            "keys",
        ])
        .unwrap();

        let config = CliConfig::from_args(&args);
        assert_eq!(config.backend, Backend::Sqlite(PathBuf::from("todos.db")));
        assert_eq!(config.quotas, Some(StorageQuotas::new(10, usize::MAX)));
        assert_eq!(config.id_attribute, "_id");
    }

    #[test]
    fn test_no_limits_means_no_quotas() {
        let args = Args::try_parse_from(["kvsync", "-s", "T", "list"]).unwrap();
        assert_eq!(CliConfig::from_args(&args).quotas, None);
    }

    #[test]
    fn test_memory_overrides_db() {
        let args =
            Args::try_parse_from(["kvsync", "--db", "x.db", "--memory", "-s", "T", "list"]).unwrap();
        assert_eq!(CliConfig::from_args(&args).backend, Backend::Memory);
    }
}
