//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for quicksearch host operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` in the binary and tool glue. The search core itself is total.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading the search index fails.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to read search index at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("search index is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("search index must be a JSON object keyed by entry name")]
    NotAnObject,
    #[error("search index contains a malformed record list: {0}")]
    Record(#[source] serde_json::Error),
}

/// Error returned when loading configuration fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Error returned when restoring a navigation state that breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("selected row {selected} is out of range for {len} results")]
    SelectionOutOfRange { selected: usize, len: usize },
    #[error("a closed result list cannot have a selected row")]
    SelectionWhileClosed,
    #[error("results are not sorted by descending score at position {position}")]
    Unsorted { position: usize },
}
