//! Incremental quick search over a documentation index.
//!
//! [`search`] holds the pure core: bigram similarity, ranking and the visible
//! result window. [`navigation`] is the keyboard/mouse state machine that
//! drives a search box from input events. The remaining modules host the core
//! as an MCP server and a small CLI.

pub mod cli;
pub mod config;
pub mod error;
pub mod navigation;
pub mod search;
pub mod server;
pub mod session;
pub mod tools;
pub mod tracing;

pub use config::QuickSearchConfig;
pub use error::{ConfigError, IndexError, Result, StateError};
pub use navigation::{Effect, Event, NavigationController, NavigationState, Navigator};
pub use search::{ResultList, ScoredCandidate, SearchIndex, SimilarityScorer};
pub use server::QuickSearchServer;
pub use session::SearchSession;
