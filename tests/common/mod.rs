//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `scenario_index`: the two-entry `{Array, Map}` index
//! - `numbered_index`: `n` equally-scoring `item00`, `item01`, ... entries
//! - `session`: a [`SearchSession`] over `scenario_index` with default config
//!
//! [`TempIndex`] writes an index file to a temp directory for loader tests.

use quicksearch::config::QuickSearchConfig;
use quicksearch::navigation::{Event, NavigationController, RecordingNavigator};
use quicksearch::search::{Descriptor, SearchIndex};
use quicksearch::session::SearchSession;
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Page the recording navigator starts on.
#[allow(dead_code)] // Used across different integration test crates
pub const START_PAGE: &str = "index.html";

/// An index file inside a temporary directory that is removed on drop.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempIndex {
    _temp: TempDir,
    path: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempIndex {
    /// Writes `content` to `<tempdir>/<file_name>`.
    ///
    /// # Panics
    /// Panics if the temp directory or file cannot be created.
    pub fn new(file_name: &str, content: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join(file_name);
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write index '{}': {}", file_name, e));
        Self { _temp: temp, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `{Array -> array.html, Map -> map.html}`.
#[fixture]
pub fn scenario_index() -> Arc<SearchIndex> {
    Arc::new(SearchIndex::from_groups([
        ("Array", vec![Descriptor::new("array.html", "A collection")]),
        ("Map", vec![Descriptor::new("map.html", "A mapping")]),
    ]))
}

/// `n` entries whose names all score the same against the query `item`.
#[allow(dead_code)] // Used across different integration test crates
pub fn numbered_index(n: usize) -> Arc<SearchIndex> {
    Arc::new(SearchIndex::from_groups((0..n).map(|i| {
        (
            format!("item{:02}", i),
            vec![Descriptor::new(format!("item{:02}.html", i), format!("Item {}", i))],
        )
    })))
}

/// A controller over `index` with default configuration, starting on
/// [`START_PAGE`].
#[allow(dead_code)] // Used across different integration test crates
pub fn controller(index: Arc<SearchIndex>) -> NavigationController<RecordingNavigator> {
    NavigationController::new(
        index,
        &QuickSearchConfig::default(),
        RecordingNavigator::new(START_PAGE),
    )
}

/// Types `query` into the field of `controller`.
#[allow(dead_code)] // Used across different integration test crates
pub fn type_query(controller: &mut NavigationController<RecordingNavigator>, query: &str) {
    controller.handle(Event::TextChanged(query.to_string()));
}

/// A session over the scenario index with default configuration.
#[allow(dead_code)] // Used across different integration test crates
#[fixture]
pub fn session(scenario_index: Arc<SearchIndex>) -> SearchSession {
    SearchSession::new(scenario_index, QuickSearchConfig::default())
}
