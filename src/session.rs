//! Shared state behind the MCP tools.
//!
//! Holds the loaded index, the configuration, a ranker for one-shot searches
//! and the single navigation session driven by `send_event`. The controller is
//! single-threaded; tool calls take turns through a mutex.

use crate::config::QuickSearchConfig;
use crate::navigation::{NavigationController, RecordingNavigator};
use crate::search::{Ranker, ResultList, SearchIndex, windowed};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Location the session navigator starts at.
const INITIAL_LOCATION: &str = "index.html";

pub struct SearchSession {
    index: Arc<SearchIndex>,
    config: QuickSearchConfig,
    ranker: Mutex<Ranker>,
    controller: Mutex<NavigationController<RecordingNavigator>>,
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("entries", &self.index.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SearchSession {
    pub fn new(index: Arc<SearchIndex>, config: QuickSearchConfig) -> Self {
        let ranker = Ranker::new(
            index.clone(),
            config.strategy.scorer(),
            config.rank_cache_size,
        );
        let controller = NavigationController::new(
            index.clone(),
            &config,
            RecordingNavigator::new(INITIAL_LOCATION),
        );
        Self {
            index,
            config,
            ranker: Mutex::new(ranker),
            controller: Mutex::new(controller),
        }
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    pub fn config(&self) -> &QuickSearchConfig {
        &self.config
    }

    /// Rank `query` and keep at most `limit` results (the configured window
    /// size when `None`).
    pub async fn search(&self, query: &str, limit: Option<usize>) -> ResultList {
        let limit = limit.unwrap_or(self.config.max_results).max(1);
        let ranked = self.ranker.lock().await.rank(query);
        windowed(query, &ranked, limit)
    }

    /// Exclusive access to the navigation session.
    pub async fn controller(
        &self,
    ) -> tokio::sync::MutexGuard<'_, NavigationController<RecordingNavigator>> {
        self.controller.lock().await
    }
}
