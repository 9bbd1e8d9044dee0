//! Ranking index entries against a query.

use super::{IndexEntry, SearchIndex, SimilarityScorer};
use lru::LruCache;
use std::{num::NonZeroUsize, sync::Arc};

/// An index entry annotated with its similarity to the current query.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub entry: Arc<IndexEntry>,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}

/// Scores every entry in `index` against `query` and sorts by descending score.
///
/// The sort is stable: entries with equal scores keep their index order. No
/// entry is filtered out, so a query that matches nothing yields the index in
/// its original order.
pub fn rank(query: &str, index: &SearchIndex, scorer: &dyn SimilarityScorer) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> = Vec::with_capacity(index.len());
    let mut last_name: Option<&str> = None;
    let mut last_score = 0.0;

    for entry in index.iter() {
        // Records sharing a name are adjacent; score the name once.
        let score = match last_name {
            Some(name) if name == entry.name => last_score,
            _ => scorer.score(query, &entry.name),
        };
        last_name = Some(entry.name.as_str());
        last_score = score;
        candidates.push(ScoredCandidate {
            entry: entry.clone(),
            score,
        });
    }

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

/// Ranks queries against one index with a fixed scorer, remembering recent
/// rankings so that retyping a query does not rescore the whole index.
pub struct Ranker {
    index: Arc<SearchIndex>,
    scorer: Box<dyn SimilarityScorer>,
    cache: Option<LruCache<String, Arc<[ScoredCandidate]>>>,
}

impl std::fmt::Debug for Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker")
            .field("entries", &self.index.len())
            .field("scorer", &self.scorer.name())
            .field("cached", &self.cache.as_ref().map_or(0, LruCache::len))
            .finish()
    }
}

impl Ranker {
    /// Create a ranker. A `cache_size` of zero disables the cache.
    pub fn new(index: Arc<SearchIndex>, scorer: Box<dyn SimilarityScorer>, cache_size: usize) -> Self {
        Self {
            index,
            scorer,
            cache: NonZeroUsize::new(cache_size).map(LruCache::new),
        }
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Ranked candidates for `query`.
    pub fn rank(&mut self, query: &str) -> Arc<[ScoredCandidate]> {
        if let Some(cache) = self.cache.as_mut()
            && let Some(hit) = cache.get(query)
        {
            tracing::debug!("Ranking cache hit for '{}'", query);
            return hit.clone();
        }

        let start = std::time::Instant::now();
        let ranked: Arc<[ScoredCandidate]> = rank(query, &self.index, self.scorer.as_ref()).into();
        tracing::debug!(
            "Ranked {} entries for '{}' with {} in {:?}",
            ranked.len(),
            query,
            self.scorer.name(),
            start.elapsed()
        );

        if let Some(cache) = self.cache.as_mut() {
            cache.put(query.to_string(), ranked.clone());
        }
        ranked
    }
}
