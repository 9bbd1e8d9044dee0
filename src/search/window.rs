//! Truncating a ranking to the visible result list.

use super::ScoredCandidate;

/// Default number of visible results.
pub const MAX_VISIBLE_RESULTS: usize = 10;

/// The bounded, ordered list of results shown for a query.
///
/// When `truncated` is set the list is followed by a non-selectable overflow
/// marker; the marker is not part of `candidates`.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    query: String,
    candidates: Vec<ScoredCandidate>,
    truncated: bool,
}

impl ResultList {
    /// Build a list directly. Callers are responsible for ordering.
    pub fn new(query: impl Into<String>, candidates: Vec<ScoredCandidate>, truncated: bool) -> Self {
        Self {
            query: query.into(),
            candidates,
            truncated,
        }
    }

    /// The query these results were ranked for.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[ScoredCandidate] {
        &self.candidates
    }

    pub fn get(&self, index: usize) -> Option<&ScoredCandidate> {
        self.candidates.get(index)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether at least one ranked candidate was dropped.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Caption of the overflow marker, if one is shown.
    pub fn overflow_caption(&self) -> Option<String> {
        self.truncated
            .then(|| format!("Best results for '{}'", self.query))
    }
}

/// Keep the first `limit` ranked candidates.
pub fn windowed(query: &str, ranked: &[ScoredCandidate], limit: usize) -> ResultList {
    let visible = ranked.len().min(limit);
    ResultList {
        query: query.to_string(),
        candidates: ranked[..visible].to_vec(),
        truncated: ranked.len() > limit,
    }
}
