//! Ranking infrastructure for the quick-search box.
//!
//! This module provides bigram similarity scoring, the static entry index,
//! ranking of entries against a query, and truncation of a ranking to the
//! visible result window.

// Module declarations
pub(crate) mod index;
pub(crate) mod rank;
pub(crate) mod similarity;
pub(crate) mod window;

// Public re-exports (used via lib.rs)
pub use index::{Descriptor, IndexEntry, SearchIndex};
pub use rank::{Ranker, ScoredCandidate, rank};
pub use similarity::{Dice, Levenshtein, SimilarityScorer, Strategy, dice, levenshtein};
pub use window::{MAX_VISIBLE_RESULTS, ResultList, windowed};
