//! Runtime configuration.
//!
//! Values come from, in order of precedence: environment variables, an
//! optional TOML file, and built-in defaults.
//!
//! ```toml
//! max_results = 10
//! placeholder = "quick search..."
//! search_page = "search.html"
//! strategy = "dice"
//! rank_cache_size = 32
//! ```

use crate::error::ConfigError;
use crate::search::{MAX_VISIBLE_RESULTS, Strategy};
use serde::Deserialize;
use std::path::Path;

pub const ENV_MAX_RESULTS: &str = "QUICKSEARCH_MAX_RESULTS";
pub const ENV_PLACEHOLDER: &str = "QUICKSEARCH_PLACEHOLDER";
pub const ENV_SEARCH_PAGE: &str = "QUICKSEARCH_SEARCH_PAGE";
pub const ENV_STRATEGY: &str = "QUICKSEARCH_STRATEGY";
pub const ENV_RANK_CACHE_SIZE: &str = "QUICKSEARCH_RANK_CACHE_SIZE";

pub const DEFAULT_PLACEHOLDER: &str = "quick search...";
pub const DEFAULT_SEARCH_PAGE: &str = "search.html";
const DEFAULT_RANK_CACHE_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuickSearchConfig {
    /// Number of visible results before the overflow marker.
    pub max_results: usize,
    /// Prompt shown in the empty, unfocused field.
    pub placeholder: String,
    /// Full-text search page used when Enter is pressed without a selection.
    pub search_page: String,
    pub strategy: Strategy,
    /// Number of recent rankings to keep; 0 disables the cache.
    pub rank_cache_size: usize,
}

impl Default for QuickSearchConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_VISIBLE_RESULTS,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            search_page: DEFAULT_SEARCH_PAGE.to_string(),
            strategy: Strategy::default(),
            rank_cache_size: DEFAULT_RANK_CACHE_SIZE,
        }
    }
}

impl QuickSearchConfig {
    /// Load configuration from an optional TOML file, then apply environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.apply_env_overrides())
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config.normalized())
    }

    #[must_use]
    pub fn apply_env_overrides(mut self) -> Self {
        self.max_results = read_env_usize(ENV_MAX_RESULTS, self.max_results, 1);
        self.rank_cache_size = read_env_usize(ENV_RANK_CACHE_SIZE, self.rank_cache_size, 0);
        if let Some(placeholder) = read_non_empty_env(ENV_PLACEHOLDER) {
            self.placeholder = placeholder;
        }
        if let Some(search_page) = read_non_empty_env(ENV_SEARCH_PAGE) {
            self.search_page = search_page;
        }
        if let Some(raw) = read_non_empty_env(ENV_STRATEGY) {
            match raw.parse() {
                Ok(strategy) => self.strategy = strategy,
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_STRATEGY, e),
            }
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        if self.max_results == 0 {
            tracing::warn!("max_results must be at least 1, using {}", MAX_VISIBLE_RESULTS);
            self.max_results = MAX_VISIBLE_RESULTS;
        }
        self
    }
}

#[must_use]
fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
fn read_env_usize(name: &str, default_value: usize, min_value: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|value| *value >= min_value)
        .unwrap_or(default_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_defaults() {
        let config = QuickSearchConfig::default();
        check!(config.max_results == 10);
        check!(config.placeholder == "quick search...");
        check!(config.search_page == "search.html");
        check!(config.strategy == Strategy::Dice);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file = write_config("max_results = 5\nstrategy = \"levenshtein\"\n");
        let config = QuickSearchConfig::from_file(file.path()).unwrap();
        check!(config.max_results == 5);
        check!(config.strategy == Strategy::Levenshtein);
        check!(config.placeholder == DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_zero_max_results_falls_back() {
        let file = write_config("max_results = 0\n");
        let config = QuickSearchConfig::from_file(file.path()).unwrap();
        check!(config.max_results == MAX_VISIBLE_RESULTS);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let file = write_config("max_result = 5\n");
        let_assert!(Err(ConfigError::Parse { .. }) = QuickSearchConfig::from_file(file.path()));
    }

    #[test]
    fn test_env_overrides() {
        // SAFETY: no other unit test reads these variables.
        unsafe {
            std::env::set_var(ENV_MAX_RESULTS, "3");
            std::env::set_var(ENV_STRATEGY, "levenshtein");
            std::env::set_var(ENV_SEARCH_PAGE, "  ");
        }
        let config = QuickSearchConfig::default().apply_env_overrides();
        unsafe {
            std::env::remove_var(ENV_MAX_RESULTS);
            std::env::remove_var(ENV_STRATEGY);
            std::env::remove_var(ENV_SEARCH_PAGE);
        }
        check!(config.max_results == 3);
        check!(config.strategy == Strategy::Levenshtein);
        check!(config.search_page == DEFAULT_SEARCH_PAGE);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let_assert!(
            Err(ConfigError::Io { .. }) =
                QuickSearchConfig::from_file(Path::new("/nonexistent/quicksearch.toml"))
        );
    }
}
