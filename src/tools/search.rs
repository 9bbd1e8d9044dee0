//! One-shot ranked search over the loaded index.

use crate::search::ResultList;
use crate::session::SearchSession;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Name fragment to look up
    pub query: String,
    /// Maximum number of results to return (default: the configured window, 10)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Rank the index against the query and format the visible results.
pub async fn handle_search(state: &SearchSession, request: SearchRequest) -> Result<String, String> {
    if request.query.trim().is_empty() {
        return Err("Query must not be empty".to_string());
    }

    if state.index().is_empty() {
        return Ok("The search index is empty.\n".to_string());
    }

    let results = state.search(&request.query, request.limit).await;
    Ok(format_search_results(&results))
}

/// Format search results into a readable string output.
pub fn format_search_results(results: &ResultList) -> String {
    let mut output = format!("Quick search results for '{}':\n\n", results.query());

    for (idx, candidate) in results.candidates().iter().enumerate() {
        let _ = write!(
            output,
            "{}. `{}` - score: {:.2}",
            idx + 1,
            candidate.name(),
            candidate.score
        );
        match candidate.entry.target() {
            Some(url) => {
                let _ = writeln!(output, " ({})", url);
            }
            None => output.push_str(" (no link)\n"),
        }
        if let Some(text) = candidate.entry.text.as_deref().filter(|text| !text.is_empty()) {
            let _ = writeln!(output, "   {}", text.trim());
        }
    }

    if let Some(caption) = results.overflow_caption() {
        let _ = writeln!(output, "\n… {}", caption);
    }

    output
}
