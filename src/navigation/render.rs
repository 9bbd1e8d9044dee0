//! Render intents handed to the presentation layer.
//!
//! Rendering is a pure function of the result list and the selected row; the
//! controller never touches presentation itself.

use crate::search::ResultList;
use serde::Serialize;

/// How the result overlay is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Directly below the search field, matching its width.
    BelowField,
}

/// A selectable result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRow {
    /// Row position; hover and click events report this index back.
    pub index: usize,
    pub name: String,
    pub text: Option<String>,
    pub url: Option<String>,
    pub score: f64,
    pub active: bool,
}

/// Everything the presentation layer needs to draw the result overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderIntent {
    pub rows: Vec<RenderRow>,
    /// Caption of the trailing, non-selectable overflow row.
    pub overflow: Option<String>,
    pub selected: Option<usize>,
    pub placement: Placement,
}

/// Build the render intent for `results` with `selected` highlighted.
pub fn render(results: &ResultList, selected: Option<usize>) -> RenderIntent {
    let rows = results
        .candidates()
        .iter()
        .enumerate()
        .map(|(index, candidate)| RenderRow {
            index,
            name: candidate.entry.name.clone(),
            text: candidate.entry.text.clone(),
            url: candidate.entry.url.clone(),
            score: candidate.score,
            active: selected == Some(index),
        })
        .collect();

    RenderIntent {
        rows,
        overflow: results.overflow_caption(),
        selected,
        placement: Placement::BelowField,
    }
}

/// An axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Position of the overlay for a search field occupying `field`.
///
/// The overlay is as wide as the field and starts at its bottom edge.
/// `height` is left for the renderer to fill in.
pub fn overlay_rect(field: Rect) -> Rect {
    Rect {
        left: field.left,
        top: field.top + field.height,
        width: field.width,
        height: 0.0,
    }
}
