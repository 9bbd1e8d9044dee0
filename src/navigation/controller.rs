//! The quick-search interaction state machine.
//!
//! [`NavigationController`] owns the only mutable state of a search session.
//! Every input goes through [`NavigationController::handle`], which updates the
//! state, performs page navigation through the injected [`Navigator`], and
//! returns the presentation effects for the rendering layer.

use super::event::{ClickTarget, Event};
use super::navigator::Navigator;
use super::render::{RenderIntent, render};
use super::state::{NavigationState, SearchField};
use crate::config::QuickSearchConfig;
use crate::search::{Ranker, SearchIndex, windowed};
use serde::Serialize;
use std::sync::Arc;

/// A presentation change requested by the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Show (or redraw) the result overlay.
    Render(RenderIntent),
    /// Remove the result overlay.
    Hide,
    /// Replace the field's displayed text without triggering a new search.
    SetFieldText { text: String },
    /// Display the placeholder prompt in the empty, unfocused field.
    ShowPlaceholder { text: String },
    /// Remove the placeholder prompt from the field.
    ClearPlaceholder,
    FocusField,
    BlurField,
    /// Drop the hover highlight from a row without changing the selection.
    ClearHighlight { row: usize },
}

/// Drives one quick-search box.
pub struct NavigationController<N> {
    ranker: Ranker,
    navigator: N,
    state: NavigationState,
    field: SearchField,
    max_results: usize,
    search_page: String,
}

impl<N> std::fmt::Debug for NavigationController<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("ranker", &self.ranker)
            .field("state", &self.state)
            .field("field", &self.field)
            .field("max_results", &self.max_results)
            .field("search_page", &self.search_page)
            .finish_non_exhaustive()
    }
}

impl<N: Navigator> NavigationController<N> {
    /// Create a closed controller over `index`.
    pub fn new(index: Arc<SearchIndex>, config: &QuickSearchConfig, navigator: N) -> Self {
        Self {
            ranker: Ranker::new(index, config.strategy.scorer(), config.rank_cache_size),
            navigator,
            state: NavigationState::default(),
            field: SearchField::new(config.placeholder.clone()),
            max_results: config.max_results,
            search_page: config.search_page.clone(),
        }
    }

    /// Replace the current state, e.g. to restore a session.
    pub fn with_state(mut self, state: NavigationState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn field(&self) -> &SearchField {
        &self.field
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Render intent for the current state.
    pub fn render(&self) -> RenderIntent {
        render(self.state.results(), self.state.selected())
    }

    /// Apply one event and return the presentation effects it causes.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        let label = event.label();
        let effects = match event {
            Event::TextChanged(query) => self.text_changed(query),
            Event::ArrowDown => self.select_next(),
            Event::ArrowUp => self.select_previous(),
            Event::Enter => {
                self.go_to_result();
                vec![]
            }
            Event::Escape => {
                self.field.set_focused(false);
                self.state.close();
                vec![Effect::BlurField, Effect::Hide]
            }
            Event::MouseOverRow(row) => self.hover(row),
            Event::MouseOutRow(row) => {
                if self.state.is_open() && self.state.selected() == Some(row) {
                    vec![Effect::ClearHighlight { row }]
                } else {
                    vec![]
                }
            }
            Event::ClickRow(row) => {
                if self.state.is_open() {
                    self.follow(row);
                }
                vec![]
            }
            Event::Click(target) => self.click(target),
            Event::FocusIn => self.focus_in(),
            Event::FocusOut => self.focus_out(),
        };

        tracing::debug!(
            "{}: open={}, selected={:?}, effects={}",
            label,
            self.state.is_open(),
            self.state.selected(),
            effects.len()
        );
        debug_assert!(
            self.state.validate().is_ok(),
            "navigation state invariant broken after {}: {:?}",
            label,
            self.state.validate()
        );

        effects
    }

    fn text_changed(&mut self, query: String) -> Vec<Effect> {
        self.field.set_text(query.clone());

        if query.is_empty() {
            self.state.clear();
            return vec![Effect::Hide];
        }

        let ranked = self.ranker.rank(&query);
        let results = windowed(&query, &ranked, self.max_results);
        self.state.open(query, results);

        if self.state.is_open() {
            self.field.set_focused(true);
            vec![Effect::Render(self.render()), Effect::FocusField]
        } else {
            vec![Effect::Hide]
        }
    }

    fn select_next(&mut self) -> Vec<Effect> {
        if !self.state.is_open() {
            return vec![];
        }
        let next = self.state.selected().map_or(0, |selected| selected + 1);
        if next >= self.state.results().len() {
            return vec![];
        }
        self.move_selection(next)
    }

    fn select_previous(&mut self) -> Vec<Effect> {
        if !self.state.is_open() {
            return vec![];
        }
        match self.state.selected() {
            Some(0) => self.show_selected_name(0),
            Some(selected) => self.move_selection(selected - 1),
            None => vec![],
        }
    }

    fn move_selection(&mut self, row: usize) -> Vec<Effect> {
        self.state.select(row);
        let mut effects = vec![Effect::Render(self.render())];
        effects.extend(self.show_selected_name(row));
        effects
    }

    /// Put the name of `row` into the field and keep focus there.
    fn show_selected_name(&mut self, row: usize) -> Vec<Effect> {
        let Some(candidate) = self.state.results().get(row) else {
            return vec![];
        };
        let text = candidate.name().to_string();
        self.field.set_text(text.clone());
        self.field.set_focused(true);
        vec![Effect::SetFieldText { text }, Effect::FocusField]
    }

    fn hover(&mut self, row: usize) -> Vec<Effect> {
        if !self.state.is_open() || row >= self.state.results().len() {
            return vec![];
        }
        self.state.select(row);
        vec![Effect::Render(self.render())]
    }

    fn click(&mut self, target: ClickTarget) -> Vec<Effect> {
        if self.state.is_open() && target == ClickTarget::Elsewhere {
            self.state.close();
            vec![Effect::Hide]
        } else {
            vec![]
        }
    }

    fn focus_in(&mut self) -> Vec<Effect> {
        self.field.set_focused(true);
        if self.field.shows_placeholder() {
            self.field.set_text("");
            vec![Effect::ClearPlaceholder]
        } else {
            vec![]
        }
    }

    fn focus_out(&mut self) -> Vec<Effect> {
        self.field.set_focused(false);
        if self.field.text().is_empty() {
            let text = self.field.placeholder().to_string();
            self.field.set_text(text.clone());
            vec![Effect::ShowPlaceholder { text }]
        } else {
            vec![]
        }
    }

    /// Enter: follow the selected row, or fall back to the full-text search page.
    fn go_to_result(&mut self) {
        if let Some(selected) = self.state.selected() {
            self.follow(selected);
            return;
        }

        let query = self.state.query();
        if query.is_empty() {
            return;
        }

        // Only the fragment changes when already on the search page, so the
        // page has to be reloaded to pick up the new query.
        let on_search_page = self.navigator.location().contains(self.search_page.as_str());
        let url = format!("{}#q={}", self.search_page, query);
        tracing::debug!("No row selected, sending '{}' to {}", query, self.search_page);
        self.navigator.navigate(&url);
        if on_search_page {
            self.navigator.reload();
        }
    }

    fn follow(&mut self, row: usize) {
        let Some(candidate) = self.state.results().get(row) else {
            return;
        };
        match candidate.entry.target() {
            Some(url) => self.navigator.navigate(url),
            None => tracing::warn!(
                "Entry '{}' has no target link, ignoring navigation",
                candidate.name()
            ),
        }
    }
}
