//! The controller's mutable state and the search field model.

use crate::error::StateError;
use crate::search::ResultList;

/// Current query, visible results, selected row and visibility.
///
/// Invariants (checked by [`NavigationState::new`] and after every event):
/// - `selected` is `None` or a valid index into `results`
/// - a closed list has no selection
/// - `results` is sorted by descending score
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    query: String,
    results: ResultList,
    selected: Option<usize>,
    is_open: bool,
}

impl NavigationState {
    /// Build a state, rejecting combinations that break the invariants.
    pub fn new(
        query: impl Into<String>,
        results: ResultList,
        selected: Option<usize>,
        is_open: bool,
    ) -> Result<Self, StateError> {
        let state = Self {
            query: query.into(),
            results,
            selected,
            is_open,
        };
        state.validate()?;
        Ok(state)
    }

    pub(crate) fn validate(&self) -> Result<(), StateError> {
        if let Some(selected) = self.selected {
            if !self.is_open {
                return Err(StateError::SelectionWhileClosed);
            }
            if selected >= self.results.len() {
                return Err(StateError::SelectionOutOfRange {
                    selected,
                    len: self.results.len(),
                });
            }
        }
        let candidates = self.results.candidates();
        if let Some(position) = candidates
            .windows(2)
            .position(|pair| pair[0].score < pair[1].score)
        {
            return Err(StateError::Unsorted {
                position: position + 1,
            });
        }
        Ok(())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selection as a signed index, `-1` meaning no row.
    pub fn selected_index(&self) -> isize {
        self.selected
            .and_then(|index| isize::try_from(index).ok())
            .unwrap_or(-1)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub(crate) fn open(&mut self, query: String, results: ResultList) {
        self.query = query;
        if results.is_empty() {
            self.results = ResultList::default();
            self.selected = None;
            self.is_open = false;
        } else {
            self.results = results;
            self.selected = Some(0);
            self.is_open = true;
        }
    }

    pub(crate) fn close(&mut self) {
        self.results = ResultList::default();
        self.selected = None;
        self.is_open = false;
    }

    pub(crate) fn clear(&mut self) {
        self.query.clear();
        self.close();
    }

    pub(crate) fn select(&mut self, index: usize) {
        debug_assert!(self.is_open && index < self.results.len());
        self.selected = Some(index);
    }
}

/// What the controller knows about the input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchField {
    text: String,
    focused: bool,
    placeholder: String,
}

impl SearchField {
    /// A field showing its placeholder prompt, unfocused.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            text: placeholder.clone(),
            focused: false,
            placeholder,
        }
    }

    /// Displayed text (the placeholder prompt when it is showing).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn shows_placeholder(&self) -> bool {
        self.text == self.placeholder
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
