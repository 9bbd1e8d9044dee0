//! Drives the navigation session one input event at a time.

use crate::navigation::{ClickTarget, Effect, Event, NavigationIntent};
use crate::session::SearchSession;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Wire form of [`Event`], tagged by `type`.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRequest {
    Key {
        code: u32,
        #[serde(default)]
        text: String,
    },
    MouseOver {
        row: usize,
    },
    MouseOut {
        row: usize,
    },
    ClickRow {
        row: usize,
    },
    Click {
        target: ClickTarget,
    },
    FocusIn,
    FocusOut,
}

impl From<EventRequest> for Event {
    fn from(request: EventRequest) -> Self {
        match request {
            EventRequest::Key { code, text } => Self::from_key_code(code, &text),
            EventRequest::MouseOver { row } => Self::MouseOverRow(row),
            EventRequest::MouseOut { row } => Self::MouseOutRow(row),
            EventRequest::ClickRow { row } => Self::ClickRow(row),
            EventRequest::Click { target } => Self::Click(target),
            EventRequest::FocusIn => Self::FocusIn,
            EventRequest::FocusOut => Self::FocusOut,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SendEventRequest {
    /// Input event: a key code (13 Enter, 27 Escape, 38 Up, 40 Down, anything
    /// else with the field's current text), a row hover/click, a document
    /// click, or a focus change
    pub event: EventRequest,
}

/// Session state after an event.
#[derive(Debug, Clone, Serialize)]
pub struct StateSummary {
    pub query: String,
    pub open: bool,
    pub selected_index: isize,
    pub results: usize,
    pub truncated: bool,
    pub field_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub effects: Vec<Effect>,
    pub navigation: Vec<NavigationIntent>,
    pub state: StateSummary,
}

/// Apply the event to the session and describe what happened.
pub async fn apply_event(state: &SearchSession, request: SendEventRequest) -> EventResponse {
    let mut controller = state.controller().await;
    let effects = controller.handle(request.event.into());
    let navigation = controller.navigator_mut().drain();

    let nav_state = controller.state();
    let summary = StateSummary {
        query: nav_state.query().to_string(),
        open: nav_state.is_open(),
        selected_index: nav_state.selected_index(),
        results: nav_state.results().len(),
        truncated: nav_state.results().truncated(),
        field_text: controller.field().text().to_string(),
    };

    EventResponse {
        effects,
        navigation,
        state: summary,
    }
}

/// Tool entry point: apply the event and serialize the response as JSON.
pub async fn handle_send_event(
    state: &SearchSession,
    request: SendEventRequest,
) -> Result<String, String> {
    let response = apply_event(state, request).await;
    serde_json::to_string_pretty(&response)
        .map_err(|e| format!("Failed to serialize event response: {}", e))
}
