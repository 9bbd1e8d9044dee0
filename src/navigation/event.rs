//! Input events consumed by the navigation controller.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Key codes with dedicated handling. Any other code means the field's text
/// may have changed.
pub mod key_code {
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const UP: u32 = 38;
    pub const DOWN: u32 = 40;
}

/// Where a document click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    Field,
    ResultList,
    Elsewhere,
}

/// One user interaction with the search field or the result list.
///
/// Row events carry the row's index by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TextChanged(String),
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    MouseOverRow(usize),
    MouseOutRow(usize),
    ClickRow(usize),
    Click(ClickTarget),
    FocusIn,
    FocusOut,
}

impl Event {
    /// Translate a key-up event. `field_text` is the field's value after the key.
    pub fn from_key_code(code: u32, field_text: &str) -> Self {
        match code {
            key_code::UP => Self::ArrowUp,
            key_code::DOWN => Self::ArrowDown,
            key_code::ENTER => Self::Enter,
            key_code::ESCAPE => Self::Escape,
            _ => Self::TextChanged(field_text.to_string()),
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TextChanged(_) => "text_changed",
            Self::ArrowUp => "arrow_up",
            Self::ArrowDown => "arrow_down",
            Self::Enter => "enter",
            Self::Escape => "escape",
            Self::MouseOverRow(_) => "mouse_over_row",
            Self::MouseOutRow(_) => "mouse_out_row",
            Self::ClickRow(_) => "click_row",
            Self::Click(_) => "click",
            Self::FocusIn => "focus_in",
            Self::FocusOut => "focus_out",
        }
    }
}
