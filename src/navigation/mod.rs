//! Keyboard and mouse navigation of the quick-search result list.

pub(crate) mod controller;
pub(crate) mod event;
pub(crate) mod navigator;
pub(crate) mod render;
pub(crate) mod state;

pub use controller::{Effect, NavigationController};
pub use event::{ClickTarget, Event, key_code};
pub use navigator::{NavigationIntent, Navigator, RecordingNavigator};
pub use render::{Placement, Rect, RenderIntent, RenderRow, overlay_rect, render};
pub use state::{NavigationState, SearchField};
