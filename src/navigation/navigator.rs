//! Page navigation capability injected into the controller.

use serde::Serialize;

/// Performs page navigation on behalf of the controller.
pub trait Navigator {
    /// The current page location.
    fn location(&self) -> &str;

    /// Go to `url`.
    fn navigate(&mut self, url: &str);

    /// Reload the current page in place.
    fn reload(&mut self);
}

/// A navigation request emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationIntent {
    Navigate { url: String },
    Reload,
}

/// Navigator that records intents for a host to act on later.
///
/// Navigating updates the recorded location, the way a browser would.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    location: String,
    intents: Vec<NavigationIntent>,
}

impl RecordingNavigator {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            intents: Vec::new(),
        }
    }

    /// Intents recorded so far, oldest first.
    pub fn intents(&self) -> &[NavigationIntent] {
        &self.intents
    }

    /// Take the recorded intents, leaving none behind.
    pub fn drain(&mut self) -> Vec<NavigationIntent> {
        std::mem::take(&mut self.intents)
    }
}

impl Navigator for RecordingNavigator {
    fn location(&self) -> &str {
        &self.location
    }

    fn navigate(&mut self, url: &str) {
        self.location = url.to_string();
        self.intents.push(NavigationIntent::Navigate {
            url: url.to_string(),
        });
    }

    fn reload(&mut self) {
        self.intents.push(NavigationIntent::Reload);
    }
}
