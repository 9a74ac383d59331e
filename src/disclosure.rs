//! Open/closed state for a collapsible section

use tracing::debug;

/// Marker shown in an open section header (U+2212 MINUS SIGN)
pub const OPEN_MARKER: &str = "\u{2212}";
/// Marker shown in a closed section header
pub const CLOSED_MARKER: &str = "+";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    title: String,
    open: bool,
}

impl Disclosure {
    pub fn new(title: impl Into<String>, open: bool) -> Self {
        Self {
            title: title.into(),
            open,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the section and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(section = %self.title, open = self.open, "Section toggled");
        self.open
    }

    pub fn marker(&self) -> &'static str {
        if self.open { OPEN_MARKER } else { CLOSED_MARKER }
    }
}
