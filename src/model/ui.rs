//! UI state - status bar, keyboard selection and pointer feedback

use super::status_bar::{StatusBar, TransientMessage};
use crate::layout::HitTarget;

/// How long transient messages stay visible
pub const TRANSIENT_MESSAGE_MS: u64 = 3000;

/// UI state that is not part of the map itself
#[derive(Debug, Clone)]
pub struct UiState {
    /// Persistent message displayed in the status bar
    pub status_message: String,
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// Cell under the keyboard selection (row, col)
    pub selection: (usize, usize),
    /// Target under the pointer
    pub hover: Option<HitTarget>,
    /// Target the mouse button went down on
    pub pressed: Option<HitTarget>,
    /// Whether a file export is in flight
    pub is_exporting: bool,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self::with_status(String::new())
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            status_bar: StatusBar::new(),
            transient_message: None,
            selection: (1, 1),
            hover: None,
            pressed: None,
            is_exporting: false,
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show a message that disappears after [`TRANSIENT_MESSAGE_MS`]
    pub fn flash(&mut self, message: impl Into<String>) {
        self.transient_message = Some(TransientMessage::new(
            message,
            std::time::Duration::from_millis(TRANSIENT_MESSAGE_MS),
        ));
    }

    /// Keep the selection inside a `size × size` grid
    pub fn clamp_selection(&mut self, size: usize) {
        let max = size.saturating_sub(1);
        self.selection = (self.selection.0.min(max), self.selection.1.min(max));
    }

    /// Check if the UI is busy (export in flight)
    pub fn is_busy(&self) -> bool {
        self.is_exporting
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
