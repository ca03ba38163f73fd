//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod status_bar;
pub mod ui;

pub use status_bar::{
    sync_status_bar, RenderedSegment, SegmentContent, SegmentId, SegmentPosition, StatusBar,
    StatusBarLayout, StatusSegment, TransientMessage,
};
pub use ui::{UiState, TRANSIENT_MESSAGE_MS};

use crate::config::EditorConfig;
use crate::editor::GridEditor;
use crate::locale::{Localizer, StringTable};
use crate::theme::{load_theme, Theme};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Size, maze mode and the grid being edited
    pub editor: GridEditor,
    /// UI state (status bar, selection, hover)
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Configuration in effect for this session (command-line overrides applied)
    pub config: EditorConfig,
    /// Configuration as loaded from disk; preference changes are written here
    pub saved_config: EditorConfig,
    /// Localization capability
    pub locale: Box<dyn Localizer>,
    /// Window dimensions
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Character width in pixels
    pub char_width: f32,
}

impl AppModel {
    /// Create a new application model from a loaded config
    ///
    /// Theme and locale come from the config; unknown values fall back to
    /// the defaults with a warning.
    pub fn new(window_width: u32, window_height: u32, config: EditorConfig) -> Self {
        let theme = load_theme(&config.theme).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load theme '{}': {}, using default",
                config.theme,
                e
            );
            Theme::default()
        });
        let locale = Box::new(StringTable::with_locale(&config.locale));
        Self::with_localizer(window_width, window_height, config, theme, locale)
    }

    /// Create a model with an injected theme and localizer
    pub fn with_localizer(
        window_width: u32,
        window_height: u32,
        config: EditorConfig,
        theme: Theme,
        locale: Box<dyn Localizer>,
    ) -> Self {
        let editor = GridEditor::new(config.default_size, config.maze_mode);
        let ui = UiState::with_status(locale.translate("status.ready"));

        let mut model = Self {
            editor,
            ui,
            theme,
            saved_config: config.clone(),
            config,
            locale,
            window_size: (window_width, window_height),
            // Corrected by the renderer with actual font metrics
            line_height: 20,
            char_width: 9.0,
        };
        model.ui.clamp_selection(model.editor.size());
        sync_status_bar(&mut model);
        model
    }

    /// Keep `saved` as the on-disk config when the session config differs
    pub fn with_saved_config(mut self, saved: EditorConfig) -> Self {
        self.saved_config = saved;
        self
    }

    /// Update window dimensions after a resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Update char_width from actual font metrics
    pub fn set_char_width(&mut self, char_width: f32) {
        self.char_width = char_width;
    }

    /// Update line_height from actual font metrics
    pub fn set_line_height(&mut self, line_height: usize) {
        self.line_height = line_height.max(1);
    }

    /// Translate a UI string in the active locale
    pub fn tr(&self, key: &str) -> String {
        self.locale.translate(key)
    }

    /// Translate with `{name}` substitutions
    pub fn tr_with(&self, key: &str, args: &[(&str, String)]) -> String {
        self.locale.translate_with(key, args)
    }

    /// Window title: app title plus the current size
    pub fn window_title(&self) -> String {
        let size = self.editor.size();
        format!("{} ({} × {})", self.tr("app.title"), size, size)
    }
}
