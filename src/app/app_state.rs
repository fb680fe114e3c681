//! Centralized application state for the theme preview.

use sitetheme::{KeyValueStore, PageHost, ThemeColorManager};
use std::path::PathBuf;

/// Host used by the preview: boxed store plus the built-in toggle and picker states.
pub type GuiHost = PageHost<Box<dyn KeyValueStore>>;

/// Main application state.
///
/// Theme mode and accent live in the manager; this struct only adds what the
/// window itself needs (panel visibility, text buffers, messages).
pub struct AppState {
    /// Theme manager for this session
    pub theme: ThemeColorManager<GuiHost>,

    /// Whether the color picker side panel is shown
    pub picker_open: bool,

    /// Edit buffer for the custom color input
    pub custom_color_text: String,

    /// Last rejection of the custom color input
    pub picker_error: Option<String>,

    /// File backing the theme store, `None` for in-memory only
    pub store_location: Option<PathBuf>,
}

impl AppState {
    pub fn new(
        theme: ThemeColorManager<GuiHost>,
        picker_open: bool,
        store_location: Option<PathBuf>,
    ) -> Self {
        let mut state = Self {
            theme,
            picker_open,
            custom_color_text: String::new(),
            picker_error: None,
            store_location,
        };
        state.sync_custom_color_text();
        state
    }

    /// Copies the picker's custom input into the edit buffer.
    ///
    /// Falls back to the active accent when nothing has been selected yet.
    pub fn sync_custom_color_text(&mut self) {
        let input = self
            .theme
            .host()
            .picker
            .as_ref()
            .map(|p| p.custom_input())
            .filter(|s| !s.is_empty());

        self.custom_color_text = match input {
            Some(text) => text.to_string(),
            None => self.theme.accent().base.clone(),
        };
    }
}
