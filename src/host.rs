//! Collaborators the theme manager talks to.
//!
//! The manager never looks anything up by itself. A [`ThemeHost`] hands it
//! the durable store plus the optional toggle control and color panel, so the
//! manager can run against the real preview window or against test fakes.

use crate::mode::ThemeMode;
use crate::palette::{find_option, PaletteColor};
use crate::storage::KeyValueStore;

/// How an accent color came to be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Picked from the fixed palette.
    Palette,
    /// Typed or chosen through the free-form input.
    Custom,
    /// Restored from storage at startup.
    Restored,
}

/// The mode toggle button. Receives the change notification.
pub trait ToggleControl {
    /// Called after every mode or accent change with the color the button
    /// should be drawn with.
    fn refresh(&mut self, mode: ThemeMode, backing_hex: &str);
}

/// The accent color picker panel.
pub trait ColorPanel {
    /// Reflects the active accent in the panel's inputs.
    fn show_selection(&mut self, hex: &str, source: SelectionSource);
}

/// Capability interface handed to the manager at construction.
pub trait ThemeHost {
    fn store(&mut self) -> &mut dyn KeyValueStore;

    fn toggle_control(&mut self) -> Option<&mut dyn ToggleControl> {
        None
    }

    fn color_panel(&mut self) -> Option<&mut dyn ColorPanel> {
        None
    }
}

/// Toggle button state for hosts that redraw from state every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleButtonState {
    mode: ThemeMode,
    backing_hex: Option<String>,
}

impl ToggleButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// `None` until the first notification.
    pub fn backing_hex(&self) -> Option<&str> {
        self.backing_hex.as_deref()
    }
}

impl ToggleControl for ToggleButtonState {
    fn refresh(&mut self, mode: ThemeMode, backing_hex: &str) {
        self.mode = mode;
        self.backing_hex = Some(backing_hex.to_string());
    }
}

/// Color picker panel state: palette, highlighted option and custom input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPickerState {
    palette: Vec<PaletteColor>,
    active: Option<usize>,
    custom_input: String,
}

impl ColorPickerState {
    pub fn new(palette: Vec<PaletteColor>) -> Self {
        Self {
            palette,
            active: None,
            custom_input: String::new(),
        }
    }

    pub fn palette(&self) -> &[PaletteColor] {
        &self.palette
    }

    /// Index of the highlighted palette option.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn custom_input(&self) -> &str {
        &self.custom_input
    }
}

impl ColorPanel for ColorPickerState {
    fn show_selection(&mut self, hex: &str, source: SelectionSource) {
        self.custom_input = hex.to_string();
        // A free-form pick clears the highlight even when it equals a palette color.
        self.active = match source {
            SelectionSource::Custom => None,
            SelectionSource::Palette | SelectionSource::Restored => find_option(&self.palette, hex),
        };
    }
}

/// Host with a store and optional built-in toggle and picker states.
#[derive(Debug)]
pub struct PageHost<S> {
    pub store: S,
    pub toggle: Option<ToggleButtonState>,
    pub picker: Option<ColorPickerState>,
}

impl<S: KeyValueStore> PageHost<S> {
    /// Host with both controls present.
    pub fn new(store: S, palette: Vec<PaletteColor>) -> Self {
        Self {
            store,
            toggle: Some(ToggleButtonState::new()),
            picker: Some(ColorPickerState::new(palette)),
        }
    }

    /// Host with a store only.
    pub fn headless(store: S) -> Self {
        Self {
            store,
            toggle: None,
            picker: None,
        }
    }
}

impl<S: KeyValueStore> ThemeHost for PageHost<S> {
    fn store(&mut self) -> &mut dyn KeyValueStore {
        &mut self.store
    }

    fn toggle_control(&mut self) -> Option<&mut dyn ToggleControl> {
        self.toggle.as_mut().map(|t| t as &mut dyn ToggleControl)
    }

    fn color_panel(&mut self) -> Option<&mut dyn ColorPanel> {
        self.picker.as_mut().map(|p| p as &mut dyn ColorPanel)
    }
}
