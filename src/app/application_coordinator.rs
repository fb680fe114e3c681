//! Routes panel interactions to the theme manager.

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;
use tracing::debug;

/// Applies user intents from the panels to application state.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Handles one interaction.
    ///
    /// Returns true when a persisted layout setting changed.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) -> bool {
        match interaction {
            PanelInteraction::ToggleModeRequested => {
                state.theme.toggle_mode();
                false
            }
            PanelInteraction::PaletteOptionPicked(index) => {
                match state.theme.select_palette_option(index) {
                    Ok(()) => {
                        state.picker_error = None;
                        state.sync_custom_color_text();
                    }
                    Err(err) => state.picker_error = Some(err.to_string()),
                }
                false
            }
            PanelInteraction::CustomColorEdited(text) => {
                Self::apply_custom_color(state, &text);
                false
            }
            PanelInteraction::PickerToggled => {
                state.picker_open = !state.picker_open;
                true
            }
            PanelInteraction::PickerDismissed => {
                let was_open = state.picker_open;
                state.picker_open = false;
                was_open
            }
        }
    }

    /// Applies free-form input. Partial input is expected while typing, so a
    /// rejection is shown next to the field rather than logged as a warning.
    fn apply_custom_color(state: &mut AppState, text: &str) {
        match state.theme.set_accent_color(text.trim()) {
            Ok(()) => state.picker_error = None,
            Err(err) => {
                debug!(%err, "custom accent rejected");
                state.picker_error = Some(err.to_string());
            }
        }
    }
}
