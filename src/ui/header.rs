//! Header panel UI rendering
//!
//! Handles the top bar with the mode toggle button and the color picker button.

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;
use eframe::egui;
use egui::{Color32, RichText};
use sitetheme::{hex_to_color32, ThemeMode};

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<PanelInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<PanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Portfolio");
        ui.separator();

        // The toggle is drawn with the color it was last notified with
        let backing = state
            .theme
            .host()
            .toggle
            .as_ref()
            .and_then(|t| t.backing_hex())
            .and_then(hex_to_color32)
            .unwrap_or(ui.visuals().selection.bg_fill);

        let label = match state.theme.mode() {
            ThemeMode::Light => "☀ Light",
            ThemeMode::Dark => "🌙 Dark",
        };

        let toggle = egui::Button::new(RichText::new(label).color(Color32::WHITE)).fill(backing);
        if ui.add(toggle).on_hover_text("Switch between light and dark mode").clicked() {
            interaction = Some(PanelInteraction::ToggleModeRequested);
        }

        let picker_label = if state.picker_open { "🎨 Accent ▶" } else { "🎨 Accent" };
        if ui.button(picker_label).clicked() {
            interaction = Some(PanelInteraction::PickerToggled);
        }
    });

    interaction
}
