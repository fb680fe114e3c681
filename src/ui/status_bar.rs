//! Status bar UI rendering
//!
//! Shows where theme state is persisted and whether persistence still works.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Mode: {}", state.theme.mode())).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Accent: {}", state.theme.accent().base)).strong());
        ui.label(RichText::new("|").strong());

        match &state.store_location {
            Some(path) => ui.label(format!("Store: {}", path.display())),
            None => ui.label("Store: in-memory"),
        };

        if state.theme.is_persistence_degraded() {
            ui.label(RichText::new("|").strong());
            ui.label(
                RichText::new("⚠ storage failed, changes last for this session only")
                    .color(ui.visuals().warn_fg_color),
            );
        }
    });
}
