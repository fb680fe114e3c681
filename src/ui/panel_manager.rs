//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, color picker, preview, status) and
//! collects the user's intent for the application coordinator.

use crate::app::AppState;
use crate::ui::{color_picker, header, preview, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelInteraction {
    /// The mode toggle button was clicked
    ToggleModeRequested,
    /// A palette swatch was clicked
    PaletteOptionPicked(usize),
    /// The custom color input changed
    CustomColorEdited(String),
    /// The color picker button was clicked
    PickerToggled,
    /// A click landed outside the picker panel and its button
    PickerDismissed,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from `eframe::App::update()`. At most one interaction is
    /// reported per frame; the first one wins.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        let header_panel = egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(header_interaction);
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Color picker on the right
        if state.picker_open {
            let picker_panel = egui::SidePanel::right("color_picker")
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| color_picker::render_color_picker(ui, state));

            if interaction.is_none() {
                interaction = picker_panel.inner;
            }

            // Clicking anywhere outside the panel (and outside the header, which
            // holds the picker button) closes it
            let picker_rect = picker_panel.response.rect;
            let header_rect = header_panel.response.rect;
            let clicked_outside = ctx.input(|i| {
                i.pointer.any_click()
                    && i.pointer
                        .interact_pos()
                        .is_some_and(|pos| !picker_rect.contains(pos) && !header_rect.contains(pos))
            });
            if clicked_outside && interaction.is_none() {
                interaction = Some(PanelInteraction::PickerDismissed);
            }
        }

        // Preview fills the rest
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                preview::render_preview(ui, state);
            });
        });

        interaction
    }
}
