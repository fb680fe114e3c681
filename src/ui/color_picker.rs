//! Color picker panel UI rendering
//!
//! Shows the palette as clickable swatches (the active option is outlined), a
//! free-form `#RRGGBB` input, and the derived accent shades.

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;
use eframe::egui;
use egui::{Color32, RichText, Stroke};
use sitetheme::presentation::{PRIMARY_DARK_VAR, PRIMARY_LIGHT_VAR, PRIMARY_VAR};
use sitetheme::{hex_to_color32, PaletteColor};

const SWATCH_SIZE: f32 = 28.0;

/// Renders the color picker panel contents
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (custom input buffer)
pub fn render_color_picker(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;

    ui.heading("Accent color");
    ui.add_space(4.0);

    let (palette, active): (Vec<PaletteColor>, Option<usize>) = state
        .theme
        .host()
        .picker
        .as_ref()
        .map(|p| (p.palette().to_vec(), p.active()))
        .unwrap_or_default();

    ui.horizontal_wrapped(|ui| {
        for (index, option) in palette.iter().enumerate() {
            let fill = hex_to_color32(&option.hex).unwrap_or(Color32::GRAY);
            let stroke = if active == Some(index) {
                Stroke::new(2.0, ui.visuals().strong_text_color())
            } else {
                Stroke::NONE
            };

            let swatch = egui::Button::new("")
                .fill(fill)
                .stroke(stroke)
                .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE));

            if ui.add(swatch).on_hover_text(format!("{} {}", option.name, option.hex)).clicked() {
                interaction = Some(PanelInteraction::PaletteOptionPicked(index));
            }
        }
    });

    ui.separator();

    ui.label("Custom (#RRGGBB)");
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.custom_color_text)
            .desired_width(100.0)
            .char_limit(7),
    );
    if response.changed() {
        interaction = Some(PanelInteraction::CustomColorEdited(state.custom_color_text.clone()));
    }

    if let Some(error) = &state.picker_error {
        ui.label(RichText::new(error).color(ui.visuals().error_fg_color).small());
    }

    ui.separator();

    // Derived shades as currently applied
    let style = state.theme.style();
    egui::Grid::new("accent_shades").num_columns(3).show(ui, |ui| {
        for name in [PRIMARY_VAR, PRIMARY_DARK_VAR, PRIMARY_LIGHT_VAR] {
            let value = style.variable(name).unwrap_or("-");
            let color = hex_to_color32(value).unwrap_or(Color32::TRANSPARENT);

            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 3.0, color);
            ui.monospace(name);
            ui.monospace(value);
            ui.end_row();
        }
    });

    interaction
}
