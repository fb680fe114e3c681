//! Preview panel UI rendering
//!
//! Draws a small sample page (hero text, call-to-action buttons, a link) using
//! the accent variables, so mode and accent changes are visible at a glance.

use crate::app::AppState;
use eframe::egui;
use egui::{Color32, RichText};
use sitetheme::presentation::{PRIMARY_DARK_VAR, PRIMARY_LIGHT_VAR, PRIMARY_VAR, THEME_ATTRIBUTE};
use sitetheme::hex_to_color32;

/// Renders the sample page
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_preview(ui: &mut egui::Ui, state: &AppState) {
    let style = state.theme.style();
    let var = |name: &str| style.variable(name).and_then(hex_to_color32);

    let fallback = ui.visuals().selection.bg_fill;
    let primary = var(PRIMARY_VAR).unwrap_or(fallback);
    let primary_dark = var(PRIMARY_DARK_VAR).unwrap_or(primary);
    let primary_light = var(PRIMARY_LIGHT_VAR).unwrap_or(primary);

    ui.add_space(24.0);
    ui.label(RichText::new("Building thoughtful digital products").size(30.0).strong());
    ui.label(RichText::new("Design • Development • AI").size(18.0).color(primary));
    ui.add_space(12.0);
    ui.label(
        "We help teams turn ideas into polished, fast and accessible experiences. \
         Pick an accent color and switch modes to see the page restyle itself.",
    );
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        let cta = egui::Button::new(RichText::new("Get started").color(Color32::WHITE)).fill(primary);
        ui.add(cta);

        let secondary = egui::Button::new(RichText::new("Our work").color(primary_dark))
            .fill(primary_light.gamma_multiply(0.25));
        ui.add(secondary);

        ui.hyperlink_to("Read the blog", "https://example.com/blog");
    });

    ui.add_space(24.0);
    ui.separator();

    egui::CollapsingHeader::new("Style variables")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("style_variables").num_columns(2).striped(true).show(ui, |ui| {
                ui.monospace(THEME_ATTRIBUTE);
                ui.monospace(style.theme().as_str());
                ui.end_row();

                for (name, value) in style.variables() {
                    ui.monospace(name);
                    ui.monospace(value);
                    ui.end_row();
                }
            });
        });
}
