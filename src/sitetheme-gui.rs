//! Site Theme Preview GUI Application
//!
//! Hosts a [`sitetheme::ThemeColorManager`] inside an egui window so the
//! theme behaviour of the site can be exercised outside a browser:
//! - Light/dark toggle button whose color follows the accent
//! - Accent color picker with palette swatches and a free-form `#RRGGBB` input
//! - Preview area styled from the `--primary*` variables and `data-theme`
//! - Theme state persisted to a JSON key-value file between runs
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state, theme/store setup and interaction handling
//! - `ui/` - Panel rendering (header, color picker, preview, status bar)
//!
//! Usage: `sitetheme-gui [config.json]`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use sitetheme::ThemeConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use ui::panel_manager::PanelManager;

const PICKER_OPEN_KEY: &str = "color_picker_open";

/// Entry point: sets up logging, loads the theme config and opens the preview window.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sitetheme=info,sitetheme_gui=info")),
        )
        .init();

    // Optional config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ThemeConfig::load_or_default(config_path.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Site Theme Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "Site Theme Preview",
        options,
        Box::new(move |cc| Ok(Box::new(ThemePreviewApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("preview window failed: {err}"))
}

/// The preview application. Rendering goes through `PanelManager`, state
/// changes through `ApplicationCoordinator`.
struct ThemePreviewApp {
    state: AppState,
}

impl ThemePreviewApp {
    /// Opens the theme store, restores the theme and the picker panel layout.
    fn new(cc: &eframe::CreationContext, config: ThemeConfig) -> Self {
        let picker_open: bool = SettingsCoordinator::load_setting_or(cc.storage, PICKER_OPEN_KEY, false);
        let (manager, store_location) = ThemeCoordinator::start_session(config);

        Self {
            state: AppState::new(manager, picker_open, store_location),
        }
    }
}

impl eframe::App for ThemePreviewApp {
    /// Called on shutdown; keeps the picker panel layout for the next run.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, PICKER_OPEN_KEY, &self.state.picker_open);
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state.theme);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            let layout_changed = ApplicationCoordinator::handle_interaction(&mut self.state, interaction);

            if layout_changed {
                if let Some(storage) = frame.storage_mut() {
                    SettingsCoordinator::save_setting(storage, PICKER_OPEN_KEY, &self.state.picker_open);
                }
            }
        }
    }
}
