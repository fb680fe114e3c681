//! Theme session setup and application to egui.
//!
//! Opens the durable theme store, builds and initializes the manager, and
//! translates the manager's style context into egui visuals every frame.

use crate::app::GuiHost;
use eframe::egui;
use sitetheme::presentation::{PRIMARY_DARK_VAR, PRIMARY_LIGHT_VAR, PRIMARY_VAR};
use sitetheme::{
    hex_to_color32, lerp_color32, FileStore, KeyValueStore, MemoryStore, PageHost, StyleContext,
    ThemeColorManager, ThemeConfig, ThemeMode,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Coordinates theme storage and rendering.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Opens the store, builds the manager and restores the saved theme.
    ///
    /// Returns the manager and the store file, if the store is file-backed.
    pub fn start_session(config: ThemeConfig) -> (ThemeColorManager<GuiHost>, Option<PathBuf>) {
        Self::start_session_at(config, FileStore::default_path())
    }

    /// Like [`start_session`](Self::start_session) with an explicit store file.
    ///
    /// When the file cannot be used the session runs on an in-memory store
    /// and the manager reports degraded persistence.
    fn start_session_at(
        config: ThemeConfig,
        path: Option<PathBuf>,
    ) -> (ThemeColorManager<GuiHost>, Option<PathBuf>) {
        let (store, location) = match Self::open_store(path) {
            Some((store, location)) => (store, Some(location)),
            None => (Box::new(MemoryStore::new()) as Box<dyn KeyValueStore>, None),
        };
        let host = PageHost::new(store, config.palette.clone());

        let mut manager = ThemeColorManager::new(host, config);
        if location.is_none() {
            manager.mark_persistence_degraded();
        }
        manager.initialize();
        (manager, location)
    }

    /// Opens the file-backed store, `None` when there is no usable file.
    fn open_store(path: Option<PathBuf>) -> Option<(Box<dyn KeyValueStore>, PathBuf)> {
        let Some(path) = path else {
            warn!("no data directory available; theme changes will not persist");
            return None;
        };

        match FileStore::open(&path) {
            Ok(store) => {
                info!(path = %store.path().display(), "using theme store");
                let location = store.path().to_path_buf();
                Some((Box::new(store), location))
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to open theme store; theme changes will not persist");
                None
            }
        }
    }

    /// Applies the current mode and accent to the egui context.
    ///
    /// Called every frame. While a mode transition runs, background and text
    /// colors are blended from the previous mode and a repaint is requested.
    pub fn apply_current_theme(ctx: &egui::Context, manager: &ThemeColorManager<GuiHost>) {
        let style = manager.style();
        let mut visuals = base_visuals(style.theme());

        if let Some(t) = manager.transition_progress(Instant::now()) {
            let from = base_visuals(style.theme().toggled());
            visuals.panel_fill = lerp_color32(from.panel_fill, visuals.panel_fill, t);
            visuals.window_fill = lerp_color32(from.window_fill, visuals.window_fill, t);
            visuals.extreme_bg_color = lerp_color32(from.extreme_bg_color, visuals.extreme_bg_color, t);
            visuals.override_text_color = Some(lerp_color32(from.text_color(), visuals.text_color(), t));
            ctx.request_repaint();
        }

        apply_accent(style, &mut visuals);
        ctx.set_visuals(visuals);
    }
}

fn base_visuals(mode: ThemeMode) -> egui::Visuals {
    match mode {
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    }
}

/// Overrides accent-driven widget colors from the `--primary*` variables.
fn apply_accent(style: &StyleContext, visuals: &mut egui::Visuals) {
    let var = |name: &str| style.variable(name).and_then(hex_to_color32);

    if let Some(primary) = var(PRIMARY_VAR) {
        visuals.hyperlink_color = primary;
        visuals.selection.bg_fill = primary;
        visuals.widgets.active.bg_fill = primary;
    }
    if let Some(dark) = var(PRIMARY_DARK_VAR) {
        visuals.selection.stroke.color = dark;
        visuals.widgets.active.bg_stroke.color = dark;
    }
    if let Some(light) = var(PRIMARY_LIGHT_VAR) {
        visuals.widgets.hovered.bg_stroke.color = light;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitetheme::AccentShades;

    #[test]
    fn test_apply_accent_overrides_selection() {
        let mut style = StyleContext::new();
        style.apply_accent(&AccentShades::derive("#FF0000", 20).unwrap());

        let mut visuals = egui::Visuals::light();
        apply_accent(&style, &mut visuals);

        assert_eq!(visuals.selection.bg_fill, egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(visuals.selection.stroke.color, egui::Color32::from_rgb(204, 0, 0));
        assert_eq!(visuals.hyperlink_color, egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_session_uses_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let (mut manager, location) = ThemeCoordinator::start_session_at(ThemeConfig::default(), Some(path.clone()));
        assert_eq!(location.as_deref(), Some(path.as_path()));
        assert!(!manager.is_persistence_degraded());

        manager.toggle_mode();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_string(sitetheme::THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_store_file_degrades_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let (mut manager, location) = ThemeCoordinator::start_session_at(ThemeConfig::default(), Some(path.clone()));
        assert_eq!(location, None);
        assert!(manager.is_persistence_degraded());

        // The session still works in memory and the broken file is left alone.
        manager.set_accent_color("#FF0000").unwrap();
        assert_eq!(manager.toggle_color(), "#FF0000");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_missing_data_dir_degrades_persistence() {
        let (manager, location) = ThemeCoordinator::start_session_at(ThemeConfig::default(), None);
        assert_eq!(location, None);
        assert!(manager.is_persistence_degraded());
    }

    #[test]
    fn test_base_visuals_follow_mode() {
        assert!(base_visuals(ThemeMode::Dark).dark_mode);
        assert!(!base_visuals(ThemeMode::Light).dark_mode);
    }
}
