//! Theme mode and accent color state for a page session.
//!
//! [`ThemeColorManager`] is the single source of truth for the light/dark
//! mode and the accent color. Every mutation follows the same path:
//! update in-memory state, update the [`StyleContext`], persist to the
//! host's store, then notify the toggle control.
//!
//! Storage failures never abort a mutation. They are logged and the manager
//! keeps running on in-memory state for the rest of the session (see
//! [`ThemeColorManager::is_persistence_degraded`]).
//!
//! # Examples
//!
//! ```
//! use sitetheme::{MemoryStore, PageHost, ThemeColorManager, ThemeConfig, ThemeMode};
//!
//! let config = ThemeConfig::default();
//! let host = PageHost::new(MemoryStore::new(), config.palette.clone());
//! let mut manager = ThemeColorManager::new(host, config);
//!
//! manager.initialize();
//! manager.set_accent_color("#FF0000").unwrap();
//! assert_eq!(manager.toggle_mode(), ThemeMode::Dark);
//! assert_eq!(manager.toggle_color(), "#CC0000");
//! ```

use crate::color::{AccentColor, AccentShades};
use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::host::{SelectionSource, ThemeHost};
use crate::mode::ThemeMode;
use crate::presentation::StyleContext;
use crate::storage::{PRIMARY_COLOR_KEY, PRIMARY_DARK_COLOR_KEY, PRIMARY_LIGHT_COLOR_KEY, THEME_KEY};
use crate::transition::ThemeTransition;
use std::time::Instant;
use tracing::{debug, info, warn};

const FALLBACK_ACCENT: AccentColor = AccentColor::from_rgb(0x63, 0x66, 0xF1);

/// Owns theme mode and accent color for one page session.
pub struct ThemeColorManager<H: ThemeHost> {
    host: H,
    config: ThemeConfig,
    mode: ThemeMode,
    accent: AccentShades,
    style: StyleContext,
    transition: Option<ThemeTransition>,
    persistence_degraded: bool,
}

impl<H: ThemeHost> std::fmt::Debug for ThemeColorManager<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeColorManager")
            .field("mode", &self.mode)
            .field("accent", &self.accent)
            .field("persistence_degraded", &self.persistence_degraded)
            .finish_non_exhaustive()
    }
}

impl<H: ThemeHost> ThemeColorManager<H> {
    /// Creates a manager in the configured default state.
    ///
    /// Nothing is read from storage until [`initialize`](Self::initialize).
    /// Missing collaborators are reported here, once.
    pub fn new(mut host: H, config: ThemeConfig) -> Self {
        if host.toggle_control().is_none() {
            warn!("no theme toggle control attached; change notifications are disabled");
        }
        if host.color_panel().is_none() {
            debug!("no color panel attached; accent selections will not be reflected");
        }

        let accent = match AccentColor::parse(&config.default_accent) {
            Ok(color) => AccentShades::new(config.default_accent.clone(), color, config.shade_percent),
            Err(err) => {
                warn!(%err, "default accent is malformed; using built-in accent");
                AccentShades::new(FALLBACK_ACCENT.to_hex(), FALLBACK_ACCENT, config.shade_percent)
            }
        };

        let mut style = StyleContext::new();
        style.set_theme_attribute(config.default_mode);
        style.apply_accent(&accent);

        Self {
            host,
            mode: config.default_mode,
            config,
            accent,
            style,
            transition: None,
            persistence_degraded: false,
        }
    }

    /// Restores mode and accent from storage and applies them.
    ///
    /// Safe to call more than once; each call re-reads storage.
    pub fn initialize(&mut self) {
        self.mode = match self.read_key(THEME_KEY) {
            Some(value) => ThemeMode::from_storage(&value).unwrap_or_else(|| {
                warn!(value = %value, "unrecognized stored theme; using default");
                self.config.default_mode
            }),
            None => self.config.default_mode,
        };

        if let Some(saved) = self.read_key(PRIMARY_COLOR_KEY) {
            match AccentColor::parse(&saved) {
                Ok(color) => {
                    let shades = AccentShades::new(saved, color, self.config.shade_percent);
                    self.check_stored_shades(&shades);
                    if let Some(panel) = self.host.color_panel() {
                        panel.show_selection(&shades.base, SelectionSource::Restored);
                    }
                    self.accent = shades;
                }
                Err(err) => warn!(%err, "ignoring stored accent color"),
            }
        }

        self.style.set_theme_attribute(self.mode);
        self.style.apply_accent(&self.accent);
        self.notify();

        info!(mode = %self.mode, accent = %self.accent.base, "theme initialized");
    }

    /// Flips between light and dark, persists the new mode, and starts the
    /// color transition window. Returns the new mode.
    pub fn toggle_mode(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.style.set_theme_attribute(self.mode);
        self.transition = Some(ThemeTransition::start(
            Instant::now(),
            self.config.transition_duration(),
        ));

        self.persist(THEME_KEY, self.mode.as_str());
        self.notify();

        debug!(mode = %self.mode, "theme mode toggled");
        self.mode
    }

    /// Sets the accent from free-form input.
    ///
    /// `hex` must be `#RRGGBB`; anything else is rejected with
    /// [`ThemeError::InvalidColorFormat`] and leaves the state untouched.
    pub fn set_accent_color(&mut self, hex: &str) -> Result<()> {
        self.apply_accent(hex, SelectionSource::Custom)
    }

    /// Sets the accent to palette option `index`.
    pub fn select_palette_option(&mut self, index: usize) -> Result<()> {
        let hex = self
            .config
            .palette
            .get(index)
            .map(|option| option.hex.clone())
            .ok_or(ThemeError::UnknownPaletteOption(index))?;
        self.apply_accent(&hex, SelectionSource::Palette)
    }

    fn apply_accent(&mut self, hex: &str, source: SelectionSource) -> Result<()> {
        let shades = AccentShades::derive(hex, self.config.shade_percent)?;

        self.style.apply_accent(&shades);
        self.persist(PRIMARY_COLOR_KEY, &shades.base);
        self.persist(PRIMARY_DARK_COLOR_KEY, &shades.dark);
        self.persist(PRIMARY_LIGHT_COLOR_KEY, &shades.light);

        if let Some(panel) = self.host.color_panel() {
            panel.show_selection(&shades.base, source);
        }

        debug!(accent = %shades.base, dark = %shades.dark, light = %shades.light, ?source, "accent color set");
        self.accent = shades;
        self.notify();
        Ok(())
    }

    /// Color the toggle button is drawn with: the dark accent in dark mode,
    /// the base accent otherwise.
    pub fn toggle_color(&self) -> &str {
        match self.mode {
            ThemeMode::Dark => &self.accent.dark,
            ThemeMode::Light => &self.accent.base,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn accent(&self) -> &AccentShades {
        &self.accent
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// True once any storage read or write has failed this session.
    pub fn is_persistence_degraded(&self) -> bool {
        self.persistence_degraded
    }

    /// Records that durable storage is unusable for this session, e.g. when
    /// the host had to fall back to an in-memory store.
    pub fn mark_persistence_degraded(&mut self) {
        self.persistence_degraded = true;
    }

    /// Progress of the running mode transition, `None` when idle.
    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        self.transition.and_then(|t| t.progress(now))
    }

    fn notify(&mut self) {
        let mode = self.mode;
        let backing = self.toggle_color().to_string();
        if let Some(toggle) = self.host.toggle_control() {
            toggle.refresh(mode, &backing);
        }
    }

    fn read_key(&mut self, key: &str) -> Option<String> {
        match self.host.store().get_string(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "failed to read theme state; using defaults");
                self.persistence_degraded = true;
                None
            }
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.host.store().set_string(key, value) {
            warn!(key, %err, "failed to persist theme state; keeping it for this session only");
            self.persistence_degraded = true;
        }
    }

    fn check_stored_shades(&mut self, shades: &AccentShades) {
        let stored_dark = self.read_key(PRIMARY_DARK_COLOR_KEY);
        let stored_light = self.read_key(PRIMARY_LIGHT_COLOR_KEY);
        let matches = |stored: &Option<String>, derived: &str| {
            stored.as_deref().map_or(true, |s| s.eq_ignore_ascii_case(derived))
        };
        if !matches(&stored_dark, &shades.dark) || !matches(&stored_light, &shades.light) {
            debug!(
                ?stored_dark,
                ?stored_light,
                "stored accent shades differ from derived shades; using derived"
            );
        }
    }
}
