//! Theme configuration loaded from a JSON file.
//!
//! Every field is optional in the file; missing fields take their defaults.
//!
//! ```json
//! {
//!   "default_mode": "light",
//!   "default_accent": "#6366F1",
//!   "shade_percent": 20,
//!   "transition_ms": 500,
//!   "palette": [{ "name": "Indigo", "hex": "#6366F1" }]
//! }
//! ```

use crate::color::{AccentColor, DEFAULT_SHADE_PERCENT};
use crate::error::{Result, ThemeError};
use crate::mode::ThemeMode;
use crate::palette::{default_palette, PaletteColor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Accent applied when nothing has been persisted yet.
pub const DEFAULT_ACCENT: &str = "#6366F1";

/// Length of the color transition started by a mode toggle.
pub const DEFAULT_TRANSITION_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Mode used when storage holds no `theme` key.
    pub default_mode: ThemeMode,
    /// Accent used when storage holds no `primaryColor` key.
    pub default_accent: String,
    /// Percent used to derive the dark (negated) and light accent shades.
    pub shade_percent: i32,
    pub transition_ms: u64,
    pub palette: Vec<PaletteColor>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::Light,
            default_accent: DEFAULT_ACCENT.to_string(),
            shade_percent: DEFAULT_SHADE_PERCENT,
            transition_ms: DEFAULT_TRANSITION_MS,
            palette: default_palette(),
        }
    }
}

impl ThemeConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else the default location if it exists, else defaults.
    ///
    /// A config that fails to load is logged and replaced by the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let candidate = path
            .map(Path::to_path_buf)
            .or_else(|| Self::default_path().filter(|p| p.exists()));

        let Some(path) = candidate else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded theme config");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to load theme config; using defaults");
                Self::default()
            }
        }
    }

    /// Default location: `<config dir>/sitetheme/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sitetheme").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        AccentColor::parse(&self.default_accent)?;
        for option in &self.palette {
            AccentColor::parse(&option.hex)?;
        }
        if !(0..=100).contains(&self.shade_percent) {
            return Err(ThemeError::Config(format!(
                "shade_percent must be within 0..=100, got {}",
                self.shade_percent
            )));
        }
        Ok(())
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
