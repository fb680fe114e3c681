//! Fixed accent color options offered by the color picker panel.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A named accent color option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    /// `#RRGGBB` value applied when the option is picked.
    pub hex: String,
}

impl PaletteColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

static DEFAULT_PALETTE: Lazy<Vec<PaletteColor>> = Lazy::new(|| {
    vec![
        PaletteColor::new("Indigo", "#6366F1"),
        PaletteColor::new("Blue", "#3B82F6"),
        PaletteColor::new("Emerald", "#10B981"),
        PaletteColor::new("Amber", "#F59E0B"),
        PaletteColor::new("Red", "#EF4444"),
        PaletteColor::new("Pink", "#EC4899"),
        PaletteColor::new("Violet", "#8B5CF6"),
        PaletteColor::new("Teal", "#14B8A6"),
    ]
});

/// The built-in palette.
pub fn default_palette() -> Vec<PaletteColor> {
    DEFAULT_PALETTE.clone()
}

/// Index of the palette option whose color equals `hex`, ignoring case.
pub fn find_option(palette: &[PaletteColor], hex: &str) -> Option<usize> {
    palette
        .iter()
        .position(|option| option.hex.eq_ignore_ascii_case(hex))
}
