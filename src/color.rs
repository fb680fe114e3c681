//! Accent color parsing and shade derivation.
//!
//! Colors travel through the system as `#RRGGBB` strings (that is what the
//! durable store and the style variables hold). [`AccentColor`] is the parsed
//! form used for shading and for conversion into egui colors.
//!
//! # Examples
//!
//! ```
//! use sitetheme::color::get_shade;
//!
//! assert_eq!(get_shade("#FFFFFF", -20).unwrap(), "#CCCCCC");
//! assert_eq!(get_shade("#808080", 50).unwrap(), "#C0C0C0");
//! ```

use crate::error::{Result, ThemeError};
use egui::Color32;
use std::fmt;
use std::str::FromStr;

/// Percent applied (negated) to derive the dark accent and (as is) the light accent.
pub const DEFAULT_SHADE_PERCENT: i32 = 20;

/// An RGB accent color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor {
    r: u8,
    g: u8,
    b: u8,
}

impl AccentColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` string. Both hex digit cases are accepted.
    pub fn parse(hex: &str) -> Result<Self> {
        let invalid = || ThemeError::InvalidColorFormat(hex.to_string());

        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// Canonical uppercase `#RRGGBB` text.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Scales every channel by `(100 + percent) / 100`.
    ///
    /// Negative percent darkens, positive lightens. Scaling truncates toward
    /// zero before clamping into `0..=255`, so the result matches the shades
    /// the site has always produced for percent in `-100..=100`.
    pub fn shade(&self, percent: i32) -> Self {
        Self {
            r: scale_channel(self.r, percent),
            g: scale_channel(self.g, percent),
            b: scale_channel(self.b, percent),
        }
    }

    pub fn to_color32(&self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }
}

impl FromStr for AccentColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn scale_channel(channel: u8, percent: i32) -> u8 {
    // Integer division truncates toward zero; the value is exact before that.
    let scaled = i64::from(channel) * (100 + i64::from(percent)) / 100;
    scaled.clamp(0, 255) as u8
}

/// Returns `hex` darkened (negative `percent`) or lightened (positive `percent`).
///
/// Output is always uppercase `#RRGGBB`.
pub fn get_shade(hex: &str, percent: i32) -> Result<String> {
    Ok(AccentColor::parse(hex)?.shade(percent).to_hex())
}

/// The accent color together with its derived dark and light shades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentShades {
    /// Accent exactly as the user supplied it.
    pub base: String,
    pub dark: String,
    pub light: String,
}

impl AccentShades {
    /// Derives the dark (`-percent`) and light (`+percent`) shades of `color`.
    ///
    /// `base` is kept verbatim so the stored accent reads back exactly as set.
    pub fn new(base: impl Into<String>, color: AccentColor, percent: i32) -> Self {
        Self {
            base: base.into(),
            dark: color.shade(-percent).to_hex(),
            light: color.shade(percent).to_hex(),
        }
    }

    /// Parses `hex` and derives its shades.
    pub fn derive(hex: &str, percent: i32) -> Result<Self> {
        let color = AccentColor::parse(hex)?;
        Ok(Self::new(hex, color, percent))
    }
}

/// Converts a `#RRGGBB` string to Color32, or `None` when malformed.
pub fn hex_to_color32(hex: &str) -> Option<Color32> {
    AccentColor::parse(hex).ok().map(|c| c.to_color32())
}

/// Linear blend between two colors, `t` clamped into `0.0..=1.0`.
pub fn lerp_color32(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
        mix(from.a(), to.a()),
    )
}
