//! Presentation context consumed by the styling layer.
//!
//! Holds the `data-theme` attribute and the accent color variables. The
//! styling layer (egui visuals in the preview app) reads from here and never
//! from the manager's internal state.

use crate::color::AccentShades;
use crate::mode::ThemeMode;
use std::collections::BTreeMap;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const PRIMARY_VAR: &str = "--primary";
pub const PRIMARY_DARK_VAR: &str = "--primary-dark";
pub const PRIMARY_LIGHT_VAR: &str = "--primary-light";

/// Attribute and style variables of the active page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleContext {
    theme: ThemeMode,
    variables: BTreeMap<String, String>,
}

impl StyleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the `data-theme` attribute.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_theme_attribute(&mut self, mode: ThemeMode) {
        self.theme = mode;
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    /// Sets `--primary`, `--primary-dark` and `--primary-light`.
    pub fn apply_accent(&mut self, shades: &AccentShades) {
        self.set_variable(PRIMARY_VAR, &shades.base);
        self.set_variable(PRIMARY_DARK_VAR, &shades.dark);
        self.set_variable(PRIMARY_LIGHT_VAR, &shades.light);
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_accent_sets_all_variables() {
        let mut style = StyleContext::new();
        let shades = AccentShades::derive("#808080", 50).unwrap();
        style.apply_accent(&shades);

        assert_eq!(style.variable(PRIMARY_VAR), Some("#808080"));
        assert_eq!(style.variable(PRIMARY_DARK_VAR), Some("#404040"));
        assert_eq!(style.variable(PRIMARY_LIGHT_VAR), Some("#C0C0C0"));
        assert_eq!(style.variables().count(), 3);
    }

    #[test]
    fn test_theme_attribute_defaults_to_light() {
        let mut style = StyleContext::new();
        assert_eq!(style.theme(), ThemeMode::Light);
        style.set_theme_attribute(ThemeMode::Dark);
        assert_eq!(style.theme().as_str(), "dark");
    }
}
