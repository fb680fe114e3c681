//! Window layout preference persistence.
//!
//! Layout preferences (such as whether the color picker is open) belong to the
//! preview window, not to the site theme, so they live in eframe's own storage
//! rather than in the theme store. Values are stored as JSON strings.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Loads and saves serializable layout settings through eframe storage.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `default` when absent or unreadable.
    ///
    /// # Examples
    /// ```ignore
    /// let open: bool = SettingsCoordinator::load_setting_or(cc.storage, "color_picker_open", false);
    /// ```
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        let Some(json_str) = storage.and_then(|s| s.get_string(key)) else {
            return default;
        };

        match serde_json::from_str(&json_str) {
            Ok(value) => value,
            Err(err) => {
                debug!(key, %err, "discarding unreadable layout setting");
                default
            }
        }
    }

    /// Saves a setting and flushes the storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => debug!(key, %err, "failed to serialize layout setting"),
        }
    }
}
