//! Application-level modules for the theme preview.
//!
//! This module contains the application state and the coordinators that
//! connect UI interactions to the theme manager.

mod app_state;
mod application_coordinator;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::{AppState, GuiHost};
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;
