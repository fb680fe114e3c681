//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the theme preview:
//! - Header panel (mode toggle, color picker button)
//! - Color picker panel (palette swatches, custom color input)
//! - Preview panel (sample page styled from the accent variables)
//! - Status bar (store location, persistence state)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod color_picker;
pub mod preview;
pub mod status_bar;
pub mod panel_manager;
