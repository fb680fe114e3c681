pub mod error;
pub mod color;
pub mod mode;
pub mod palette;
pub mod config;
pub mod storage;
pub mod presentation;
pub mod host;
pub mod transition;
pub mod manager;

// Export errors
pub use error::{Result, ThemeError};

// Export color math
pub use color::{
    AccentColor, AccentShades, get_shade,
    hex_to_color32, lerp_color32, DEFAULT_SHADE_PERCENT
};

// Export theme state
pub use mode::ThemeMode;
pub use palette::{PaletteColor, default_palette, find_option};
pub use config::ThemeConfig;
pub use presentation::StyleContext;
pub use transition::ThemeTransition;
pub use manager::ThemeColorManager;

// Export storage backends and keys
pub use storage::{
    KeyValueStore, MemoryStore, FileStore,
    THEME_KEY, PRIMARY_COLOR_KEY, PRIMARY_DARK_COLOR_KEY, PRIMARY_LIGHT_COLOR_KEY
};

// Export host collaborators
pub use host::{
    ThemeHost, ToggleControl, ColorPanel, SelectionSource,
    ToggleButtonState, ColorPickerState, PageHost
};
