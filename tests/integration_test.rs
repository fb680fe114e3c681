use sitetheme::{
    get_shade, FileStore, KeyValueStore, MemoryStore, PageHost, SelectionSource, ThemeColorManager,
    ThemeConfig, ThemeError, ThemeMode, PRIMARY_COLOR_KEY, PRIMARY_DARK_COLOR_KEY,
    PRIMARY_LIGHT_COLOR_KEY, THEME_KEY,
};
use sitetheme::{ColorPanel, ThemeHost, ToggleControl};
use anyhow::Result;

fn session<S: KeyValueStore>(store: S) -> ThemeColorManager<PageHost<S>> {
    let config = ThemeConfig::default();
    let host = PageHost::new(store, config.palette.clone());
    let mut manager = ThemeColorManager::new(host, config);
    manager.initialize();
    manager
}

fn stored<S: KeyValueStore>(manager: &ThemeColorManager<PageHost<S>>, key: &str) -> Option<String> {
    manager.host().store.get_string(key).unwrap()
}

#[test]
fn test_first_visit_scenario() {
    let mut manager = session(MemoryStore::new());
    assert_eq!(manager.mode(), ThemeMode::Light);

    manager.set_accent_color("#FF0000").unwrap();
    assert_eq!(stored(&manager, PRIMARY_COLOR_KEY).as_deref(), Some("#FF0000"));
    assert_eq!(stored(&manager, PRIMARY_DARK_COLOR_KEY).as_deref(), Some("#CC0000"));
    // Red is already saturated, so lightening clamps to the same value
    assert_eq!(stored(&manager, PRIMARY_LIGHT_COLOR_KEY).as_deref(), Some("#FF0000"));

    manager.toggle_mode();
    assert_eq!(stored(&manager, THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(stored(&manager, PRIMARY_COLOR_KEY).as_deref(), Some("#FF0000"));
    assert_eq!(stored(&manager, PRIMARY_DARK_COLOR_KEY).as_deref(), Some("#CC0000"));
    assert_eq!(stored(&manager, PRIMARY_LIGHT_COLOR_KEY).as_deref(), Some("#FF0000"));

    let toggle = manager.host().toggle.as_ref().unwrap();
    assert_eq!(toggle.mode(), ThemeMode::Dark);
    assert_eq!(toggle.backing_hex(), Some("#CC0000"));
}

#[test]
fn test_persisted_accent_matches_shading_function() {
    for color in ["#3366CC", "#10b981", "#000000", "#FFFFFF", "#7F7F7F"] {
        let mut manager = session(MemoryStore::new());
        manager.set_accent_color(color).unwrap();

        assert_eq!(stored(&manager, PRIMARY_COLOR_KEY).as_deref(), Some(color));
        assert_eq!(stored(&manager, PRIMARY_DARK_COLOR_KEY), Some(get_shade(color, -20).unwrap()));
        assert_eq!(stored(&manager, PRIMARY_LIGHT_COLOR_KEY), Some(get_shade(color, 20).unwrap()));
    }
}

#[test]
fn test_toggle_twice_restores_mode() {
    let mut manager = session(MemoryStore::new());
    let original = manager.mode();
    manager.toggle_mode();
    manager.toggle_mode();
    assert_eq!(manager.mode(), original);
    assert_eq!(stored(&manager, THEME_KEY).as_deref(), Some(original.as_str()));
}

#[test]
fn test_state_survives_reload_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storage.json");

    {
        let mut manager = session(FileStore::open(&path)?);
        manager.toggle_mode();
        manager.select_palette_option(1)?;
    }

    // Next page load
    let manager = session(FileStore::open(&path)?);
    let expected = manager.config().palette[1].hex.clone();

    assert_eq!(manager.mode(), ThemeMode::Dark);
    assert_eq!(manager.accent().base, expected);
    assert_eq!(manager.style().variable("--primary"), Some(expected.as_str()));
    assert_eq!(manager.style().theme().as_str(), "dark");

    let picker = manager.host().picker.as_ref().unwrap();
    assert_eq!(picker.active(), Some(1));
    assert_eq!(picker.custom_input(), expected);

    let toggle = manager.host().toggle.as_ref().unwrap();
    assert_eq!(toggle.backing_hex(), Some(manager.accent().dark.as_str()));
    Ok(())
}

#[test]
fn test_invalid_input_keeps_previous_state() {
    let mut manager = session(MemoryStore::new());
    manager.set_accent_color("#3366CC").unwrap();

    for bad in ["3366CC", "#3366C", "#GGGGGG", "rgb(1,2,3)", ""] {
        let err = manager.set_accent_color(bad).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColorFormat(_)), "{bad:?} gave {err}");
    }

    assert_eq!(manager.accent().base, "#3366CC");
    assert_eq!(stored(&manager, PRIMARY_COLOR_KEY).as_deref(), Some("#3366CC"));
}

#[test]
fn test_headless_host_works_without_controls() {
    let config = ThemeConfig::default();
    let mut manager = ThemeColorManager::new(PageHost::headless(MemoryStore::new()), config);
    manager.initialize();
    manager.toggle_mode();
    manager.set_accent_color("#808080").unwrap();

    assert_eq!(manager.toggle_color(), "#666666");
    assert_eq!(stored(&manager, THEME_KEY).as_deref(), Some("dark"));
}

/// Host built from independent fakes, the way a page without a real window would wire it.
struct CountingHost {
    store: MemoryStore,
    refreshes: RefreshCounter,
    selections: SelectionLog,
}

struct RefreshCounter(usize);

struct SelectionLog(Vec<SelectionSource>);

impl ToggleControl for RefreshCounter {
    fn refresh(&mut self, _mode: ThemeMode, _backing_hex: &str) {
        self.0 += 1;
    }
}

impl ColorPanel for SelectionLog {
    fn show_selection(&mut self, _hex: &str, source: SelectionSource) {
        self.0.push(source);
    }
}

impl ThemeHost for CountingHost {
    fn store(&mut self) -> &mut dyn KeyValueStore {
        &mut self.store
    }

    fn toggle_control(&mut self) -> Option<&mut dyn ToggleControl> {
        Some(&mut self.refreshes)
    }

    fn color_panel(&mut self) -> Option<&mut dyn ColorPanel> {
        Some(&mut self.selections)
    }
}

#[test]
fn test_every_mutation_notifies_once() {
    let host = CountingHost {
        store: MemoryStore::new(),
        refreshes: RefreshCounter(0),
        selections: SelectionLog(Vec::new()),
    };
    let mut manager = ThemeColorManager::new(host, ThemeConfig::default());

    manager.initialize();
    manager.toggle_mode();
    manager.set_accent_color("#123456").unwrap();
    manager.select_palette_option(0).unwrap();
    let _ = manager.set_accent_color("nope");

    assert_eq!(manager.host().refreshes.0, 4);
    assert_eq!(
        manager.host().selections.0,
        vec![SelectionSource::Custom, SelectionSource::Palette]
    );
}
