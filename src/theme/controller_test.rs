use super::*;
use crate::theme::{MemoryStore, MemorySurface};

type Controller = ThemeController<MemoryStore, MemorySurface>;

fn fresh() -> Controller {
    ThemeController::initialize(ThemeConfig::default(), MemoryStore::new(), MemorySurface::new()).unwrap()
}

fn with_stored(value: &str) -> Controller {
    ThemeController::initialize(
        ThemeConfig::default(),
        MemoryStore::with_entry("theme", value),
        MemorySurface::new(),
    )
    .unwrap()
}

fn theme_classes(controller: &Controller) -> Vec<&str> {
    controller
        .surface()
        .classes()
        .filter(|c| Theme::ALL.iter().any(|t| t.class_name() == *c))
        .collect()
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_stored_value_defaults_to_light() {
    let controller = fresh();
    assert_eq!(controller.active(), Theme::Light);
    assert_eq!(controller.surface().indicator(), "🌙");
    assert_eq!(theme_classes(&controller), vec!["light-mode"]);
}

#[test]
fn initialize_leaves_storage_unwritten() {
    let controller = fresh();
    assert!(controller.store().is_empty());
}

#[test]
fn initialize_with_stored_dark_applies_dark() {
    let controller = with_stored("dark-mode");
    assert_eq!(controller.active(), Theme::Dark);
    assert_eq!(controller.indicator(), "☀️");
    assert_eq!(controller.surface().indicator(), "☀️");
    assert_eq!(theme_classes(&controller), vec!["dark-mode"]);
}

#[test]
fn initialize_with_stored_light_applies_light() {
    let controller = with_stored("light-mode");
    assert_eq!(controller.active(), Theme::Light);
    assert_eq!(controller.surface().indicator(), "🌙");
}

#[test]
fn initialize_ignores_unrecognised_stored_value() {
    let controller = with_stored("sepia-mode");
    assert_eq!(controller.active(), Theme::Light);
    assert_eq!(theme_classes(&controller), vec!["light-mode"]);
    assert_eq!(controller.store().get("theme"), Some("sepia-mode"));
}

#[test]
fn initialize_replaces_stale_theme_class() {
    let surface = MemorySurface::with_classes(["dark-mode", "page"]);
    let controller = ThemeController::initialize(ThemeConfig::default(), MemoryStore::new(), surface).unwrap();
    assert_eq!(theme_classes(&controller), vec!["light-mode"]);
    assert!(controller.surface().has_class("page"));
}

#[test]
fn initialize_honours_configured_key_and_default() {
    let config = ThemeConfig {
        storage_key: "site-theme".to_owned(),
        default_theme: Theme::Dark,
        ..ThemeConfig::default()
    };
    let store = MemoryStore::with_entry("theme", "light-mode");
    let controller = ThemeController::initialize(config, store, MemorySurface::new()).unwrap();
    assert_eq!(controller.active(), Theme::Dark);
}

#[test]
fn system_preference_is_ignored_unless_enabled() {
    let surface = MemorySurface::new().preferring_dark();
    let controller = ThemeController::initialize(ThemeConfig::default(), MemoryStore::new(), surface).unwrap();
    assert_eq!(controller.active(), Theme::Light);
}

#[test]
fn system_preference_applies_when_nothing_is_stored() {
    let config = ThemeConfig {
        follow_system_preference: true,
        ..ThemeConfig::default()
    };
    let surface = MemorySurface::new().preferring_dark();
    let controller = ThemeController::initialize(config.clone(), MemoryStore::new(), surface.clone()).unwrap();
    assert_eq!(controller.active(), Theme::Dark);

    let stored = MemoryStore::with_entry("theme", "light-mode");
    let controller = ThemeController::initialize(config, stored, surface).unwrap();
    assert_eq!(controller.active(), Theme::Light);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_light_stores_dark() {
    let mut controller = fresh();
    assert_eq!(controller.toggle().unwrap(), Theme::Dark);
    assert_eq!(controller.active(), Theme::Dark);
    assert_eq!(controller.surface().indicator(), "☀️");
    assert_eq!(controller.store().get("theme"), Some("dark-mode"));
    assert_eq!(theme_classes(&controller), vec!["dark-mode"]);
}

#[test]
fn toggle_from_dark_stores_light() {
    let mut controller = with_stored("dark-mode");
    assert_eq!(controller.toggle().unwrap(), Theme::Light);
    assert_eq!(controller.surface().indicator(), "🌙");
    assert_eq!(controller.store().get("theme"), Some("light-mode"));
    assert_eq!(theme_classes(&controller), vec!["light-mode"]);
}

#[test]
fn toggle_twice_is_identity() {
    for stored in ["light-mode", "dark-mode"] {
        let mut controller = with_stored(stored);
        let start = controller.active();
        controller.toggle().unwrap();
        controller.toggle().unwrap();
        assert_eq!(controller.active(), start);
        assert_eq!(controller.store().get("theme"), Some(stored));
    }
}

#[test]
fn exactly_one_theme_class_across_many_toggles() {
    let mut controller = fresh();
    for _ in 0..5 {
        controller.toggle().unwrap();
        let classes = theme_classes(&controller);
        assert_eq!(classes, vec![controller.active().class_name()]);
        assert_eq!(controller.store().get("theme"), Some(controller.active().class_name()));
    }
}

// =============================================================
// Scenario
// =============================================================

#[test]
fn fresh_load_toggle_reload_toggle() {
    let mut controller = fresh();
    assert_eq!(controller.active(), Theme::Light);
    assert_eq!(controller.surface().indicator(), "🌙");

    controller.toggle().unwrap();
    assert_eq!(controller.active(), Theme::Dark);
    assert_eq!(controller.surface().indicator(), "☀️");
    assert_eq!(controller.store().get("theme"), Some("dark-mode"));

    // Reload: same store, new page.
    let store = controller.store().clone();
    let mut controller = ThemeController::initialize(ThemeConfig::default(), store, MemorySurface::new()).unwrap();
    assert_eq!(controller.active(), Theme::Dark);
    assert_eq!(controller.surface().indicator(), "☀️");

    controller.toggle().unwrap();
    assert_eq!(controller.active(), Theme::Light);
    assert_eq!(controller.surface().indicator(), "🌙");
    assert_eq!(controller.store().get("theme"), Some("light-mode"));
}

// =============================================================
// Adapter failures
// =============================================================

#[derive(Debug)]
struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }
}

#[derive(Default)]
struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Ok(None)
    }

    fn save(&mut self, key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Storage(format!("quota exceeded writing {key}")))
    }
}

#[derive(Debug)]
struct DetachedSurface;

impl ThemeSurface for DetachedSurface {
    fn has_class(&self, _class: &str) -> bool {
        false
    }

    fn add_class(&mut self, _class: &str) -> Result<(), ThemeError> {
        Err(ThemeError::ElementMissing("body".to_owned()))
    }

    fn remove_class(&mut self, _class: &str) -> Result<(), ThemeError> {
        Err(ThemeError::ElementMissing("body".to_owned()))
    }

    fn set_indicator(&mut self, _glyph: &str) -> Result<(), ThemeError> {
        Err(ThemeError::ElementMissing("theme-toggle-icon".to_owned()))
    }
}

#[test]
fn initialize_propagates_storage_failure() {
    let err = ThemeController::initialize(ThemeConfig::default(), UnavailableStore, MemorySurface::new()).unwrap_err();
    assert!(matches!(err, ThemeError::StorageUnavailable));
}

#[test]
fn initialize_propagates_surface_failure() {
    let err = ThemeController::initialize(ThemeConfig::default(), MemoryStore::new(), DetachedSurface).unwrap_err();
    assert!(matches!(err, ThemeError::ElementMissing(ref id) if id == "body"));
}

#[test]
fn toggle_propagates_write_failure_after_updating_surface() {
    let mut controller =
        ThemeController::initialize(ThemeConfig::default(), ReadOnlyStore, MemorySurface::new()).unwrap();
    let err = controller.toggle().unwrap_err();
    assert!(matches!(err, ThemeError::Storage(_)));
    assert_eq!(controller.active(), Theme::Dark);
    assert!(controller.surface().has_class("dark-mode"));
    assert!(!controller.surface().has_class("light-mode"));
}

// =============================================================
// Root container read on toggle
// =============================================================

#[test]
fn toggle_with_no_theme_class_falls_back_to_light() {
    let mut controller = with_stored("dark-mode");
    // Another script stripped the class from the root container.
    let mut surface = controller.surface().clone();
    surface.remove_class("dark-mode").unwrap();
    controller.surface = surface;

    assert_eq!(controller.toggle().unwrap(), Theme::Light);
    assert_eq!(theme_classes(&controller), vec!["light-mode"]);
}
