// Unit tests for configuration defaults, validation, and file handling

use super::*;
use tempfile::TempDir;

#[test]
fn default_config_matches_drag_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.verbosity, None);
    assert_eq!(config.list.item_count, 10_000);
    assert_eq!(config.list.item_height, 1.0);
    assert_eq!(config.list.wheel_step, 3);
    assert_eq!(config.drag.tolerance(), DragTolerance::default());
}

#[test]
fn partial_toml_fills_in_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
        verbosity = "verbose"

        [list]
        item_count = 250
        "#,
    )
    .unwrap();

    assert_eq!(config.get_verbosity(), VerbosityLevel::Verbose);
    assert_eq!(config.list.item_count, 250);
    assert_eq!(config.list.item_height, 1.0);
    assert_eq!(config.drag, DragConfig::default());
}

#[test]
fn unknown_verbosity_falls_back_to_normal() {
    let config = AppConfig {
        verbosity: Some("chatty".to_string()),
        ..AppConfig::default()
    };

    assert_eq!(config.get_verbosity(), VerbosityLevel::Normal);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "verbosity"
    ));
}

#[test]
fn validate_rejects_non_positive_item_height() {
    let mut config = AppConfig::default();
    config.list.item_height = 0.0;

    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_items_shorter_than_a_row() {
    let mut config = AppConfig::default();
    config.list.item_height = 0.5;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "list.item_height"
    ));
    assert!(config.set_value("list.item_height", "1").is_ok());
}

#[test]
fn validate_rejects_negative_tolerance() {
    let mut config = AppConfig::default();
    config.drag.horizontal_tolerance = -1.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "drag.horizontal_tolerance"
    ));
}

#[test]
fn set_value_updates_dotted_keys() {
    let mut config = AppConfig::default();

    config.set_value("list.item_count", "42").unwrap();
    config.set_value("list.item_height", "2.5").unwrap();
    config.set_value("drag.vertical_tolerance", "4").unwrap();
    config.set_value("verbosity", "debug").unwrap();

    assert_eq!(config.list.item_count, 42);
    assert_eq!(config.list.item_height, 2.5);
    assert_eq!(config.drag.vertical_tolerance, 4.0);
    assert_eq!(config.get_verbosity(), VerbosityLevel::Debug);
}

#[test]
fn set_value_rejects_bad_input_without_changing_config() {
    let mut config = AppConfig::default();

    assert!(matches!(
        config.set_value("list.item_count", "many"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        config.set_value("list.item_height", "-1"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        config.set_value("list.colour", "red"),
        Err(ConfigError::UnknownConfigKey { .. })
    ));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn every_listed_key_is_settable() {
    for key in CONFIG_KEYS {
        let value = if *key == "verbosity" { "quiet" } else { "5" };
        let mut config = AppConfig::default();
        assert!(config.set_value(key, value).is_ok(), "key {key}");
    }
}

#[test]
fn load_from_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(config, AppConfig::default());
    assert!(path.exists());
}

#[test]
fn save_and_read_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = AppConfig::default();
    config.set_verbosity(VerbosityLevel::Quiet);
    config.list.wheel_step = 7;

    config.save_to(&path).unwrap();
    let loaded = AppConfig::read(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn read_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        AppConfig::read(&path),
        Err(ConfigError::NotFound { .. })
    ));
}

#[test]
fn read_reports_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[list\nitem_count = ").unwrap();

    assert!(matches!(
        AppConfig::read(&path),
        Err(ConfigError::InvalidToml(_))
    ));
}
