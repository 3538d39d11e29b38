//! Integration tests for configuration management

use gradebook::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.exports_dir.is_empty(),
        "Default exports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_dir = "./records"
exports_dir = "./exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./records");
    assert_eq!(config.paths.exports_dir, "./exports");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.paths.data_dir, ""); // Default empty
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADEBOOK/test.log"

[paths]
data_dir = "$GRADEBOOK/records"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to the actual path
    assert!(config.logging.file.contains("gradebook"));
    assert!(!config.logging.file.contains("$GRADEBOOK"));
    assert!(config.paths.data_dir.contains("gradebook"));
    assert!(!config.paths.data_dir.contains("$GRADEBOOK"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());
    assert!(config.get("nonsense").is_none());

    // Test set
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("data_dir", "/tmp/records")
        .expect("Failed to set data_dir");
    assert_eq!(config.paths.data_dir, "/tmp/records");

    // Invalid values are rejected
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("nonsense", "x").is_err());
}

#[test]
fn test_config_unset_restores_default() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config
        .unset("level", &defaults)
        .expect("Failed to unset level");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert!(config.unset("nonsense", &defaults).is_err());
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        data_dir: Some("/records".to_string()),
        ..Default::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.data_dir, "/records");
    // Untouched fields keep their values
    assert!(!config.paths.exports_dir.is_empty());
}

#[test]
fn test_merge_defaults_fills_empty_fields() {
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"

[paths]
"#,
    )
    .expect("Failed to parse TOML");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed);
    assert_eq!(config.logging.level, "error"); // kept
    assert_eq!(config.paths.data_dir, defaults.paths.data_dir); // filled

    // A second merge changes nothing further
    let changed_again = config.merge_defaults(&defaults);
    assert!(!changed_again);
}
