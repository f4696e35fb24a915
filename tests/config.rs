use getitdone::config::Config;
use getitdone::constants::DEFAULT_BASE_URL;
use getitdone::theme::Theme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.ui.theme, Theme::Dark);
    assert!(!config.input.allow_empty);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty base URL should fail
    config.api.base_url = String::new();
    assert!(config.validate().is_err());

    // Non-HTTP base URL should fail
    config.api.base_url = "ftp://example.com".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid timeouts
    config.api.base_url = "http://localhost:4000/api".to_string();
    config.api.timeout_seconds = 0;
    assert!(config.validate().is_err());

    config.api.timeout_seconds = 2000;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains(&format!("base_url = \"{}\"", DEFAULT_BASE_URL)));
    assert!(toml_str.contains("timeout_seconds = 30"));
    assert!(toml_str.contains("theme = \"dark\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
theme = "light"

[input]
allow_empty = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.theme, Theme::Light);
    assert!(config.input.allow_empty);

    // Check that unspecified values use defaults
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.timeout_seconds, 30);
    assert!(!config.logging.enabled);
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.api.timeout_seconds, default_config.api.timeout_seconds);
    assert_eq!(config.ui.theme, default_config.ui.theme);
    assert_eq!(config.input.allow_empty, default_config.input.allow_empty);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\ntimeout_seconds = 0\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_generate_config_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nested").join("config.toml");

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content and parses back
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# getitdone Configuration File"));

    let reloaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(reloaded.api.base_url, DEFAULT_BASE_URL);
}
