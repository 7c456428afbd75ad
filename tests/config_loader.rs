use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use burner_phone::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.phone.brand, "CELLTOWA");
    assert_eq!(config.phone.typewriter_interval_ms, 30);
    assert_eq!(config.phone.typewriter_interval(), Duration::from_millis(30));
    assert_eq!(config.host.bind_addr, "127.0.0.1:30125");
    assert!(config.host.callback_url.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("burner-phone/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = write_config(
        r#"
[phone]
brand = "NOKLA"
typewriter_interval_ms = 15

[host]
bind_addr = "0.0.0.0:4000"
callback_url = "http://127.0.0.1:3000"
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.phone.brand, "NOKLA");
    assert_eq!(config.phone.typewriter_interval(), Duration::from_millis(15));
    assert_eq!(config.host.bind_addr, "0.0.0.0:4000");
    assert_eq!(config.host.callback_url.as_deref(), Some("http://127.0.0.1:3000"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config("[phone]\nbrand = \"NOKLA\"\n");
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.phone.brand, "NOKLA");
    assert_eq!(config.phone.typewriter_interval_ms, 30);
    assert_eq!(config.host, Config::default().host);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[phone\nbrand = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_zero_interval_fails_validation() {
    let (_dir, path) = write_config("[phone]\ntypewriter_interval_ms = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("typewriter_interval_ms"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_bad_bind_addr_fails_validation() {
    let mut config = Config::default();
    config.host.bind_addr = "localhost".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_callback_url_needs_http_scheme() {
    let mut config = Config::default();
    config.host.callback_url = Some("ftp://host".to_string());
    assert!(config.validate().is_err());

    config.host.callback_url = Some("https://host".to_string());
    assert!(config.validate().is_ok());
}
