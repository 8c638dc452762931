//! Configuration File Tests
//!
//! - Missing fields fall back to defaults
//! - Invalid files are rejected with a config error
//! - CLI overrides win over the file

use std::fs;

use bookshelf::cli::{boot_store, Config, CliErrorCode};
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bookshelf.json");
    fs::write(&path, contents).unwrap();
    (tmp, path)
}

#[test]
fn test_full_config_file() {
    let (_tmp, path) = write_config(
        r#"{
            "http": {"host": "127.0.0.1", "port": 9100, "cors_origins": ["http://localhost:3000"]},
            "seed_books": false
        }"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.http.socket_addr(), "127.0.0.1:9100");
    assert_eq!(config.http.cors_origins, vec!["http://localhost:3000"]);
    assert!(!config.seed_books);
    assert!(boot_store(&config).is_empty().unwrap());
}

#[test]
fn test_partial_config_uses_defaults() {
    let (_tmp, path) = write_config(r#"{"http": {"port": 9200}}"#);

    let config = Config::load(&path).unwrap();
    assert_eq!(config.http.host, "0.0.0.0");
    assert_eq!(config.http.port, 9200);
    assert!(config.seed_books);
    assert_eq!(boot_store(&config).len().unwrap(), 3);
}

#[test]
fn test_invalid_json_rejected() {
    let (_tmp, path) = write_config("{ not json");

    let err = Config::load(&path).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::ConfigError);
    assert!(err.message().contains("Invalid config JSON"));
}

#[test]
fn test_zero_port_in_file_rejected() {
    let (_tmp, path) = write_config(r#"{"http": {"port": 0}}"#);
    assert!(Config::load(&path).is_err());
}

#[test]
fn test_missing_path_means_defaults() {
    let config = Config::load_or_default(None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_cli_overrides_win() {
    let (_tmp, path) = write_config(r#"{"http": {"host": "127.0.0.1", "port": 9300}}"#);

    let config = Config::load_or_default(Some(path.as_path()))
        .unwrap()
        .with_overrides(None, Some(9400), true)
        .unwrap();

    assert_eq!(config.http.socket_addr(), "127.0.0.1:9400");
    assert!(!config.seed_books);
}

#[test]
fn test_bad_cors_origin_in_file_rejected() {
    let (_tmp, path) =
        write_config(r#"{"http": {"cors_origins": ["http://localhost:3000", "http://a\u0007b"]}}"#);

    let err = Config::load(&path).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::ConfigError);
    assert!(err.message().contains("cors_origins"));
}
