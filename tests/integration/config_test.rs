//! Integration tests for configuration loading.

use std::fs;

use termgate::Config;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("config.toml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_fills_remaining_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
theme = "ocean"

[animation]
tick_ms = 40
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.theme, "ocean");
    assert_eq!(config.animation.tick_ms, 40);
    // Untouched fields keep their defaults.
    assert_eq!(config.animation.boot_delay_ms, 200);
    assert_eq!(config.gate.passphrase, "demo");
}

#[test]
fn invalid_toml_is_a_parse_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "animation = \"not a table\"").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("parse"), "got: {}", err);
}

#[test]
fn save_then_load_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.gate.passphrase = "s3cret".to_string();
    config.gate.target = "file:///tmp/payload.html".to_string();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn reserved_chunk_size_is_parsed_but_has_no_pacing_effect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[animation]\ntext_chunk_size = 99\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.animation.text_chunk_size, 99);
    // Pacing comes from tick_ms alone.
    assert_eq!(config.tick().as_millis(), 15);
}
