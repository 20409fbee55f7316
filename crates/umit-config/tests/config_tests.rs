//! Configuration loading and precedence tests

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use umit_config::{Config, ConfigError, ConfigLoader};

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("umit.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_file_layer_over_defaults() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        r#"
[output]
color = false
show_passed = false
"#,
    );

    let config = ConfigLoader::new()
        .without_env()
        .load_from_directory(temp_dir.path())
        .unwrap();

    assert_eq!(
        config,
        Config {
            color: false,
            show_passed: false,
            verbose: true,
        }
    );
}

#[test]
fn test_file_without_output_section() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "# nothing configured\n");

    let config = ConfigLoader::new()
        .without_env()
        .load_from_directory(temp_dir.path())
        .unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_unknown_section_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "[reporting]\ncolor = true\n");

    let err = ConfigLoader::new().without_env().load_from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::TomlParseError { .. }));
    assert!(err.to_string().contains("umit.toml"));
}

#[test]
fn test_wrong_value_type_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "[output]\nverbose = \"yes\"\n");

    let result = ConfigLoader::new().without_env().load_from_file(&path);

    assert!(matches!(result, Err(ConfigError::TomlParseError { .. })));
}

#[test]
fn test_nearest_file_wins() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "[output]\nverbose = false\n");
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_config(&nested, "[output]\ncolor = false\n");

    let config = ConfigLoader::new()
        .without_env()
        .load_from_directory(&nested)
        .unwrap();

    assert!(!config.color);
    assert!(config.verbose);
}
