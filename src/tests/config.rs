use super::{Config, CONFIG_FILE};
use crate::error::Error;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults_without_file() {
    let dir = tempdir().unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.readme_file, "README.md");
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "readme_file = \"docs/INDEX.md\"\n").unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.readme_file, "docs/INDEX.md");
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "readme_file = [").unwrap();

    assert!(matches!(Config::load(dir.path()), Err(Error::Config(_))));
}
