//! Configuration Loader
//!
//! Merges defaults, the project `umit.toml` and environment variables.
//! CLI flags are the caller's business and are applied on top.

use crate::config::{Config, ConfigFile};
use crate::ConfigResult;
use std::env;
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "umit.toml";

/// Configuration loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Read environment overrides (disabled in tests that pin the layers)
    use_env: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self { use_env: true }
    }

    /// Skip the environment layer
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Load configuration starting from the given directory.
    ///
    /// Walks up the directory tree to find `umit.toml`. A missing file is
    /// not an error; the defaults are used instead.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        match Self::find_config_file(start_dir) {
            Some(path) => self.load_from_file(&path),
            None => {
                tracing::debug!(
                    dir = %start_dir.display(),
                    "no {} found, using defaults",
                    CONFIG_FILE_NAME
                );
                self.finish(Config::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, config_path: &Path) -> ConfigResult<Config> {
        let file = ConfigFile::load_from_file(config_path)?;
        tracing::debug!(file = %config_path.display(), "loaded configuration file");

        let mut config = Config::default();
        if let Some(section) = &file.output {
            config.apply_section(section);
        }
        self.finish(config)
    }

    /// Find `umit.toml` by walking up from `start_dir`
    pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
        let mut current = Some(start_dir);
        while let Some(dir) = current {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            current = dir.parent();
        }
        None
    }

    fn finish(&self, mut config: Config) -> ConfigResult<Config> {
        if self.use_env {
            config.apply_env(|key| env::var(key).ok())?;
        }
        tracing::trace!(?config, "resolved configuration");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn create_config_file(dir: &Path, content: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_no_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let config = ConfigLoader::new()
            .without_env()
            .load_from_directory(temp_dir.path())
            .unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_find_config_in_parent() {
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "[output]\nshow_passed = false\n");

        let sub_dir = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&sub_dir).unwrap();

        let config = ConfigLoader::new()
            .without_env()
            .load_from_directory(&sub_dir)
            .unwrap();

        assert!(!config.show_passed);
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_file_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_config_file(temp_dir.path(), "");

        let config = ConfigLoader::new().without_env().load_from_file(&path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let err = ConfigLoader::new().load_from_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_bad_toml_reports_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_config_file(temp_dir.path(), "[output\ncolor = ");

        let err = ConfigLoader::new().without_env().load_from_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::TomlParseError { ref file, .. } if *file == path));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "[output]\nverbose = true\n");

        env::set_var("UMIT_VERBOSE", "0");
        let result = ConfigLoader::new().load_from_directory(temp_dir.path());
        env::remove_var("UMIT_VERBOSE");

        assert!(!result.unwrap().verbose);
    }

    #[test]
    #[serial]
    fn test_no_color_env() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var("NO_COLOR", "1");
        let result = ConfigLoader::new().load_from_directory(temp_dir.path());
        env::remove_var("NO_COLOR");

        assert!(!result.unwrap().color);
    }
}
