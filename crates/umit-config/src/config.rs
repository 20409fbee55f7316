//! Output configuration and its `umit.toml` representation.

use crate::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::path::Path;

/// Finalized output configuration for a single run.
///
/// The three flags are independent. Turning `verbose` off leaves
/// `show_passed` untouched and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Wrap report lines in ANSI colors (green for pass, red for fail)
    pub color: bool,
    /// Print a line for every passing check, not only for failures
    pub show_passed: bool,
    /// Print testcase headers, the abort notice and the final summary
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            show_passed: true,
            verbose: true,
        }
    }
}

impl Config {
    /// Set whether report lines are colored
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set whether passing checks are reported
    pub fn with_show_passed(mut self, show_passed: bool) -> Self {
        self.show_passed = show_passed;
        self
    }

    /// Set verbose reporting
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Overlay the keys present in an `[output]` section
    pub fn apply_section(&mut self, section: &OutputSection) {
        if let Some(color) = section.color {
            self.color = color;
        }
        if let Some(show_passed) = section.show_passed {
            self.show_passed = show_passed;
        }
        if let Some(verbose) = section.verbose {
            self.verbose = verbose;
        }
    }

    /// Overlay environment overrides read through `lookup`.
    ///
    /// A non-empty `NO_COLOR` or `UMIT_NO_COLOR` forces color off after
    /// `UMIT_COLOR` has been applied. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("UMIT_COLOR") {
            self.color = parse_flag("UMIT_COLOR", &value)?;
        }
        if let Some(value) = lookup("UMIT_SHOW_PASSED") {
            self.show_passed = parse_flag("UMIT_SHOW_PASSED", &value)?;
        }
        if let Some(value) = lookup("UMIT_VERBOSE") {
            self.verbose = parse_flag("UMIT_VERBOSE", &value)?;
        }
        let set = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());
        if set("NO_COLOR") || set("UMIT_NO_COLOR") {
            self.color = false;
        }
        Ok(())
    }
}

/// Parse a boolean environment value
pub fn parse_flag(field: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}

/// Contents of a `umit.toml` file
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Output settings
    pub output: Option<OutputSection>,
}

/// The `[output]` section; absent keys keep the previous layer's value
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub color: Option<bool>,
    pub show_passed: Option<bool>,
    pub verbose: Option<bool>,
}

impl ConfigFile {
    /// Load and parse a configuration file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })
    }
}
