//! umit Configuration System
//!
//! Resolves the output configuration that governs how a test run is
//! reported:
//! - `color`: wrap report lines in ANSI colors
//! - `show_passed`: print lines for passing checks, not only failures
//! - `verbose`: print testcase headers, the abort notice and the summary
//!
//! # Configuration Hierarchy
//!
//! Sources are merged in the following order (later overrides earlier):
//! 1. Built-in defaults (everything enabled)
//! 2. Project file (`umit.toml`, found by walking up from a directory)
//! 3. Environment variables (`NO_COLOR`, `UMIT_*`)
//! 4. CLI flags (applied by the caller)
//!
//! # Example
//!
//! ```no_run
//! use umit_config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::new().load_from_directory(Path::new(".")).unwrap();
//! println!("verbose: {}", config.verbose);
//! ```

pub mod config;
pub mod loader;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

pub use config::{Config, ConfigFile, OutputSection};
pub use loader::ConfigLoader;
