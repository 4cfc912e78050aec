//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files into `FileConfig`
//! - Validate an assembled `RunConfig` before any network activity
//!
//! File values sit below CLI flags and environment variables in the
//! precedence order; the driver resolves the final `RunConfig`.
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let file = ConfigLoader::load_from_path(Path::new("notify.toml")).unwrap();
//! println!("org: {:?}", file.org);
//! ```

mod parser;
mod validator;

pub use parser::ConfigFormat;
pub use validator::validate;

use contracts::ContractError;
use serde::Deserialize;
use std::path::Path;

/// Optional configuration file contents
///
/// Every field is optional; anything absent falls through to the
/// environment value or the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub admin_token: Option<String>,
    pub org: Option<String>,
    pub repo: Option<String>,
    pub log_url: Option<String>,
    pub route_filter: Option<String>,
    pub add_md_suffix: Option<bool>,
    pub dispatch_event: Option<String>,
    pub github_token: Option<String>,
    pub github_api_url: Option<String>,
    pub last_run: Option<String>,
    pub local_run: Option<bool>,
    /// `abort` or `continue`
    pub on_dispatch_error: Option<String>,
}

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    pub fn load_from_path(path: &Path) -> Result<FileConfig, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<FileConfig, ContractError> {
        parser::parse(content, format)
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
