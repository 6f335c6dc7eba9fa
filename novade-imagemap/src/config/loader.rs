//! Configuration loading.
//!
//! [`ConfigLoader::load`] reads `config.toml` from the application-specific
//! configuration directory (resolved with `directories-next`). A missing file
//! yields the default configuration. Whatever is loaded then goes through
//! [`ConfigLoader::validate_config`]:
//! - log level and format are normalized to lowercase and checked;
//! - a relative log file path is made absolute against the application's data
//!   directory, and the log file's parent directory is created.
//!
//! ```rust,ignore
//! use novade_imagemap::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("Logging level: {}", config.logging.level),
//!     Err(e) => {
//!         novade_imagemap::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```

use crate::config::ImageMapConfig;
use crate::error::{ConfigError, MapError};
use directories_next::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "NovaDE";
const APPLICATION: &str = "imagemap";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from the user's config directory.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DirectoryUnavailable`] if no home directory can be found.
    /// - [`ConfigError::ReadError`] for read failures other than a missing file.
    /// - [`ConfigError::ParseError`] for malformed TOML or unknown fields.
    /// - Anything [`Self::validate_config`] reports.
    pub fn load() -> Result<ImageMapConfig, MapError> {
        let path = Self::config_file_path()?;
        let mut config = match Self::read_optional(&path)? {
            Some(content) => Self::parse(&content)?,
            None => ImageMapConfig::default(),
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// Loads and validates a specific file. Unlike [`Self::load`], a missing
    /// file is an error.
    pub fn load_from_path(path: &Path) -> Result<ImageMapConfig, MapError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    /// Parses and validates TOML text.
    pub fn load_from_str(content: &str) -> Result<ImageMapConfig, MapError> {
        let mut config = Self::parse(content)?;
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// `<config dir>/config.toml`.
    pub fn config_file_path() -> Result<PathBuf, MapError> {
        Ok(Self::project_dirs("App Config")?.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Normalizes and checks a configuration in place.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ValidationError`] for an unknown log level or format.
    /// - [`ConfigError::DirectoryUnavailable`] if a relative log path cannot be
    ///   resolved.
    /// - [`MapError::Filesystem`] if the log directory cannot be created.
    pub fn validate_config(config: &mut ImageMapConfig) -> Result<(), MapError> {
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {
                config.logging.level = level_lower;
            }
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))
                .into());
            }
        }

        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => {
                config.logging.format = format_lower;
            }
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))
                .into());
            }
        }

        if let Some(path) = &config.logging.file_path {
            let absolute_path = if path.is_absolute() {
                path.clone()
            } else {
                Self::project_dirs("App Data")?.data_dir().join(path)
            };
            if let Some(parent_dir) = absolute_path.parent() {
                ensure_dir_exists(parent_dir)?;
            }
            config.logging.file_path = Some(absolute_path);
        }

        Ok(())
    }

    fn parse(content: &str) -> Result<ImageMapConfig, MapError> {
        if content.trim().is_empty() {
            return Ok(ImageMapConfig::default());
        }
        toml::from_str(content).map_err(|e| MapError::Config(ConfigError::ParseError(e)))
    }

    fn read_optional(path: &Path) -> Result<Option<String>, MapError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }

    fn project_dirs(dir_type: &str) -> Result<ProjectDirs, MapError> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
            MapError::Config(ConfigError::DirectoryUnavailable {
                dir_type: dir_type.to_string(),
            })
        })
    }
}

fn ensure_dir_exists(dir: &Path) -> Result<(), MapError> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| MapError::Filesystem {
        message: "Failed to create log directory".to_string(),
        path: dir.to_path_buf(),
        source,
    })
}
