//! Configuration data structures.
//!
//! - [`ImageMapConfig`]: the root structure, one section per subsystem.
//! - [`LoggingConfig`]: settings for [`crate::logging::init_logging`].
//! - [`ParserConfig`]: how coordinate lists are read and how skips are reported.
//!
//! Missing fields take their values from [`super::defaults`]; unknown fields are
//! rejected via `#[serde(deny_unknown_fields)]`.

use super::defaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use novade_imagemap::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/imagemap.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/imagemap.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Log file path. `None` disables file logging. Relative paths are
    /// resolved against the application's data directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// How region declarations are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Strip blanks around each coordinate token before parsing it as a number.
    /// When off, `"10, 20"` is a malformed coordinate list.
    ///
    /// Applies to every shape. Strict integer parsing of polygon vertices would
    /// reject `" 10"` while float parsing of rect and circle values accepts
    /// surrounding blanks. With trimming on, all shapes accept `" 10"`; with it
    /// off, all shapes reject it.
    #[serde(default = "defaults::default_bool_true")]
    pub trim_whitespace: bool,
    /// Keep per-declaration skip details in the parse report. When off only
    /// the skip count is kept.
    #[serde(default = "defaults::default_bool_true")]
    pub record_skipped: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        defaults::default_parser_config()
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use novade_imagemap::config::ImageMapConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [parser]
/// trim_whitespace = false
/// "#;
/// let config: ImageMapConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(config.logging.level, "warn");
/// assert!(!config.parser.trim_whitespace);
/// assert!(config.parser.record_skipped);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageMapConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_parser_config")]
    pub parser: ParserConfig,
}

impl Default for ImageMapConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            parser: defaults::default_parser_config(),
        }
    }
}
