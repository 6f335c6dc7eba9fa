//! Default configuration values for the image map layer.
//!
//! These functions are used by `serde`'s `default` attribute in the configuration
//! structures when a value is not specified in the configuration file.

use crate::config::{LoggingConfig, ParserConfig};
use std::path::PathBuf;

/// Used by `ImageMapConfig` if the `logging` section is missing.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// No log file by default.
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Used by `ImageMapConfig` if the `parser` section is missing.
pub(super) fn default_parser_config() -> ParserConfig {
    ParserConfig {
        trim_whitespace: default_bool_true(),
        record_skipped: default_bool_true(),
    }
}

pub(super) fn default_bool_true() -> bool {
    true
}
