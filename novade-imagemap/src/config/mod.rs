//! Configuration management.
//!
//! - [`types`]: the configuration schema ([`ImageMapConfig`], [`LoggingConfig`],
//!   [`ParserConfig`]).
//! - [`defaults`]: default values used by `serde` for missing fields.
//! - [`loader`]: [`ConfigLoader`], which finds, parses and validates `config.toml`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use novade_imagemap::config::ConfigLoader;
//!
//! let config = ConfigLoader::load().unwrap_or_default();
//! novade_imagemap::logging::init_logging(&config.logging, false)?;
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ImageMapConfig, LoggingConfig, ParserConfig};
