//! Error handling for the NovaDE image map layer.
//!
//! The main error type for this crate is [`MapError`], which wraps the more
//! specific [`ConfigError`] and [`GeometryError`]. Malformed region
//! declarations are described by [`DeclarationError`]; those are never raised
//! to callers of the loading functions, they are collected into a
//! [`crate::parser::ParseReport`] instead.
//!
//! # Examples
//!
//! ```rust,ignore
//! use novade_imagemap::error::MapError;
//! use novade_imagemap::MapDimensions;
//!
//! fn declared_size(width: u32, height: u32) -> Result<MapDimensions, MapError> {
//!     MapDimensions::new(width, height)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Crate-level error type for image map loading and geometry.
#[derive(Debug, Error)]
pub enum MapError {
    /// Errors related to configuration loading, parsing, or validation.
    /// Wraps a [`ConfigError`].
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// The declared map width or height is zero. A map in this state cannot be
    /// used for coordinate mapping, so loading fails instead of continuing.
    #[error("Map width and height must not be 0, width: {width}, height: {height}")]
    InvalidMapDimensions { width: u32, height: u32 },

    /// Geometry that cannot produce a defined result.
    #[error("Geometry Error: {0}")]
    Geometry(#[from] GeometryError),

    /// Errors that occur during the initialization of the logging system.
    #[error("Logging Initialization Failed: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem operations (creating log directories and similar).
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reason a single region declaration was skipped.
///
/// These never abort a map load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The declaration has no identifier, or its identifier is 0.
    #[error("declaration has no non-zero id")]
    MissingId,

    /// The `shape` attribute is absent.
    #[error("declaration has no shape")]
    MissingShape,

    /// The `coords` attribute is absent.
    #[error("declaration has no coords")]
    MissingCoords,

    /// The shape keyword is not one of `rect`, `circle` or `poly`.
    #[error("unknown shape '{0}'")]
    UnknownShape(String),

    /// A rectangle or circle did not get exactly the number of coordinates it needs.
    #[error("{shape} expects {expected} coordinates, found {found}")]
    CoordinateCount {
        shape: &'static str,
        expected: usize,
        found: usize,
    },

    /// A coordinate token is not a number.
    #[error("invalid coordinate '{token}'")]
    InvalidNumber { token: String },

    /// A polygon coordinate list did not contain a single x,y pair.
    #[error("polygon has no vertices")]
    EmptyPolygon,
}

/// Geometry conditions that have no meaningful numeric answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The polygon encloses no area (fewer than three vertices, or all
    /// vertices collinear), so it has no centroid.
    #[error("degenerate polygon with {vertices} vertices has zero area")]
    DegeneratePolygon { vertices: usize },

    /// The display transform has a zero determinant.
    #[error("display transform is not invertible")]
    NonInvertibleTransform,
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`MapError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::ImageMapConfig`].
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A value parsed correctly but is not acceptable.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging setup.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// Failed to initialize the logging system.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// Failed to set or parse a log filter.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),
}
