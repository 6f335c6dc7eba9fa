//! Logging setup for applications embedding the image map.
//!
//! The library itself only emits `tracing` events; this module installs a
//! subscriber for them: a stdout layer plus an optional daily-rolling file
//! layer, in text or JSON format.

use crate::config::LoggingConfig;
use crate::error::{LoggingError, MapError};

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::io::stdout;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the file writer alive so buffered lines are flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Minimal `stderr` logging, filtered by `RUST_LOG` (default `info`).
///
/// For tests and early startup. Does nothing if a subscriber is already set.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

fn level_filter(level: &str) -> Result<String, LoggingError> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        invalid => {
            return Err(LoggingError::FilterError(format!("Invalid log level in config: {}", invalid)));
        }
    };
    Ok(level.to_string())
}

fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), MapError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory).map_err(|source| MapError::Filesystem {
        message: "Failed to create log directory".to_string(),
        path: directory.to_path_buf(),
        source,
    })?;

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("imagemap.log"));
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer = match format.to_lowercase().as_str() {
        "json" => fmt::layer().json().with_writer(writer).with_ansi(false).boxed(),
        _ => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
    };
    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`.
///
/// With `is_reload` set, an already-installed subscriber is not an error. The
/// global subscriber cannot be replaced, so the one already installed keeps
/// writing to its original log file and `config` is discarded.
///
/// # Errors
///
/// [`MapError::Logging`] for an invalid level, or when a subscriber is already
/// installed and `is_reload` is `false`. [`MapError::Filesystem`] if the log
/// directory cannot be created.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), MapError> {
    let level = level_filter(&config.level)?;

    let stdout_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(EnvFilter::new(&level))
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(EnvFilter::new(&level))
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_guard = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(EnvFilter::new(&level)).boxed());
        new_guard = Some(guard);
    }

    match Registry::default().with(layers).try_init() {
        Ok(()) => {
            *LOG_WORKER_GUARD.lock() = new_guard;
            Ok(())
        }
        Err(e) if is_reload => {
            // The installed subscriber still writes through the held guard.
            drop(new_guard);
            tracing::info!("Logging re-initialization kept the existing subscriber: {}", e);
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
        .into()),
    }
}
