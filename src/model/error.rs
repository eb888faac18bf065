//! Error types for the eventboard application.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`], which `main` reports.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InputError`] - Store file reading failures (not found, I/O, nothing configured)
//!   - [`ParseError`] - Store file parsing failures (malformed JSON, bad record)
//!   - `ConfigError` - Config file read/parse failures (see `config::loader`)
//!   - `LoggingError` - Tracing initialization failures (see `logging`)
//!   - [`RouteError`] - Unknown `--open` location
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! Malformed lines in a JSON Lines store are **non-fatal**: they are logged
//! and skipped. A store that cannot be read at all is reported on the screens
//! that depend on it; the UI stays usable. [`LookupError`] never leaves the
//! screen that produced it: it replaces that screen's content with a message.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the store file.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to parse the store file.
    #[error("Failed to parse event data: {0}")]
    Parse(#[from] ParseError),

    /// Failed to load configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize logging.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The start location does not name a known screen.
    #[error("Invalid start location: {0}")]
    Route(#[from] RouteError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the store file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The store file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No store file was given on the command line, in the environment, or
    /// in the config file.
    #[error("No event data file given. Pass a path or set EVENTBOARD_DATA.")]
    NoInput,

    /// The loader went away before delivering a store.
    #[error("Event loader stopped before delivering data")]
    LoaderGone,

    /// Generic I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors encountered when parsing store data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The whole document is not valid JSON for a record array.
    #[error("Invalid JSON document: {message}")]
    InvalidDocument {
        /// Parser message.
        message: String,
    },

    /// One JSON Lines record is malformed.
    #[error("Invalid record at line {line}: {message}")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// Parser message.
        message: String,
    },
}

/// Errors produced by the detail-lookup variant of the pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The location has no `id` parameter.
    #[error("No event selected. Please go back and choose an event.")]
    MissingSelector,

    /// The `id` parameter matches no record.
    #[error("Event not found.")]
    NotFound {
        /// The raw selector value.
        selector: String,
    },
}

/// Errors produced when parsing a screen location.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The location is not a valid relative URL.
    #[error("Malformed location {location:?}: {reason}")]
    Malformed {
        /// The location as given.
        location: String,
        /// Why it failed to parse.
        reason: String,
    },

    /// The location names a page that does not exist.
    #[error("Unknown page {page:?}")]
    UnknownPage {
        /// The page file name.
        page: String,
    },
}
