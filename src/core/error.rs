//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`NavigatorError`] which provides comprehensive error handling
//! for all index-navigator operations. It uses `thiserror` for ergonomic error
//! definitions and includes specialized error constructors for common failure
//! scenarios.
//!
//! # Public API
//! - [`NavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, NavigatorError>`
//!
//! # Error Categories
//! - **Index availability**: Missing, unreadable, or unparsable index snapshots
//! - **Resolution**: Out-of-range indices, unknown names, ambiguous matches
//! - **Navigation**: Typed paths with no corresponding chain in the index
//! - **External actions**: Editor launch failures
//! - **Passthrough**: I/O, JSON, and git2 errors from lower layers

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for index-navigator
#[derive(Error, Debug)]
pub enum NavigatorError {
    // Index availability errors
    #[error("Index unavailable: {reason}")]
    IndexUnavailable { reason: String },

    #[error("Index file does not exist at '{path}'. Run 'index-navigator index <root>' first.")]
    IndexFileNotFound { path: PathBuf },

    #[error("Failed to read index file '{path}': {source}")]
    IndexReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse index file '{path}': {source}")]
    IndexParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write index file '{path}': {source}")]
    IndexWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Resolution errors
    #[error("Index {index} is out of range (1-{max} available)")]
    OutOfRange { index: usize, max: usize },

    #[error("No entry or filesystem path matches '{input}'")]
    NotFound { input: String },

    #[error("'{input}' is ambiguous, candidates: {}", candidates.join(", "))]
    Ambiguous {
        input: String,
        candidates: Vec<String>,
    },

    #[error("Nothing to resolve: input is empty")]
    EmptyInput,

    // Navigation errors
    #[error("Path '{path}' has no corresponding chain in the index")]
    PathNotIndexed { path: PathBuf },

    #[error("No repositories in the index. Run 'index-navigator index <root>' first.")]
    NoRepositories,

    #[error("No repository matches '{input}'")]
    RepositoryNotFound { input: String },

    // External action errors
    #[error("Failed to launch '{program}': {reason}")]
    LaunchFailed { program: String, reason: String },

    // Directory resolution errors
    #[error("Could not determine a data directory for the index")]
    DataDirectoryNotFound,

    // Passthrough errors
    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using NavigatorError
pub type Result<T> = std::result::Result<T, NavigatorError>;

impl NavigatorError {
    /// Create an index unavailable error with a specific reason
    pub fn index_unavailable(reason: impl Into<String>) -> Self {
        Self::IndexUnavailable {
            reason: reason.into(),
        }
    }

    /// Create an index file not found error
    pub fn index_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::IndexFileNotFound { path: path.into() }
    }

    /// Create an index read failed error
    pub fn index_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IndexReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an index parse failed error
    pub fn index_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::IndexParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an index write failed error
    pub fn index_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IndexWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an out of range error
    pub fn out_of_range(index: usize, max: usize) -> Self {
        Self::OutOfRange { index, max }
    }

    /// Create a not found error
    pub fn not_found(input: impl Into<String>) -> Self {
        Self::NotFound {
            input: input.into(),
        }
    }

    /// Create an ambiguous match error
    pub fn ambiguous(input: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::Ambiguous {
            input: input.into(),
            candidates,
        }
    }

    /// Create a path not indexed error
    pub fn path_not_indexed(path: impl Into<PathBuf>) -> Self {
        Self::PathNotIndexed { path: path.into() }
    }

    /// Create a repository not found error
    pub fn repository_not_found(input: impl Into<String>) -> Self {
        Self::RepositoryNotFound {
            input: input.into(),
        }
    }

    /// Create a launch failed error
    pub fn launch_failed(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LaunchFailed {
            program: program.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the backing index could not be queried at all
    pub fn is_index_unavailable(&self) -> bool {
        matches!(
            self,
            Self::IndexUnavailable { .. }
                | Self::IndexFileNotFound { .. }
                | Self::IndexReadFailed { .. }
                | Self::IndexParseFailed { .. }
        )
    }
}
