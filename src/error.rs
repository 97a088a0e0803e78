//! Error types for cargo-prepare.
//!
//! All operations return `Result<T>` which aliases `Result<T, PrepareError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from version-stamping operations.
#[derive(Debug, Error)]
pub enum PrepareError {
    /// No `--version` value was supplied.
    #[error("missing required --version <VERSION>")]
    MissingVersion,

    /// Supplied value is not a valid semantic version.
    #[error("invalid version '{0}': {1}")]
    InvalidVersion(String, semver::Error),

    /// Manifest file missing at the resolved path.
    #[error("manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// Manifest has no `[package]` table to carry a version.
    #[error("no [package] table in {0}")]
    MissingPackageTable(PathBuf),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse or serialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cargo-prepare operations.
pub type Result<T> = std::result::Result<T, PrepareError>;
