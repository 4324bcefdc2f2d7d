//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config not found: no folio.toml in {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid TOML in {}: {message}", .path.display())]
    InvalidToml { path: PathBuf, message: String },

    #[error("book directory not found: {}", .0.display())]
    BookDirNotFound(PathBuf),

    #[error("book '{book}' has no SUMMARY.md (looked in {})", .dir.display())]
    SummaryNotFound { book: String, dir: PathBuf },

    #[error("duplicate book slug: '{0}'")]
    DuplicateBook(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
