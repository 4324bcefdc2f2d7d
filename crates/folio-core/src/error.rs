//! Error types for book construction and navigation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = CoreError> = std::result::Result<T, E>;

/// Errors raised while parsing a `SUMMARY.md`.
#[derive(Debug, Error, PartialEq)]
pub enum SummaryError {
    #[error("SUMMARY.md must start with a '# Title' heading")]
    MissingTitle,

    #[error("suffix chapters cannot be followed by a list (line {line})")]
    SuffixFollowedByList { line: usize },

    #[error("list item at line {line} must contain exactly one chapter link")]
    InvalidChapterItem { line: usize },

    #[error("markdown parse error: {0}")]
    Markdown(String),
}

/// Errors raised by the navigation engine.
///
/// Both variants indicate a configuration or routing inconsistency
/// upstream and are propagated rather than recovered from.
#[derive(Debug, Error, PartialEq)]
pub enum NavError {
    /// The page id is not in its claimed book's page sequence.
    #[error("page '{page}' not found in book '{book}'")]
    PageNotFound { book: String, page: String },

    /// A configured default page names a page that does not exist.
    /// Rejected at book construction time, never at request time.
    #[error("default page '{page}' does not exist in book '{book}'")]
    InvalidDefaultPage { book: String, page: String },
}

/// Top-level error for loading and collecting books.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to parse {}: {source}", .path.display())]
    Summary {
        path: PathBuf,
        #[source]
        source: SummaryError,
    },

    #[error(transparent)]
    Nav(#[from] NavError),

    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
