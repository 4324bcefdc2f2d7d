//! Error types for HTML rendering.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = RenderError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to render markdown in {path}: {message}")]
    Markdown { path: PathBuf, message: String },

    #[error("missing embedded asset: {0}")]
    MissingAsset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
