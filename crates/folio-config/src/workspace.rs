//! Resolved workspace configuration.
//!
//! [`Workspace`] is the validated form of a [`DiskConfig`]: every book
//! entry resolved to an absolute directory with a verified `SUMMARY.md`.
//! Downstream crates only ever see this form.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{DiskConfig, HtmlConfig};
use crate::error::{ConfigError, Result};

/// A fully resolved folio workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Absolute workspace root (the directory holding `folio.toml`).
    pub root: PathBuf,
    /// Books in shelf order.
    pub books: Vec<BookSource>,
    /// HTML output options.
    pub html: HtmlConfig,
}

/// The source location of one book.
#[derive(Debug, Clone)]
pub struct BookSource {
    /// URL path segment the book is served under.
    pub slug: String,
    /// Absolute source directory.
    pub dir: PathBuf,
    /// Absolute path to the book's `SUMMARY.md`.
    pub summary_path: PathBuf,
    /// Configured default page override, if any.
    pub default_page: Option<String>,
}

impl Workspace {
    /// Resolve a parsed config against its workspace root.
    ///
    /// Verifies that every book directory and `SUMMARY.md` exists and
    /// that no two books share a slug. Validation is fail-fast: the
    /// first problem is reported as an error.
    pub fn resolve(root: impl AsRef<Path>, config: &DiskConfig) -> Result<Self> {
        let root = root.as_ref().canonicalize()?;
        let mut seen = HashSet::new();
        let mut books = Vec::with_capacity(config.books.len());

        for entry in &config.books {
            let slug = entry.slug().to_owned();
            if !seen.insert(slug.clone()) {
                return Err(ConfigError::DuplicateBook(slug));
            }

            let dir = root.join(entry.location());
            if !dir.is_dir() {
                return Err(ConfigError::BookDirNotFound(dir));
            }

            let summary_path = dir.join("SUMMARY.md");
            if !summary_path.is_file() {
                return Err(ConfigError::SummaryNotFound { book: slug, dir });
            }

            debug!(book = %slug, dir = %dir.display(), "resolved book");
            books.push(BookSource {
                slug,
                dir,
                summary_path,
                default_page: entry.default_page().map(str::to_owned),
            });
        }

        Ok(Self {
            root,
            books,
            html: config.html.clone(),
        })
    }

    /// Default output directory for this workspace.
    pub fn default_out_dir(&self) -> PathBuf {
        self.root.join("_out").join("html")
    }
}
