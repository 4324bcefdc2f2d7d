//! The resolved book model.
//!
//! [`Book`] is what the rest of the system works with: a flat, ordered
//! page list with precomputed output locations, URLs, and breadcrumbs.
//! Books are built once by [`crate::collect`] and are read-only for the
//! life of the process; the navigation engine never mutates them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::summary::SectionNumber;

/// One book of the workspace, after collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// URL path segment the book is served under.
    pub slug: String,
    /// Display title, from the summary heading.
    pub title: String,
    /// Pages in reading order. The order defines navigation adjacency.
    pub pages: Vec<Page>,
    /// The page the book root redirects to, if any. Guaranteed by
    /// construction to name a page in `pages`.
    pub default_page: Option<String>,
    /// Site-absolute URL of the book root, with a trailing slash.
    pub root_url: String,
}

/// A single renderable page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Identifier unique within the book: the page's path relative to
    /// the book root, without extension. Empty for the book's root
    /// `README.md`.
    pub id: String,
    /// Display name, from the summary link text.
    pub name: String,
    /// Section number, absent for prefix/suffix chapters.
    pub number: Option<SectionNumber>,
    /// The markdown input file.
    pub input: PathBuf,
    /// The HTML file to render to.
    pub output: PathBuf,
    /// Site-absolute URL, with a trailing slash.
    pub url: String,
    /// URL of the previous page in reading order.
    pub previous: Option<String>,
    /// URL of the next page in reading order.
    pub next: Option<String>,
    /// Breadcrumb trail: the book, any ancestor chapters, then this
    /// page itself.
    pub breadcrumbs: Vec<Crumb>,
    /// Nesting depth in the summary (top-level chapters are 1).
    pub depth: usize,
}

/// One breadcrumb element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

impl Book {
    /// Look up a page by id.
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Position of a page id in reading order.
    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }
}

impl Page {
    pub(crate) fn crumb(&self) -> Crumb {
        Crumb {
            label: self.name.clone(),
            href: self.url.clone(),
        }
    }
}
