//! On-disk configuration structure for folio.
//!
//! This module mirrors the `folio.toml` file exactly as written by the user.
//! For file discovery and resolution into absolute paths, see the
//! `discovery` and `workspace` modules.

use serde::{Deserialize, Serialize};

/// The parsed contents of a `folio.toml` file.
///
/// ```toml
/// books = [
///     "book-1",
///     { name = "trpl", location = "book/src" },
/// ]
///
/// [html]
/// site-url = "/"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskConfig {
    /// The books making up this workspace, in shelf order.
    #[serde(default)]
    pub books: Vec<BookEntry>,

    /// HTML output options.
    #[serde(default)]
    pub html: HtmlConfig,
}

/// One entry in the `books` list.
///
/// A bare string names a subdirectory whose name doubles as the book's
/// URL slug. The table form separates the slug from the source location
/// and allows a per-book default page override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookEntry {
    Bare(String),
    Detailed {
        name: String,
        #[serde(default)]
        location: Option<String>,
        #[serde(default, rename = "default-page")]
        default_page: Option<String>,
    },
}

impl BookEntry {
    /// The book's slug: the path segment it is served under.
    pub fn slug(&self) -> &str {
        match self {
            BookEntry::Bare(name) => name,
            BookEntry::Detailed { name, .. } => name,
        }
    }

    /// The source directory, relative to the workspace root.
    pub fn location(&self) -> &str {
        match self {
            BookEntry::Bare(name) => name,
            BookEntry::Detailed { name, location, .. } => location.as_deref().unwrap_or(name),
        }
    }

    /// The configured default page, if any.
    pub fn default_page(&self) -> Option<&str> {
        match self {
            BookEntry::Bare(_) => None,
            BookEntry::Detailed { default_page, .. } => default_page.as_deref(),
        }
    }
}

/// Options under `[html]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HtmlConfig {
    /// The base URL the site is served under. Always stored with a
    /// trailing slash.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// BCP 47 language tag emitted on `<html lang>`.
    #[serde(default = "default_language")]
    pub language: String,

    /// Syntax highlighting / color theme name.
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            language: default_language(),
            default_theme: default_theme(),
        }
    }
}

fn default_site_url() -> String {
    "/".to_owned()
}

fn default_language() -> String {
    "en".to_owned()
}

fn default_theme() -> String {
    "rust".to_owned()
}

impl HtmlConfig {
    /// The site URL normalized to end in exactly one slash.
    pub fn base_url(&self) -> String {
        let trimmed = self.site_url.trim_end_matches('/');
        format!("{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> DiskConfig {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn bare_book_list() {
        let config = parse(
            r#"
books = [
    "book-1",
    "book-2",
    "book-3",
]
"#,
        );
        let slugs: Vec<_> = config.books.iter().map(BookEntry::slug).collect();
        assert_eq!(slugs, vec!["book-1", "book-2", "book-3"]);
    }

    #[test]
    fn detailed_entry_with_location() {
        let config = parse(
            r#"
books = [
    "bare",
    { name = "trpl", location = "book/src" },
]
"#,
        );
        assert_eq!(config.books[1].slug(), "trpl");
        assert_eq!(config.books[1].location(), "book/src");
        assert_eq!(config.books[0].location(), "bare");
    }

    #[test]
    fn default_page_override() {
        let config = parse(
            r#"
books = [
    { name = "guide", default-page = "intro" },
]
"#,
        );
        assert_eq!(config.books[0].default_page(), Some("intro"));
        assert_eq!(config.books[0].location(), "guide");
    }

    #[test]
    fn html_options_with_defaults() {
        let config = parse(
            r#"
books = []

[html]
site-url = "/bookshelf"
"#,
        );
        assert_eq!(config.html.base_url(), "/bookshelf/");
        assert_eq!(config.html.language, "en");
        assert_eq!(config.html.default_theme, "rust");
    }

    #[test]
    fn empty_file_is_valid() {
        let config = parse("");
        assert!(config.books.is_empty());
        assert_eq!(config.html.base_url(), "/");
    }
}
