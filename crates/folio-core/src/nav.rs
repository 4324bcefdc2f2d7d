//! The navigation engine: root redirects and page adjacency.
//!
//! Two independent, pure queries over immutable [`Book`] data:
//!
//! * [`resolve`] decides whether a requested path is a book root that
//!   should redirect to the book's default page;
//! * [`adjacency`] computes the previous/next page of a given page,
//!   which determines the navigation controls the renderer emits.
//!
//! Neither query touches shared mutable state, so both are safe to call
//! from any number of threads without coordination. Failures here are
//! configuration or routing defects and always recur on retry, so they
//! are propagated rather than retried or masked.

use crate::book::Book;
use crate::error::NavError;

/// The outcome of resolving a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// The path names a page (or a book root with no default page);
    /// serve it as-is.
    NoRedirect,
    /// The path is a book root with a default page; the canonical
    /// target always carries exactly one trailing slash.
    RedirectTo(String),
}

/// Previous/next relationship of a page within its book.
///
/// `previous` is absent iff the page is first in reading order, `next`
/// absent iff it is last. Both are absent only for a single-page book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Resolve a requested path against the workspace's books.
///
/// A book-root request redirects if and only if the book has a default
/// page. A book without one (a root `README.md` serves the root
/// directly) is a deliberate configuration, not a failure, and yields
/// [`RedirectOutcome::NoRedirect`]. Paths already naming a specific
/// page are never redirected.
///
/// Pure lookup: calling this twice with the same path always yields
/// the same outcome.
pub fn resolve(books: &[Book], requested: &str) -> RedirectOutcome {
    let requested = normalize(requested);

    for book in books {
        if book.root_url != requested {
            continue;
        }
        if let Some(default) = &book.default_page {
            // Construction guarantees the default page exists.
            if let Some(page) = book.page(default) {
                return RedirectOutcome::RedirectTo(normalize(&page.url));
            }
        }
        return RedirectOutcome::NoRedirect;
    }

    RedirectOutcome::NoRedirect
}

/// Compute the navigation state of `page_id` within `book`.
///
/// # Errors
///
/// [`NavError::PageNotFound`] if `page_id` is not in the book's page
/// sequence. This signals an upstream routing or configuration defect
/// and is never silently treated as "first page".
pub fn adjacency(book: &Book, page_id: &str) -> Result<NavigationState, NavError> {
    let index = book.position(page_id).ok_or_else(|| NavError::PageNotFound {
        book: book.slug.clone(),
        page: page_id.to_owned(),
    })?;

    let previous = index.checked_sub(1).map(|i| book.pages[i].id.clone());
    let next = book.pages.get(index + 1).map(|p| p.id.clone());

    Ok(NavigationState { previous, next })
}

/// Check a book's configured default page at construction time.
///
/// # Errors
///
/// [`NavError::InvalidDefaultPage`] when the default names a page that
/// does not exist in the book. Rejecting this here keeps the request
/// path free of the malformed-configuration case.
pub fn validate_default_page(book: &Book) -> Result<(), NavError> {
    match &book.default_page {
        Some(id) if book.position(id).is_none() => Err(NavError::InvalidDefaultPage {
            book: book.slug.clone(),
            page: id.clone(),
        }),
        _ => Ok(()),
    }
}

/// Normalize a path to end in exactly one trailing slash.
fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    format!("{trimmed}/")
}
