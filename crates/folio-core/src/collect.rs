//! Turning parsed summaries into renderable [`Book`]s.
//!
//! Collection flattens each book's summary tree into reading order
//! (prefix chapters, numbered chapters depth-first, suffix chapters),
//! computes every page's output location, URL, and breadcrumb trail,
//! and wires previous/next links through [`crate::nav::adjacency`].
//! Draft chapters (no source file) are skipped.
//!
//! The resulting books are immutable for the rest of the build.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, instrument};

use folio_config::Workspace;

use crate::book::{Book, Crumb, Page};
use crate::error::{CoreError, Result};
use crate::nav;
use crate::summary::{self, Chapter, SectionNumber, Summary, SummaryItem};

/// Resolved directory and URL roots for one build.
#[derive(Debug, Clone, Default)]
pub struct Dirs {
    /// Workspace root.
    pub base_dir: PathBuf,
    /// Directory the site is written to.
    pub out_dir: PathBuf,
    /// Site-absolute base URL, ending in a slash.
    pub base_url: String,
}

impl Dirs {
    pub fn new(workspace: &Workspace, out_override: Option<PathBuf>) -> Self {
        Self {
            base_dir: workspace.root.clone(),
            out_dir: out_override.unwrap_or_else(|| workspace.default_out_dir()),
            base_url: workspace.html.base_url(),
        }
    }
}

/// Load and collect every book in the workspace.
#[instrument(skip_all, fields(books = workspace.books.len()))]
pub fn collect(workspace: &Workspace, dirs: &Dirs) -> Result<Vec<Book>> {
    workspace
        .books
        .iter()
        .map(|source| {
            let text = fs::read_to_string(&source.summary_path)?;
            let summary = summary::parse_summary(&text).map_err(|source_err| CoreError::Summary {
                path: source.summary_path.clone(),
                source: source_err,
            })?;
            collect_book(
                &source.slug,
                &source.dir,
                &summary,
                source.default_page.as_deref(),
                dirs,
            )
        })
        .collect()
}

/// Collect a single book from its parsed summary.
#[instrument(skip(src_dir, summary, dirs))]
pub fn collect_book(
    slug: &str,
    src_dir: &Path,
    summary: &Summary,
    default_override: Option<&str>,
    dirs: &Dirs,
) -> Result<Book> {
    let root_url = format!("{}{}/", dirs.base_url, slug);
    let mut pages = Vec::new();

    let book_crumb = Crumb {
        label: summary.title.clone(),
        href: root_url.clone(),
    };
    let mut trail = vec![book_crumb];

    let ctx = BookCtx {
        slug,
        src_dir,
        dirs,
    };
    for chapter in &summary.prefix {
        push_page(&mut pages, chapter, None, 1, &trail, &ctx)?;
    }
    for item in &summary.numbered {
        push_numbered(&mut pages, item, &mut trail, &ctx)?;
    }
    for chapter in &summary.suffix {
        push_page(&mut pages, chapter, None, 1, &trail, &ctx)?;
    }

    let default_page = match default_override {
        Some(id) => Some(id.to_owned()),
        // A root README serves the book root directly; otherwise the
        // first page becomes the redirect target.
        None if pages.iter().any(|p| p.id.is_empty()) => None,
        None => pages.first().map(|p| p.id.clone()),
    };

    let mut book = Book {
        slug: slug.to_owned(),
        title: summary.title.clone(),
        pages,
        default_page,
        root_url,
    };
    nav::validate_default_page(&book)?;

    // Wire previous/next from the adjacency navigator. Ids are cloned
    // out first so the lookups run against the finished page order.
    let ids: Vec<String> = book.pages.iter().map(|p| p.id.clone()).collect();
    for (index, id) in ids.iter().enumerate() {
        let state = nav::adjacency(&book, id)?;
        let to_url = |id: &String| book.page(id).map(|p| p.url.clone());
        let previous = state.previous.as_ref().and_then(&to_url);
        let next = state.next.as_ref().and_then(&to_url);
        book.pages[index].previous = previous;
        book.pages[index].next = next;
    }

    debug!(book = slug, pages = book.pages.len(), "collected book");
    Ok(book)
}

/// Per-book context threaded through the flattening walk.
struct BookCtx<'a> {
    slug: &'a str,
    src_dir: &'a Path,
    dirs: &'a Dirs,
}

fn push_numbered(
    pages: &mut Vec<Page>,
    item: &SummaryItem,
    trail: &mut Vec<Crumb>,
    ctx: &BookCtx<'_>,
) -> Result<()> {
    let own_crumb = push_page(
        pages,
        &item.chapter,
        Some(&item.number),
        item.number.len(),
        trail,
        ctx,
    )?;

    if !item.children.is_empty() {
        // Draft parents contribute no breadcrumb of their own.
        let pushed = match own_crumb {
            Some(crumb) => {
                trail.push(crumb);
                true
            }
            None => false,
        };
        for child in &item.children {
            push_numbered(pages, child, trail, ctx)?;
        }
        if pushed {
            trail.pop();
        }
    }

    Ok(())
}

/// Append a page for `chapter`, returning its breadcrumb. Drafts are
/// skipped and yield `None`.
fn push_page(
    pages: &mut Vec<Page>,
    chapter: &Chapter,
    number: Option<&SectionNumber>,
    depth: usize,
    trail: &[Crumb],
    ctx: &BookCtx<'_>,
) -> Result<Option<Crumb>> {
    let Some(location) = &chapter.location else {
        return Ok(None);
    };

    let id = page_id(location)?;
    let url = page_url(&ctx.dirs.base_url, ctx.slug, &id);
    let output = output_loc(&ctx.dirs.out_dir, ctx.slug, &id);
    let input = ctx.src_dir.join(location);

    let mut page = Page {
        id,
        name: chapter.name.clone(),
        number: number.cloned(),
        input,
        output,
        url,
        previous: None,
        next: None,
        breadcrumbs: trail.to_vec(),
        depth,
    };
    page.breadcrumbs.push(page.crumb());
    let crumb = page.crumb();
    pages.push(page);
    Ok(Some(crumb))
}

/// Derive a page id from its summary location: the path relative to the
/// book root, extension dropped, with `README` mapping to its directory
/// (the book root for a top-level `README.md`).
pub fn page_id(location: &Path) -> Result<String> {
    let mut parts: Vec<&str> = Vec::new();
    for component in location.components() {
        if let Component::Normal(segment) = component {
            let segment = segment
                .to_str()
                .ok_or_else(|| CoreError::NonUtf8Path(location.to_path_buf()))?;
            parts.push(segment);
        }
    }

    let mut id_parts: Vec<String> = Vec::new();
    if let Some((last, dirs)) = parts.split_last() {
        id_parts.extend(dirs.iter().map(|s| (*s).to_owned()));
        let stem = last.strip_suffix(".md").unwrap_or(last);
        if stem != "README" {
            id_parts.push(stem.to_owned());
        }
    }

    Ok(id_parts.join("/"))
}

/// Site-absolute URL for a page, always with a trailing slash.
pub fn page_url(base_url: &str, slug: &str, id: &str) -> String {
    if id.is_empty() {
        format!("{base_url}{slug}/")
    } else {
        format!("{base_url}{slug}/{id}/")
    }
}

/// Output file for a page: `<out>/<slug>/<id>/index.html`.
pub fn output_loc(out_dir: &Path, slug: &str, id: &str) -> PathBuf {
    let mut path = out_dir.join(slug);
    if !id.is_empty() {
        for segment in id.split('/') {
            path.push(segment);
        }
    }
    path.join("index.html")
}
