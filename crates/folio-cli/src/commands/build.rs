//! Build command implementation.
//!
//! Loads the workspace, collects every book, and renders the site.

use std::fs;

use tracing::info;

use folio_config::Workspace;
use folio_core::summary::parse_summary;
use folio_core::{CoreError, Dirs, collect, create_missing};
use folio_render::HtmlRenderer;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::ui;

/// Execute the build command.
pub fn execute(args: BuildArgs) -> Result<()> {
    let workspace = folio_config::load(&args.dir)?;
    info!(
        root = %workspace.root.display(),
        books = workspace.books.len(),
        "loaded workspace"
    );

    if args.create {
        create_missing_pages(&workspace)?;
    }

    let dirs = Dirs::new(&workspace, args.out);
    let books = collect(&workspace, &dirs)?;

    let renderer = HtmlRenderer::new(&books, &dirs, &workspace.html, args.templates.as_deref())?;
    renderer.render()?;

    let pages: usize = books.iter().map(|book| book.pages.len()).sum();
    ui::success(&format!(
        "Rendered {pages} pages across {} books to {}",
        books.len(),
        dirs.out_dir.display()
    ));
    Ok(())
}

/// Create stub files for chapters a SUMMARY.md lists but the book
/// directory does not contain yet.
fn create_missing_pages(workspace: &Workspace) -> Result<()> {
    for book in &workspace.books {
        let source = fs::read_to_string(&book.summary_path)?;
        let summary = parse_summary(&source).map_err(|source| CoreError::Summary {
            path: book.summary_path.clone(),
            source,
        })?;
        create_missing(&book.dir, &summary)?;
    }
    Ok(())
}
