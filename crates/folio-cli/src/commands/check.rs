//! Check command implementation.
//!
//! Validates the workspace without writing any output: configuration,
//! book directories, summaries, and navigation consistency.

use folio_core::nav::{self, RedirectOutcome};
use folio_core::{Dirs, collect};

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking workspace...");

    let workspace = folio_config::load(&args.dir)?;
    let dirs = Dirs::new(&workspace, None);
    let books = collect(&workspace, &dirs)?;

    for book in &books {
        let target = match nav::resolve(&books, &book.root_url) {
            RedirectOutcome::RedirectTo(url) => format!("redirects to {url}"),
            RedirectOutcome::NoRedirect => "serves its root page".to_owned(),
        };
        ui::success(&format!(
            "  {}: {} pages, {} {target}",
            book.slug,
            book.pages.len(),
            book.root_url,
        ));
    }

    ui::success(&format!("{} books are valid", books.len()));
    Ok(())
}
