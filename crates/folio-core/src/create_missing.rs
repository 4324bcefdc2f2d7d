//! Stub creation for summary entries without source files.
//!
//! With `--create`, chapters listed in a `SUMMARY.md` whose markdown
//! file does not exist yet get a stub containing just the chapter title,
//! so a freshly sketched summary builds immediately.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::summary::{Chapter, Summary};

/// Create a stub file for every chapter in `summary` whose location is
/// missing from `src_dir`. Draft chapters (no location) are left alone.
pub fn create_missing(src_dir: &Path, summary: &Summary) -> Result<()> {
    let mut chapters: Vec<&Chapter> = summary.prefix.iter().chain(&summary.suffix).collect();
    for item in &summary.numbered {
        item.for_each(&mut |i| chapters.push(&i.chapter));
    }

    for chapter in chapters {
        let Some(location) = &chapter.location else {
            continue;
        };

        let filename = src_dir.join(location);
        if filename.exists() {
            continue;
        }
        if let Some(parent) = filename.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!(file = %filename.display(), "creating missing chapter file");
        let mut file = File::create(&filename)?;
        writeln!(file, "# {}", chapter.name)?;
    }

    Ok(())
}
