//! Command-line interface definition for folio.
//!
//! Defined with clap v4 derive macros. Global flags control logging
//! and color, subcommands carry their own options.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// folio - a multi-book documentation generator
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "A multi-book documentation generator",
    long_about = "Folio renders a workspace of markdown books into a single static\n\
                  website. Each book is described by a SUMMARY.md, and the site\n\
                  gets per-page navigation and book-root redirects for free."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available folio subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the workspace to a static HTML site
    ///
    /// Reads folio.toml, collects every book, and writes the site to
    /// the output directory, replacing any previous build.
    Build(BuildArgs),

    /// Validate the workspace without building
    ///
    /// Parses folio.toml and every SUMMARY.md, checks that each book
    /// directory exists, and reports what would be rendered.
    Check(CheckArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Workspace directory containing folio.toml
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,

    /// Output directory for the rendered site
    ///
    /// Defaults to `_out/html` under the workspace directory.
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Create markdown files listed in a SUMMARY.md but missing on disk
    #[arg(long)]
    pub create: bool,

    /// Directory of template files shadowing the built-in ones
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Workspace directory containing folio.toml
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,
}
