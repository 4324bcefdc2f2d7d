//! folio CLI entry point.
//!
//! Handles argument parsing, logging initialization, and command
//! dispatch.

use anyhow::Result;
use clap::Parser;
use folio_cli::{cli, commands, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(Into::into)
}
