//! folio CLI - multi-book documentation generator.
//!
//! This crate provides the command line interface over the folio
//! workspace: configuration loading from `folio-config`, book
//! collection and navigation from `folio-core`, and HTML output from
//! `folio-render`.
//!
//! # Modules
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - the `build` and `check` command implementations
//! - [`error`] - CLI error type wrapping the library errors
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - status messages for terminal output

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
