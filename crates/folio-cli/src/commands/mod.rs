//! Command implementations for the folio CLI.
//!
//! Each command lives in its own module and provides an `execute`
//! function taking the parsed arguments.

pub mod build;
pub mod check;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
