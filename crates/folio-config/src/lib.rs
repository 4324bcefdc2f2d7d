//! Configuration loading for folio workspaces.
//!
//! A folio workspace is a directory with a `folio.toml` naming one or
//! more books. This crate finds and parses that file ([`ConfigDiscovery`],
//! [`DiskConfig`]) and resolves it into absolute, validated book sources
//! ([`Workspace`]).

pub mod config;
pub mod discovery;
pub mod error;
pub mod workspace;

pub use config::{BookEntry, DiskConfig, HtmlConfig};
pub use discovery::{CONFIG_FILE, ConfigDiscovery};
pub use error::{ConfigError, Result};
pub use workspace::{BookSource, Workspace};

/// Discover, parse, and resolve the workspace rooted at `root`.
///
/// Convenience wrapper combining [`ConfigDiscovery::load`] and
/// [`Workspace::resolve`].
pub fn load(root: impl AsRef<std::path::Path>) -> Result<Workspace> {
    let root = root.as_ref();
    let config = ConfigDiscovery::new(root).load()?;
    Workspace::resolve(root, &config)
}
