//! File-based config discovery.
//!
//! Handles finding and loading `folio.toml` from a workspace root.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::DiskConfig;
use crate::error::{ConfigError, Result};

/// The config file name folio looks for.
pub const CONFIG_FILE: &str = "folio.toml";

/// File-based configuration discovery.
///
/// # Example
///
/// ```no_run
/// use folio_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery rooted at a workspace directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find the config file in the root directory.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Load config from the discovered file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no `folio.toml` exists in the
    /// root directory.
    pub fn load(&self) -> Result<DiskConfig> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(&path)?;

        toml::from_str(&content).map_err(|e| ConfigError::InvalidToml {
            path,
            message: e.to_string(),
        })
    }
}
