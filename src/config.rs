//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! We look for an mdsection.toml in the working directory, and if present load settings
//! from there. This provides the default target file and log level.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "mdsection.toml";

const DEFAULT_README_FILE: &str = "README.md";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from mdsection.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_README_FILE.to_string())]
    /// File updated when no target file is given.
    pub readme_file: String,
    #[facet(default = DEFAULT_LOG_LEVEL.to_string())]
    /// Log filter used when neither `RUST_LOG` nor a verbosity flag is set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme_file: DEFAULT_README_FILE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `dir/mdsection.toml` if present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read, or
    /// [`Error::Config`] if it cannot be parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => facet_toml::from_str::<Self>(&contents)
                .map_err(|e| Error::Config(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::io(path, e)),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
