//! Service configuration read from TOML.
//!
//! ```toml
//! [units]
//! builtin = true
//! catalogs = ["qudt-units.ttl"]
//!
//! [[source]]
//! kind = "feature-of-interest"
//! path = "features.ttl"
//!
//! [[source]]
//! kind = "property"
//! path = "properties/"
//! ```
//!
//! Relative paths are resolved against the directory holding the
//! configuration file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::record::EntityKind;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Unit catalog settings.
    #[serde(default)]
    pub units: UnitsConfig,
    /// Repository sources, loaded in the order listed.
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceConfig>,
}

/// Unit catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitsConfig {
    /// Seed the catalog with the built-in units.
    #[serde(default = "default_builtin")]
    pub builtin: bool,
    /// Additional QUDT unit files.
    #[serde(default)]
    pub catalogs: Vec<PathBuf>,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            catalogs: Vec::new(),
        }
    }
}

fn default_builtin() -> bool {
    true
}

/// One repository source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Entity kind whose group receives the statements.
    pub kind: EntityKind,
    /// Repository file, or a directory of repository files.
    pub path: PathBuf,
}

impl Config {
    /// Reads the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file is missing, unreadable, or not
    /// valid configuration TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let mut config = Self::parse(&text, path)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        tracing::info!("Read configuration from {}", path.display());
        Ok(config)
    }

    /// Parses configuration TOML. Paths are kept as written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `text` is not valid configuration TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new(""))
    }

    /// Rewrites relative paths as children of `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for catalog in &mut self.units.catalogs {
            if catalog.is_relative() {
                *catalog = base.join(&*catalog);
            }
        }
        for source in &mut self.sources {
            if source.path.is_relative() {
                source.path = base.join(&source.path);
            }
        }
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}
