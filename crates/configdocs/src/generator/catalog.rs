//! Settings catalog loaded from TOML.
//!
//! ```toml
//! [[settings]]
//! name = "dbms.memory.heap.max_size"
//! description = "Maximum heap size."
//! default = "512m"
//!
//! [[settings]]
//! name = "unsupported.dbms.debug"
//! internal = true
//! ```

use std::path::Path;

use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::descriptor::SettingDescriptor;
use crate::error::{Error, Result};

/// All known setting descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    settings: Vec<SettingDescriptor>,
}

impl Catalog {
    /// Create a catalog from descriptors.
    #[must_use]
    pub fn new(settings: Vec<SettingDescriptor>) -> Self {
        Self { settings }
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file does not exist, and
    /// [`Error::CatalogParse`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::file_not_found(path));
        }

        let catalog: Catalog = Figment::from(Toml::file(path))
            .extract()
            .map_err(|e| Error::CatalogParse {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;

        debug!(path = %path.display(), settings = catalog.len(), "Loaded settings catalog");
        Ok(catalog)
    }

    /// Descriptors in the order they were declared.
    #[must_use]
    pub fn settings(&self) -> &[SettingDescriptor] {
        &self.settings
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether the catalog has no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}
