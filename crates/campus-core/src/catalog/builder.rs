//! Builder for creating and configuring Catalog instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Catalog;
use crate::{
    db::Database,
    error::{CampusError, Result},
};

/// Builder for creating and configuring Catalog instances.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    database_path: Option<PathBuf>,
}

impl CatalogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/campus/campus.db` or `~/.local/share/campus/campus.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the configured catalog, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `CampusError::XdgDirectory` if no default path can be found
    /// Returns `CampusError::FileSystem` if the parent directory cannot be
    /// created
    /// Returns `CampusError::Database` if database initialization fails
    pub async fn build(self) -> Result<Catalog> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CampusError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), CampusError>(())
        })
        .await
        .map_err(CampusError::join)??;

        debug!("Activity catalog ready at {}", db_path.display());
        Ok(Catalog::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("campus")
            .place_data_file("campus.db")
            .map_err(|e| CampusError::XdgDirectory(e.to_string()))
    }
}
