//! Async activity catalog.
//!
//! [`Catalog`] is the storage collaborator of the activity form. It lists and
//! loads activities for the list and detail views, accepts the records a
//! submitted form produces, and assigns identifiers to new ones.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (activity_      │───▶│ (activity_ops)  │───▶│   (via db/)     │
//! │  handlers)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Params & display      spawn_blocking          SQLite queries
//! ```
//!
//! Every operation opens its own connection on a blocking worker thread, so
//! a `Catalog` is cheap to clone and holds nothing but the database path.
//!
//! # Examples
//!
//! ```rust,no_run
//! use campus_core::{params::ListActivities, CatalogBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path("/tmp/campus.db")
//!     .build()
//!     .await?;
//!
//! let activities = catalog.find_activities(&ListActivities::default()).await?;
//! print!("{activities}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod activity_handlers;
pub mod activity_ops;
pub mod builder;


pub use builder::CatalogBuilder;

/// Handle to the activity store.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) db_path: PathBuf,
}

impl Catalog {
    /// Creates a catalog backed by the database at `db_path`.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the SQLite file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
