//! Core library for the campus activities application.
//!
//! This crate provides the activity model, the create/edit form controller
//! with its validation rules, a local SQLite catalog and Markdown display
//! types for list and detail views.
//!
//! # Architecture
//!
//! - **Form** ([`form`]): a synchronous, I/O-free state machine. A rendering
//!   layer feeds it field changes, touches, tag edits, submit and cancel.
//! - **Collaborators** ([`source`]): the traits the form talks to for
//!   loading, submitting and navigating.
//! - **Catalog** ([`catalog`], [`db`]): async storage that assigns
//!   identifiers and implements [`source::ActivitySource`].
//! - **Display** ([`display`]): Markdown formatting for every output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use campus_core::{
//!     form::{ActivityForm, Field},
//!     models::Activity,
//!     CatalogBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path("campus.db")
//!     .build()
//!     .await?;
//!
//! let mut form = ActivityForm::new();
//! form.set_field(Field::Title, "Rust Workshop")?;
//! form.set_field(Field::Description, "Hands-on introduction to Rust")?;
//! form.set_field(Field::Type, "WORKSHOP")?;
//! form.set_field(Field::StartDate, "2025-05-01")?;
//! form.set_field(Field::EndDate, "2025-05-02")?;
//! form.set_field(Field::Location, "Lab 1")?;
//! form.set_field(Field::Coordinator, "Prof. Silva")?;
//! form.set_field(Field::Participants, 20u32)?;
//! form.add_tag("rust");
//!
//! let mut accepted: Option<Activity> = None;
//! form.submit(&mut |activity: Activity| accepted = Some(activity));
//!
//! if let Some(activity) = accepted {
//!     let saved = catalog.save_activity(activity).await?;
//!     println!("{saved}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod form;
pub mod models;
pub mod params;
pub mod source;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogBuilder};
pub use db::Database;
pub use display::{Activities, DateRange, FormReport, OperationStatus};
pub use error::{CampusError, Result};
pub use form::{ActivityForm, Field, FieldErrorKind, FormMode, FormPhase, Submission};
pub use models::{Activity, ActivityFilter, ActivityStatus, ActivityType};
pub use params::{DeleteActivity, Id, ListActivities};
pub use source::{ActivitySource, Navigator, SubmitHandler};
