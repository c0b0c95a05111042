//! Display formatting for activities, forms and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for the contexts that need their own
//! layout: the list view, form error reports, date ranges and confirmation
//! lines. Everything renders as Markdown so the CLI can print it either raw
//! or through its terminal skin.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Activity, ...) │───▶│ (Activities,    │───▶│     Output      │
//! │                 │    │  FormReport)    │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: the [`Activities`] list wrapper
//! - [`dates`]: [`DateRange`] for start/end pairs
//! - [`form`]: [`FormReport`] for rejected submissions
//! - [`models`]: Display implementations for domain models
//! - [`status`]: [`OperationStatus`] confirmation lines
//!
//! # Examples
//!
//! ```rust
//! use campus_core::display::{DateRange, OperationStatus};
//! use jiff::civil::date;
//!
//! let range = DateRange::new(date(2025, 5, 1), date(2025, 5, 10));
//! assert_eq!(range.to_string(), "2025-05-01 → 2025-05-10");
//!
//! let status = OperationStatus::success("Activity saved".to_string());
//! assert_eq!(status.to_string(), "Success: Activity saved\n");
//! ```

pub mod collections;
pub mod dates;
pub mod form;
pub mod models;
pub mod status;

pub use collections::Activities;
pub use dates::DateRange;
pub use form::FormReport;
pub use status::OperationStatus;
