//! Data models for campus activities.
//!
//! This module contains the domain record ([`Activity`]), its two
//! enumerations ([`ActivityType`], [`ActivityStatus`]) and the filter used by
//! list queries. Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use campus_core::models::{Activity, ActivityStatus, ActivityType};
//! use jiff::civil::date;
//!
//! let activity = Activity {
//!     id: String::new(),
//!     title: "Rust Workshop".to_string(),
//!     description: "Hands-on introduction to Rust".to_string(),
//!     kind: ActivityType::Workshop,
//!     status: ActivityStatus::Pending,
//!     start_date: date(2025, 5, 1),
//!     end_date: date(2025, 5, 10),
//!     location: "Lab 1".to_string(),
//!     coordinator: "Prof. Silva".to_string(),
//!     participants: 20,
//!     tags: vec!["rust".to_string()],
//!     image_url: None,
//! };
//! assert!(activity.is_valid());
//! assert!(activity.is_new());
//! ```

pub mod activity;
pub mod filters;
pub mod status;


pub use activity::Activity;
pub use filters::ActivityFilter;
pub use status::{ActivityStatus, ActivityType};
