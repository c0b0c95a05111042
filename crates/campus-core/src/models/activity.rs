//! Activity model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{ActivityStatus, ActivityType};

/// A scheduled university activity (course, workshop, seminar, ...).
///
/// This is the normalized record the form hands to its submission handler and
/// the shape the catalog stores. `id` is empty until the catalog assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_order"))]
pub struct Activity {
    /// Identifier assigned by the catalog (empty for a new activity)
    #[serde(default)]
    pub id: String,

    /// Title, at least 3 characters
    #[validate(length(min = 3))]
    pub title: String,

    /// Description, at least 10 characters
    #[validate(length(min = 10))]
    pub description: String,

    /// Kind of activity
    #[serde(rename = "type")]
    pub kind: ActivityType,

    /// Current lifecycle status
    pub status: ActivityStatus,

    /// First day of the activity
    pub start_date: Date,

    /// Last day of the activity, never before `start_date`
    pub end_date: Date,

    /// Where it takes place
    #[validate(length(min = 1))]
    pub location: String,

    /// Person responsible for the activity
    #[validate(length(min = 1))]
    pub coordinator: String,

    /// Expected number of participants
    #[validate(range(min = 1))]
    pub participants: u32,

    /// Tags in insertion order
    #[validate(length(min = 1))]
    pub tags: Vec<String>,

    /// Optional cover image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn validate_date_order(activity: &Activity) -> Result<(), ValidationError> {
    if activity.end_date < activity.start_date {
        return Err(ValidationError::new("date_order"));
    }
    Ok(())
}

impl Activity {
    /// Whether the record satisfies every storage invariant.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether the catalog has assigned an identifier yet.
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    /// Case-insensitive match on title, description and tags.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}
