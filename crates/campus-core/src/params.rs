//! Parameter structures for catalog operations.
//!
//! These structures are shared by every interface (the CLI today) and carry no
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`.
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct ShowActivityArgs {
//!     pub id: String,
//! }
//!
//! impl From<ShowActivityArgs> for Id {
//!     fn from(val: ShowActivityArgs) -> Self {
//!         Id { id: val.id }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{ActivityStatus, ActivityType};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Id {
    /// The ID of the activity to operate on
    pub id: String,
}

impl Id {
    /// Create ID parameters from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for listing activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListActivities {
    /// Only activities of this type
    #[serde(default, rename = "type")]
    pub kind: Option<ActivityType>,
    /// Only activities in this status
    #[serde(default)]
    pub status: Option<ActivityStatus>,
    /// Free-text search over title, description and tags
    #[serde(default)]
    pub search: Option<String>,
}

/// Parameters for permanently deleting an activity.
///
/// Deletion cannot be undone, so the caller has to confirm it explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteActivity {
    /// The ID of the activity to delete
    pub id: String,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

impl DeleteActivity {
    /// Ensure the deletion was confirmed.
    ///
    /// # Errors
    ///
    /// * `CampusError::InvalidInput` - When `confirmed` is false
    pub fn validate(&self) -> crate::Result<()> {
        if !self.confirmed {
            return Err(crate::CampusError::invalid_input("confirmed").with_reason(format!(
                "Deleting activity {} cannot be undone. Pass confirmation to proceed.",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CampusError;

    #[test]
    fn test_delete_activity_requires_confirmation() {
        let params = DeleteActivity {
            id: "3".to_string(),
            confirmed: false,
        };

        match params.validate() {
            Err(CampusError::InvalidInput { field, reason }) => {
                assert_eq!(field, "confirmed");
                assert!(reason.contains("activity 3"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_activity_confirmed() {
        let params = DeleteActivity {
            id: "3".to_string(),
            confirmed: true,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_list_activities_deserializes_type_key() {
        let params: ListActivities =
            serde_json::from_str(r#"{"type": "COURSE"}"#).expect("Failed to deserialize");
        assert_eq!(params.kind, Some(ActivityType::Course));
        assert_eq!(params.status, None);
        assert_eq!(params.search, None);
    }
}
