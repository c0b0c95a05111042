//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::models::Activity;

/// Wrapper type for displaying operation confirmation messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Confirmation for a newly created activity.
    pub fn created(activity: &Activity) -> Self {
        Self::success(format!(
            "Created activity '{}' with ID: {}",
            activity.title, activity.id
        ))
    }

    /// Confirmation for saved changes to an existing activity.
    pub fn updated(activity: &Activity) -> Self {
        Self::success(format!("Saved changes to activity {}", activity.id))
    }

    /// Confirmation for a permanently deleted activity.
    pub fn deleted(activity: &Activity) -> Self {
        Self::success(format!(
            "Deleted activity '{}' (ID: {})",
            activity.title, activity.id
        ))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{ActivityStatus, ActivityType};

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed".to_string());
        assert_eq!(success.to_string(), "Success: Operation completed\n");

        let failure = OperationStatus::failure("Activity not found".to_string());
        assert_eq!(failure.to_string(), "Error: Activity not found\n");
    }

    #[test]
    fn test_activity_confirmations() {
        let activity = Activity {
            id: "9".to_string(),
            title: "Community Garden".to_string(),
            description: "Extension project with local schools".to_string(),
            kind: ActivityType::Extension,
            status: ActivityStatus::Pending,
            start_date: date(2025, 9, 1),
            end_date: date(2025, 11, 30),
            location: "Campus farm".to_string(),
            coordinator: "Prof. Ramos".to_string(),
            participants: 12,
            tags: vec!["outreach".to_string()],
            image_url: None,
        };

        assert!(OperationStatus::created(&activity)
            .to_string()
            .contains("Created activity 'Community Garden' with ID: 9"));
        assert!(OperationStatus::updated(&activity)
            .to_string()
            .contains("Saved changes to activity 9"));
        assert!(OperationStatus::deleted(&activity)
            .to_string()
            .contains("Deleted activity 'Community Garden' (ID: 9)"));
    }
}
