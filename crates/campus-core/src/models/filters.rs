//! Filter types for querying activities.

use super::{Activity, ActivityStatus, ActivityType};

/// Filter options for listing activities.
///
/// Every criterion is optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    /// Only activities of this type
    pub kind: Option<ActivityType>,

    /// Only activities in this status
    pub status: Option<ActivityStatus>,

    /// Case-insensitive partial match on title, description or tags
    pub text: Option<String>,
}

impl ActivityFilter {
    /// Create a filter for one activity type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use campus_core::models::{ActivityFilter, ActivityType};
    ///
    /// let filter = ActivityFilter::of_kind(ActivityType::Workshop);
    /// assert_eq!(filter.kind, Some(ActivityType::Workshop));
    /// assert_eq!(filter.status, None);
    /// ```
    pub fn of_kind(kind: ActivityType) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Whether an activity passes every criterion of this filter.
    pub fn matches(&self, activity: &Activity) -> bool {
        self.kind.map_or(true, |kind| activity.kind == kind)
            && self.status.map_or(true, |status| activity.status == status)
            && self
                .text
                .as_deref()
                .map_or(true, |text| activity.matches_text(text))
    }
}

impl From<&crate::params::ListActivities> for ActivityFilter {
    fn from(params: &crate::params::ListActivities) -> Self {
        Self {
            kind: params.kind,
            status: params.status,
            text: params
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        }
    }
}
