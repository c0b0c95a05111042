//! Enumerations for activity types and statuses.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Normalizes user input before matching it against enum names.
///
/// Matching is case-insensitive and treats `-` like `_`, so `in-progress`,
/// `in_progress` and `IN_PROGRESS` all name the same status.
fn normalize(s: &str) -> String {
    s.trim().replace('-', "_").to_uppercase()
}

/// Kind of university activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    /// Regular course
    #[default]
    Course,

    /// Hands-on workshop
    Workshop,

    /// Seminar or talk
    Seminar,

    /// Research project
    Research,

    /// Extension (community outreach) project
    Extension,

    /// Anything else
    Other,
}

impl ActivityType {
    /// Every activity type, in declaration order.
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Course,
        ActivityType::Workshop,
        ActivityType::Seminar,
        ActivityType::Research,
        ActivityType::Extension,
        ActivityType::Other,
    ];

    /// Canonical name, as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Course => "COURSE",
            ActivityType::Workshop => "WORKSHOP",
            ActivityType::Seminar => "SEMINAR",
            ActivityType::Research => "RESEARCH",
            ActivityType::Extension => "EXTENSION",
            ActivityType::Other => "OTHER",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Course => "Course",
            ActivityType::Workshop => "Workshop",
            ActivityType::Seminar => "Seminar",
            ActivityType::Research => "Research",
            ActivityType::Extension => "Extension",
            ActivityType::Other => "Other",
        }
    }

    /// Icon shown next to the activity title.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use campus_core::models::ActivityType;
    ///
    /// assert_eq!(ActivityType::Course.icon(), "📚");
    /// assert_eq!(ActivityType::Other.icon(), "📌");
    /// ```
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityType::Course => "📚",
            ActivityType::Workshop => "🛠️",
            ActivityType::Seminar => "🎯",
            ActivityType::Research => "🔬",
            ActivityType::Extension => "🤝",
            ActivityType::Other => "📌",
        }
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "COURSE" => Ok(ActivityType::Course),
            "WORKSHOP" => Ok(ActivityType::Workshop),
            "SEMINAR" => Ok(ActivityType::Seminar),
            "RESEARCH" => Ok(ActivityType::Research),
            "EXTENSION" => Ok(ActivityType::Extension),
            "OTHER" => Ok(ActivityType::Other),
            _ => Err(format!("Invalid activity type: {s}")),
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    /// Scheduled, not started yet
    #[default]
    Pending,

    /// Currently running
    InProgress,

    /// Finished
    Completed,

    /// Called off
    Cancelled,
}

impl ActivityStatus {
    /// Every status, in declaration order.
    pub const ALL: [ActivityStatus; 4] = [
        ActivityStatus::Pending,
        ActivityStatus::InProgress,
        ActivityStatus::Completed,
        ActivityStatus::Cancelled,
    ];

    /// Canonical name, as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Pending => "PENDING",
            ActivityStatus::InProgress => "IN_PROGRESS",
            ActivityStatus::Completed => "COMPLETED",
            ActivityStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Pending => "Pending",
            ActivityStatus::InProgress => "In Progress",
            ActivityStatus::Completed => "Completed",
            ActivityStatus::Cancelled => "Cancelled",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use campus_core::models::ActivityStatus;
    ///
    /// assert_eq!(ActivityStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ActivityStatus::InProgress.with_icon(), "➤ In Progress");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ActivityStatus::Pending => "○ Pending",
            ActivityStatus::InProgress => "➤ In Progress",
            ActivityStatus::Completed => "✓ Completed",
            ActivityStatus::Cancelled => "✗ Cancelled",
        }
    }
}

impl FromStr for ActivityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "PENDING" => Ok(ActivityStatus::Pending),
            "IN_PROGRESS" | "INPROGRESS" => Ok(ActivityStatus::InProgress),
            "COMPLETED" => Ok(ActivityStatus::Completed),
            "CANCELLED" => Ok(ActivityStatus::Cancelled),
            _ => Err(format!("Invalid activity status: {s}")),
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
