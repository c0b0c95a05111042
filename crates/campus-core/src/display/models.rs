//! Display implementations for domain models.
//!
//! An [`Activity`] prints as its detail view. The list view uses the compact
//! [`Activity::fmt_summary`] layout through [`super::Activities`].

use std::fmt;

use super::DateRange;
use crate::models::Activity;

impl Activity {
    /// The span of days the activity covers.
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    fn tag_list(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("`{tag}`"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format the activity as one entry of a list.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} {} (ID: {})",
            self.kind.icon(),
            self.title,
            self.id
        )?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status.with_icon())?;
        writeln!(f, "- **Dates**: {}", self.date_range())?;
        writeln!(f, "- **Location**: {}", self.location)?;
        writeln!(f, "- **Participants**: {}", self.participants)?;
        if !self.tags.is_empty() {
            writeln!(f, "- **Tags**: {}", self.tag_list())?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_new() {
            writeln!(f, "# {} {}", self.kind.icon(), self.title)?;
        } else {
            writeln!(f, "# {} {}. {}", self.kind.icon(), self.id, self.title)?;
        }
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Type: {}", self.kind.label())?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        let range = self.date_range();
        match range.days() {
            1 => writeln!(f, "- Dates: {range} (1 day)")?,
            days => writeln!(f, "- Dates: {range} ({days} days)")?,
        }
        writeln!(f, "- Location: {}", self.location)?;
        writeln!(f, "- Coordinator: {}", self.coordinator)?;
        writeln!(f, "- Participants: {}", self.participants)?;
        if let Some(url) = &self.image_url {
            writeln!(f, "- Image: {url}")?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if !self.tags.is_empty() {
            writeln!(f, "\n## Tags")?;
            writeln!(f)?;
            writeln!(f, "{}", self.tag_list())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::{Activity, ActivityStatus, ActivityType};

    fn seminar() -> Activity {
        Activity {
            id: "4".to_string(),
            title: "Research Seminar".to_string(),
            description: "Monthly research presentations".to_string(),
            kind: ActivityType::Seminar,
            status: ActivityStatus::InProgress,
            start_date: date(2025, 3, 1),
            end_date: date(2025, 3, 3),
            location: "Auditorium".to_string(),
            coordinator: "Dr. Costa".to_string(),
            participants: 80,
            tags: vec!["research".to_string(), "talks".to_string()],
            image_url: None,
        }
    }

    #[test]
    fn test_activity_detail() {
        let output = seminar().to_string();

        assert!(output.starts_with("# 🎯 4. Research Seminar\n"));
        assert!(output.contains("- Type: Seminar"));
        assert!(output.contains("- Status: ➤ In Progress"));
        assert!(output.contains("- Dates: 2025-03-01 → 2025-03-03 (3 days)"));
        assert!(output.contains("- Coordinator: Dr. Costa"));
        assert!(output.contains("Monthly research presentations"));
        assert!(output.contains("`research` `talks`"));
        assert!(!output.contains("- Image:"));
    }

    #[test]
    fn test_activity_detail_single_day_with_image() {
        let activity = Activity {
            id: String::new(),
            end_date: date(2025, 3, 1),
            image_url: Some("https://example.com/seminar.png".to_string()),
            ..seminar()
        };
        let output = activity.to_string();

        assert!(output.starts_with("# 🎯 Research Seminar\n"));
        assert!(output.contains("- Dates: 2025-03-01 (1 day)"));
        assert!(output.contains("- Image: https://example.com/seminar.png"));
    }
}
