//! Collaborator contracts around the activity form.
//!
//! The form itself performs no I/O. It is fed by an [`ActivitySource`], reports
//! accepted records to a [`SubmitHandler`] and hands cancellation to a
//! [`Navigator`]. Closures implement the last two directly.

use crate::{
    error::Result,
    models::{Activity, ActivityFilter},
};

/// Read access to stored activities.
pub trait ActivitySource {
    /// Activities matching `filter`, in display order.
    fn list_activities(&self, filter: &ActivityFilter) -> Result<Vec<Activity>>;

    /// One activity by identifier, or `None` when it does not exist.
    fn find_activity(&self, id: &str) -> Result<Option<Activity>>;
}

impl ActivitySource for Vec<Activity> {
    fn list_activities(&self, filter: &ActivityFilter) -> Result<Vec<Activity>> {
        Ok(self
            .iter()
            .filter(|activity| filter.matches(activity))
            .cloned()
            .collect())
    }

    fn find_activity(&self, id: &str) -> Result<Option<Activity>> {
        Ok(self.iter().find(|activity| activity.id == id).cloned())
    }
}

/// Receives the normalized record of a successful submit.
pub trait SubmitHandler {
    fn on_submit(&mut self, activity: Activity);
}

impl<F> SubmitHandler for F
where
    F: FnMut(Activity),
{
    fn on_submit(&mut self, activity: Activity) {
        self(activity)
    }
}

/// Navigation collaborator invoked when the user cancels the form.
pub trait Navigator {
    fn back(&mut self);
}

impl<F> Navigator for F
where
    F: FnMut(),
{
    fn back(&mut self) {
        self()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{ActivityStatus, ActivityType};

    fn activity(id: &str, kind: ActivityType) -> Activity {
        Activity {
            id: id.to_string(),
            title: format!("Activity {id}"),
            description: "A description long enough".to_string(),
            kind,
            status: ActivityStatus::Pending,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 1, 2),
            location: "Campus".to_string(),
            coordinator: "Coordinator".to_string(),
            participants: 1,
            tags: vec!["tag".to_string()],
            image_url: None,
        }
    }

    #[test]
    fn test_vec_source_lists_with_filter() {
        let source = vec![
            activity("1", ActivityType::Course),
            activity("2", ActivityType::Seminar),
        ];

        let all = source
            .list_activities(&ActivityFilter::default())
            .expect("Failed to list");
        assert_eq!(all.len(), 2);

        let seminars = source
            .list_activities(&ActivityFilter::of_kind(ActivityType::Seminar))
            .expect("Failed to list");
        assert_eq!(seminars.len(), 1);
        assert_eq!(seminars[0].id, "2");
    }

    #[test]
    fn test_vec_source_find() {
        let source = vec![activity("1", ActivityType::Course)];
        assert!(source.find_activity("1").expect("lookup failed").is_some());
        assert!(source.find_activity("9").expect("lookup failed").is_none());
    }
}
