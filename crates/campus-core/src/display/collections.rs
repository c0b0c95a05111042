//! Collection wrapper for displaying lists of activities.

use std::{fmt, ops::Index};

use crate::models::Activity;

/// Newtype wrapper for displaying a list of activities.
///
/// Each activity prints in its compact summary layout. An empty list prints
/// a single "No activities found." line.
///
/// # Examples
///
/// ```rust
/// use campus_core::display::Activities;
///
/// let activities = Activities(vec![]);
/// assert!(activities.is_empty());
/// assert_eq!(activities.to_string(), "No activities found.\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities(pub Vec<Activity>);

impl Activities {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of activities in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the activity at the given index.
    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.0.get(index)
    }

    /// Get an iterator over the activities.
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }
}

impl Index<usize> for Activities {
    type Output = Activity;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Activities {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Activities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No activities found.")
        } else {
            for activity in &self.0 {
                activity.fmt_summary(f)?;
            }
            Ok(())
        }
    }
}
