//! The raw value bag behind the activity form.

use super::{Field, FieldValue};
use crate::{error::Result, models::Activity, CampusError};

/// Current values of every form field, as entered.
///
/// Scalars are kept as the text the user typed so that an unparsable date or
/// a non-numeric participant count can be reported instead of rejected
/// outright. `image_url` is always a string; empty stands in for "no image".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub coordinator: String,
    pub participants: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl Default for FormValues {
    /// Defaults of a new activity: a pending course with no participants.
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            kind: "COURSE".to_string(),
            status: "PENDING".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            location: String::new(),
            coordinator: String::new(),
            participants: "0".to_string(),
            tags: Vec::new(),
            image_url: String::new(),
        }
    }
}

impl From<&Activity> for FormValues {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            title: activity.title.clone(),
            description: activity.description.clone(),
            kind: activity.kind.as_str().to_string(),
            status: activity.status.as_str().to_string(),
            start_date: activity.start_date.to_string(),
            end_date: activity.end_date.to_string(),
            location: activity.location.clone(),
            coordinator: activity.coordinator.clone(),
            participants: activity.participants.to_string(),
            tags: activity.tags.clone(),
            image_url: activity.image_url.clone().unwrap_or_default(),
        }
    }
}

impl FormValues {
    /// Current value of a field.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Tags => FieldValue::Tags(self.tags.clone()),
            _ => FieldValue::Text(self.text(field).to_string()),
        }
    }

    /// Replace the value of a field.
    ///
    /// # Errors
    ///
    /// * `CampusError::InvalidInput` - When the value shape does not fit the
    ///   field (text for `tags`, a list for a scalar) or when `id` is targeted
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<()> {
        if field == Field::Id {
            return Err(CampusError::invalid_input(field.name())
                .with_reason("The identifier is fixed for the lifetime of a form"));
        }

        match value {
            FieldValue::Tags(tags) if field.is_list() => {
                self.tags = tags;
                Ok(())
            }
            FieldValue::Text(text) if !field.is_list() => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
                Ok(())
            }
            FieldValue::Text(_) => Err(CampusError::invalid_input(field.name())
                .with_reason("Expected a tag list; use add_tag for single tags")),
            FieldValue::Tags(_) => Err(CampusError::invalid_input(field.name())
                .with_reason("Expected text, got a tag list")),
        }
    }

    /// Append `tag` unless it is empty or already present.
    ///
    /// Returns whether the tag list changed.
    pub fn push_tag(&mut self, tag: &str) -> bool {
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove `tag` if present. Returns whether the tag list changed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    fn text(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Type => &self.kind,
            Field::Status => &self.status,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::Location => &self.location,
            Field::Coordinator => &self.coordinator,
            Field::Participants => &self.participants,
            Field::ImageUrl => &self.image_url,
            Field::Tags => "",
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let slot = match field {
            Field::Id | Field::Tags => return None,
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Type => &mut self.kind,
            Field::Status => &mut self.status,
            Field::StartDate => &mut self.start_date,
            Field::EndDate => &mut self.end_date,
            Field::Location => &mut self.location,
            Field::Coordinator => &mut self.coordinator,
            Field::Participants => &mut self.participants,
            Field::ImageUrl => &mut self.image_url,
        };
        Some(slot)
    }
}
