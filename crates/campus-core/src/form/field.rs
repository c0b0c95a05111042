//! Field names and values of the activity form.

use std::{fmt, str::FromStr};

use jiff::civil::Date;

use crate::models::{ActivityStatus, ActivityType};

/// One named attribute of an activity.
///
/// The declaration order is the order in which fields are validated and
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    Title,
    Description,
    Type,
    Status,
    StartDate,
    EndDate,
    Location,
    Coordinator,
    Participants,
    Tags,
    ImageUrl,
}

impl Field {
    /// Every field, in validation order.
    pub const ALL: [Field; 12] = [
        Field::Id,
        Field::Title,
        Field::Description,
        Field::Type,
        Field::Status,
        Field::StartDate,
        Field::EndDate,
        Field::Location,
        Field::Coordinator,
        Field::Participants,
        Field::Tags,
        Field::ImageUrl,
    ];

    /// Wire name of the field (camelCase, as in the serialized record).
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Description => "description",
            Field::Type => "type",
            Field::Status => "status",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::Location => "location",
            Field::Coordinator => "coordinator",
            Field::Participants => "participants",
            Field::Tags => "tags",
            Field::ImageUrl => "imageUrl",
        }
    }

    /// Label used in messages and rendered forms.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Type => "Type",
            Field::Status => "Status",
            Field::StartDate => "Start date",
            Field::EndDate => "End date",
            Field::Location => "Location",
            Field::Coordinator => "Coordinator",
            Field::Participants => "Participants",
            Field::Tags => "Tags",
            Field::ImageUrl => "Image URL",
        }
    }

    /// Whether the field holds a tag list rather than text.
    pub fn is_list(&self) -> bool {
        matches!(self, Field::Tags)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts camelCase, snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        Field::ALL
            .into_iter()
            .find(|field| field.name().to_lowercase() == key)
            .ok_or_else(|| format!("Unknown field: {s}"))
    }
}

/// A value assigned to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Raw text, as typed into an input
    Text(String),
    /// Complete tag list
    Tags(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Date> for FieldValue {
    fn from(value: Date) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<ActivityType> for FieldValue {
    fn from(value: ActivityType) -> Self {
        FieldValue::Text(value.as_str().to_string())
    }
}

impl From<ActivityStatus> for FieldValue {
    fn from(value: ActivityStatus) -> Self {
        FieldValue::Text(value.as_str().to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::Tags(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::Tags(value.into_iter().map(String::from).collect())
    }
}
