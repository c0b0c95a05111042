//! Validation rules of the activity form.
//!
//! [`check`] evaluates every field of a [`FormValues`] bag and either builds
//! the normalized [`Activity`] or returns one message per failing field. For
//! each field the rules run in a fixed order and the first failure wins; one
//! field failing never stops the others from being checked.

use std::{collections::BTreeMap, fmt};

use jiff::civil::Date;

use super::{Field, FormValues};
use crate::models::{Activity, ActivityStatus, ActivityType};

const MIN_TITLE_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 10;
const MIN_PARTICIPANTS: f64 = 1.0;

/// Category of a field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// Missing, empty or unparsable value
    Required,
    /// Text shorter than the minimum length
    TooShort,
    /// Value outside an enumerated set
    InvalidEnum,
    /// Number below the allowed minimum
    RangeViolation,
    /// End date before start date
    OrderingViolation,
}

/// A field validation failure with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Mapping from field to its single current error, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The error recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// The error category recorded for `field`, if any.
    pub fn kind(&self, field: Field) -> Option<FieldErrorKind> {
        self.get(field).map(|error| error.kind)
    }

    /// Whether `field` has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Iterate over `(field, error)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Keep only the errors of fields accepted by `keep`.
    pub(crate) fn filtered(&self, keep: impl Fn(Field) -> bool) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(field, _)| keep(**field))
                .map(|(field, error)| (*field, error.clone()))
                .collect(),
        )
    }

    fn take<T>(&mut self, field: Field, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.0.insert(field, error);
                None
            }
        }
    }
}

/// Validate every field and build the normalized record.
///
/// On success the record keeps the form's `id`, turns an empty `image_url`
/// into `None` and carries the parsed dates and participant count.
pub fn check(values: &FormValues) -> Result<Activity, FieldErrors> {
    let mut errors = FieldErrors::default();
    let (start, end) = date_range(values);

    let title = errors.take(
        Field::Title,
        min_chars(&values.title, MIN_TITLE_CHARS, Field::Title),
    );
    let description = errors.take(
        Field::Description,
        min_chars(&values.description, MIN_DESCRIPTION_CHARS, Field::Description),
    );
    let kind = errors.take(
        Field::Type,
        one_of(&values.kind, Field::Type, &ActivityType::ALL, ActivityType::as_str),
    );
    let status = errors.take(
        Field::Status,
        one_of(&values.status, Field::Status, &ActivityStatus::ALL, ActivityStatus::as_str),
    );
    let start_date = errors.take(Field::StartDate, start);
    let end_date = errors.take(Field::EndDate, end);
    let location = errors.take(Field::Location, required(&values.location, Field::Location));
    let coordinator = errors.take(
        Field::Coordinator,
        required(&values.coordinator, Field::Coordinator),
    );
    let participants = errors.take(Field::Participants, participant_count(&values.participants));
    let tags = errors.take(Field::Tags, tag_list(&values.tags));

    let (
        Some(title),
        Some(description),
        Some(kind),
        Some(status),
        Some(start_date),
        Some(end_date),
        Some(location),
        Some(coordinator),
        Some(participants),
        Some(tags),
    ) = (
        title,
        description,
        kind,
        status,
        start_date,
        end_date,
        location,
        coordinator,
        participants,
        tags,
    )
    else {
        return Err(errors);
    };

    Ok(Activity {
        id: values.id.clone(),
        title,
        description,
        kind,
        status,
        start_date,
        end_date,
        location,
        coordinator,
        participants,
        tags,
        image_url: Some(values.image_url.clone()).filter(|url| !url.is_empty()),
    })
}

/// Validate every field, discarding the normalized record.
pub fn validate(values: &FormValues) -> FieldErrors {
    check(values).err().unwrap_or_default()
}

type DateCheck = Result<Date, FieldError>;

/// Start and end date. The end is only compared once both parse.
fn date_range(values: &FormValues) -> (DateCheck, DateCheck) {
    let start = date(&values.start_date, Field::StartDate);
    let end = date(&values.end_date, Field::EndDate).and_then(|end| match &start {
        Ok(start) if end < *start => Err(FieldError::new(
            FieldErrorKind::OrderingViolation,
            "End date must be on or after the start date",
        )),
        _ => Ok(end),
    });
    (start, end)
}

fn is_required(field: Field) -> FieldError {
    FieldError::new(
        FieldErrorKind::Required,
        format!("{} is required", field.label()),
    )
}

fn required(value: &str, field: Field) -> Result<String, FieldError> {
    if value.is_empty() {
        return Err(is_required(field));
    }
    Ok(value.to_string())
}

fn min_chars(value: &str, min: usize, field: Field) -> Result<String, FieldError> {
    let value = required(value, field)?;
    if value.chars().count() < min {
        return Err(FieldError::new(
            FieldErrorKind::TooShort,
            format!("{} must be at least {min} characters", field.label()),
        ));
    }
    Ok(value)
}

/// Exact match against the canonical names of `members`.
fn one_of<T: Copy>(
    value: &str,
    field: Field,
    members: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, FieldError> {
    required(value, field)?;
    members
        .iter()
        .copied()
        .find(|member| name(member) == value)
        .ok_or_else(|| {
            FieldError::new(
                FieldErrorKind::InvalidEnum,
                format!("Invalid {}", field.label().to_lowercase()),
            )
        })
}

fn date(value: &str, field: Field) -> Result<Date, FieldError> {
    value
        .trim()
        .parse::<Date>()
        .map_err(|_| is_required(field))
}

/// Any finite number is accepted as long as it is a whole count of at least
/// one that fits in `u32`; `2.0` counts as 2.
fn participant_count(value: &str) -> Result<u32, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(is_required(Field::Participants));
    }
    let count = value
        .parse::<f64>()
        .ok()
        .filter(|count| count.is_finite())
        .ok_or_else(|| {
            FieldError::new(
                FieldErrorKind::Required,
                "Participants must be a number",
            )
        })?;

    if count < MIN_PARTICIPANTS {
        return Err(FieldError::new(
            FieldErrorKind::RangeViolation,
            "There must be at least 1 participant",
        ));
    }
    if count.fract() != 0.0 {
        return Err(FieldError::new(
            FieldErrorKind::RangeViolation,
            "Participants must be a whole number",
        ));
    }
    if count > f64::from(u32::MAX) {
        return Err(FieldError::new(
            FieldErrorKind::RangeViolation,
            format!("Participants cannot exceed {}", u32::MAX),
        ));
    }
    Ok(count as u32)
}

fn tag_list(tags: &[String]) -> Result<Vec<String>, FieldError> {
    if tags.is_empty() {
        return Err(FieldError::new(
            FieldErrorKind::Required,
            "Add at least one tag",
        ));
    }
    Ok(tags.to_vec())
}
