//! Activity form controller.
//!
//! [`ActivityForm`] is the state machine behind the create/edit activity form.
//! A rendering layer feeds it discrete events (a field changed, a field lost
//! focus, a tag was added or removed, submit, cancel) and reads back values and
//! errors. The form performs no I/O: a successful submit hands the normalized
//! [`Activity`] to a [`SubmitHandler`] and cancelling asks a [`Navigator`] to
//! go back.
//!
//! # Error visibility
//!
//! Errors are recomputed for the whole record after every change, because the
//! end date depends on the start date. They are only *shown* for fields that
//! have been touched (lost focus at least once) or after a submit attempt.
//!
//! # Lifecycle
//!
//! ```text
//! Pristine ──change──▶ Editing ──submit──▶ Invalid ──change──▶ Editing
//!                         │
//!                         └──submit──▶ Submitted ──change──▶ Editing
//! ```
//!
//! The [`FormMode`] (create or edit) is chosen at construction and never
//! changes.
//!
//! # Examples
//!
//! ```rust
//! use campus_core::{
//!     form::{ActivityForm, Field, FieldErrorKind},
//!     models::Activity,
//! };
//!
//! let mut form = ActivityForm::new();
//! form.set_field(Field::Title, "AI")?;
//! form.touch_field(Field::Title);
//! assert_eq!(form.errors().kind(Field::Title), Some(FieldErrorKind::TooShort));
//!
//! form.set_field(Field::Title, "AI Workshop")?;
//! assert!(form.error(Field::Title).is_none());
//!
//! let mut submitted: Vec<Activity> = Vec::new();
//! let outcome = form.submit(&mut |activity: Activity| submitted.push(activity));
//! assert!(!outcome.is_accepted());
//! assert!(submitted.is_empty());
//! # campus_core::Result::<()>::Ok(())
//! ```

use std::collections::BTreeSet;

use log::debug;

pub mod field;
pub mod rules;
pub mod values;


pub use field::{Field, FieldValue};
pub use rules::{FieldError, FieldErrorKind, FieldErrors};
pub use values::FormValues;

use crate::{
    error::Result,
    models::Activity,
    source::{ActivitySource, Navigator, SubmitHandler},
};

/// Whether the form creates a new activity or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Where the form is in its edit/submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing changed since construction
    Pristine,
    /// At least one value changed since the last submit attempt
    Editing,
    /// The last submit attempt found errors
    Invalid,
    /// The last submit attempt reached the handler
    Submitted,
}

/// Outcome of [`ActivityForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The handler received the normalized record
    Accepted,
    /// Validation failed; the handler was not called
    Rejected(FieldErrors),
}

impl Submission {
    /// Whether the handler was invoked.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted)
    }
}

/// State of one create/edit activity form.
#[derive(Debug, Clone)]
pub struct ActivityForm {
    mode: FormMode,
    phase: FormPhase,
    values: FormValues,
    tag_draft: String,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityForm {
    /// Creates an empty form in create mode.
    pub fn new() -> Self {
        Self::with_values(FormMode::Create, FormValues::default())
    }

    /// Creates a form in edit mode, pre-populated from `activity`.
    ///
    /// An absent `image_url` becomes the empty string.
    pub fn edit(activity: &Activity) -> Self {
        Self::with_values(
            FormMode::Edit {
                id: activity.id.clone(),
            },
            FormValues::from(activity),
        )
    }

    /// Looks up `id` in `source` and opens it in edit mode.
    ///
    /// Returns `Ok(None)` when the activity does not exist, which callers
    /// should present as "not found" rather than as a form error.
    pub fn load<S>(source: &S, id: &str) -> Result<Option<Self>>
    where
        S: ActivitySource + ?Sized,
    {
        Ok(source.find_activity(id)?.as_ref().map(Self::edit))
    }

    fn with_values(mode: FormMode, values: FormValues) -> Self {
        let errors = rules::validate(&values);
        Self {
            mode,
            phase: FormPhase::Pristine,
            values,
            tag_draft: String::new(),
            touched: BTreeSet::new(),
            errors,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Committed tags, in insertion order.
    pub fn tags(&self) -> &[String] {
        &self.values.tags
    }

    pub fn tag_draft(&self) -> &str {
        &self.tag_draft
    }

    /// Heading for the form.
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New Activity",
            FormMode::Edit { .. } => "Edit Activity",
        }
    }

    /// Label of the submit action.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Activity",
            FormMode::Edit { .. } => "Save Changes",
        }
    }

    /// Replaces the value of `field` and re-validates the whole record.
    ///
    /// # Errors
    ///
    /// * `CampusError::InvalidInput` - When the value does not fit the field
    ///   or `field` is the identifier. The form is left unchanged.
    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<()> {
        self.values.set(field, value.into())?;
        self.changed();
        Ok(())
    }

    /// Marks `field` as touched so its error becomes visible.
    pub fn touch_field(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Replaces the tag draft buffer.
    pub fn set_tag_draft(&mut self, text: impl Into<String>) {
        self.tag_draft = text.into();
    }

    /// Appends `text` to the tags unless it is empty or already present.
    ///
    /// On success the draft buffer is cleared. Returns whether a tag was added.
    pub fn add_tag(&mut self, text: &str) -> bool {
        if !self.values.push_tag(text) {
            return false;
        }
        self.tag_draft.clear();
        self.changed();
        true
    }

    /// Commits the draft buffer as a tag.
    pub fn commit_tag_draft(&mut self) -> bool {
        let draft = std::mem::take(&mut self.tag_draft);
        let added = self.add_tag(&draft);
        if !added {
            self.tag_draft = draft;
        }
        added
    }

    /// Removes `text` from the tags. Returns whether a tag was removed.
    pub fn remove_tag(&mut self, text: &str) -> bool {
        if !self.values.remove_tag(text) {
            return false;
        }
        self.changed();
        true
    }

    /// Every current error, visible or not.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Errors of touched fields only.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors.filtered(|field| self.touched.contains(&field))
    }

    /// The visible error of one field.
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Whether the current values would be accepted by [`Self::submit`].
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Attempts to submit the form.
    ///
    /// Every field becomes touched and the record is re-validated. When there
    /// are no errors `handler` is called exactly once with the normalized
    /// record; otherwise it is not called and the full error set becomes
    /// visible.
    pub fn submit<H>(&mut self, handler: &mut H) -> Submission
    where
        H: SubmitHandler + ?Sized,
    {
        self.touched.extend(Field::ALL);

        match rules::check(&self.values) {
            Ok(activity) => {
                debug!("Activity form accepted ({:?})", self.mode);
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Submitted;
                handler.on_submit(activity);
                Submission::Accepted
            }
            Err(errors) => {
                debug!("Activity form rejected with {} error(s)", errors.len());
                self.errors = errors.clone();
                self.phase = FormPhase::Invalid;
                Submission::Rejected(errors)
            }
        }
    }

    /// Abandons the form by asking `navigator` to go back.
    pub fn cancel<N>(&self, navigator: &mut N)
    where
        N: Navigator + ?Sized,
    {
        navigator.back();
    }

    fn changed(&mut self) {
        self.errors = rules::validate(&self.values);
        self.phase = FormPhase::Editing;
    }
}
