//! Error report for a rejected activity form.

use std::fmt;

use crate::form::ActivityForm;

/// Renders the visible errors of an activity form, one bullet per field.
///
/// After a submit attempt every field is touched, so the report lists every
/// problem that blocked the submission, in field order.
pub struct FormReport<'a>(pub &'a ActivityForm);

impl fmt::Display for FormReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;
        let errors = form.visible_errors();

        writeln!(f, "## {}", form.title())?;
        writeln!(f)?;

        if errors.is_empty() {
            return writeln!(f, "No problems found.");
        }

        writeln!(f, "Please correct the following fields:")?;
        writeln!(f)?;
        for (field, error) in errors.iter() {
            writeln!(f, "- **{}**: {error}", field.label())?;
        }

        Ok(())
    }
}
