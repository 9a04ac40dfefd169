//! Visit form binding and validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Visit, DATE_FORMAT};

/// Raw visit fields as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitForm {
    /// Submitted visit ID. Never trusted: new visits are inserted and
    /// edits use the ID from the path.
    #[serde(default)]
    pub id: Option<String>,
    /// `YYYY-MM-DD`; blank means today
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
    /// The value as submitted, for redisplay
    pub rejected_value: Option<String>,
}

/// Binding/validation result for a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Record a rejected field.
    pub fn reject(&mut self, field: &'static str, message: &str, rejected_value: Option<&str>) {
        self.0.push(FieldError {
            field,
            message: message.to_string(),
            rejected_value: rejected_value.map(str::to_string),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the error for a field.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Names of the rejected fields, in rejection order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }
}

impl VisitForm {
    /// Copy the submitted fields onto `target` and validate them.
    ///
    /// The visit is returned even when invalid so the form can be shown
    /// again with what the user typed. A date that fails to parse leaves
    /// `target.date` untouched; the raw text is kept on the field error.
    pub fn bind(&self, mut target: Visit) -> (Visit, FieldErrors) {
        let mut errors = FieldErrors::default();

        match self.date.as_deref().map(str::trim) {
            None | Some("") => {}
            Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => target.date = date,
                Err(_) => errors.reject("date", "invalid date", Some(raw)),
            },
        }

        let description = self.description.clone().unwrap_or_default();
        if description.is_empty() {
            errors.reject("description", "must not be empty", Some(&description));
        }
        target.description = description;

        (target, errors)
    }

    /// Submitted ID, if it parses as one.
    pub fn submitted_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(|id| id.trim().parse().ok())
    }
}
