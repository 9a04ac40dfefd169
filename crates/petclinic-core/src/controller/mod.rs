//! Request handling for visits and owners.
//!
//! Controllers take path IDs and bound form data, talk to a
//! [`ClinicRepository`](crate::repository::ClinicRepository), and return an
//! [`Outcome`]: a view to render or a location to redirect to. Nothing here
//! knows about HTTP; the web crate maps outcomes to responses and adds the
//! vet list to every rendered model.

mod context;
mod form;
mod owners;
mod visits;

pub use context::*;
pub use form::*;
pub use owners::*;
pub use visits::*;

use serde::Serialize;

use crate::models::{Owner, Pet, Visit};
use crate::{ClinicError, ClinicResult};

/// View for creating and editing a visit.
pub const VISIT_FORM_VIEW: &str = "pets/createOrUpdateVisitForm";

/// View for an owner with their pets and visits.
pub const OWNER_DETAILS_VIEW: &str = "owners/ownerDetails";

/// Named values handed to the view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<Pet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit: Option<Visit>,
    pub errors: FieldErrors,
}

/// Result of a controller operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Render `view` with `model`
    Render {
        view: &'static str,
        model: ViewModel,
    },
    /// Send the browser to a path
    Redirect(String),
}

impl Outcome {
    /// Redirect to an owner's details page.
    pub fn redirect_to_owner(owner_id: i64) -> Self {
        Outcome::Redirect(format!("/owners/{}", owner_id))
    }

    /// Get the redirect target, if this is a redirect.
    pub fn location(&self) -> Option<&str> {
        match self {
            Outcome::Redirect(location) => Some(location),
            Outcome::Render { .. } => None,
        }
    }

    /// Get the model, if this is a render.
    pub fn model(&self) -> Option<&ViewModel> {
        match self {
            Outcome::Render { model, .. } => Some(model),
            Outcome::Redirect(_) => None,
        }
    }
}

/// Turn a missing row into a not-found error.
fn require<T>(found: Option<T>, entity: &'static str, id: i64) -> ClinicResult<T> {
    found.ok_or(ClinicError::NotFound { entity, id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_to_owner() {
        let outcome = Outcome::redirect_to_owner(5);
        assert_eq!(outcome.location(), Some("/owners/5"));
        assert!(outcome.model().is_none());
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some(1), "Pet", 3).unwrap(), 1);

        let err = require::<i32>(None, "Pet", 3).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Pet 3 not found");
    }
}
