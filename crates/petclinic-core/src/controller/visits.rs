//! Visit creation, editing and return.

use tracing::{debug, info, warn};

use super::{require, Outcome, ViewModel, VisitContext, VisitForm, VISIT_FORM_VIEW};
use crate::models::{Vet, STATUS_ACTIVE, STATUS_PENDING};
use crate::repository::ClinicRepository;
use crate::ClinicResult;

/// The only `action` value that marks an edited visit active.
pub const EDIT_ACTION: &str = "edit";

/// Handles the `/owners/{ownerId}/pets/{petId}/visits/...` operations.
///
/// Every operation starts with [`VisitContext::prepare`] for the path's pet
/// and performs at most one write.
pub struct VisitController<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R: ClinicRepository + ?Sized> VisitController<'a, R> {
    /// Create a new controller.
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Show an empty form for a new visit.
    pub fn init_new_visit_form(&self, owner_id: i64, pet_id: i64) -> ClinicResult<Outcome> {
        let context = VisitContext::prepare(self.repo, pet_id)?;
        let owner = require(self.repo.find_owner(owner_id)?, "Owner", owner_id)?;

        Ok(Outcome::Render {
            view: VISIT_FORM_VIEW,
            model: ViewModel {
                owner: Some(owner),
                pet: Some(context.pet),
                visit: Some(context.visit),
                ..Default::default()
            },
        })
    }

    /// Validate and insert a new visit.
    ///
    /// The redirect uses `owner_id` from the path; the owner is not looked up.
    pub fn process_new_visit_form(
        &self,
        owner_id: i64,
        pet_id: i64,
        form: &VisitForm,
    ) -> ClinicResult<Outcome> {
        let context = VisitContext::prepare(self.repo, pet_id)?;
        let (mut visit, errors) = form.bind(context.visit);

        if errors.has_errors() {
            warn!(pet_id, fields = ?errors.fields(), "rejected new visit");
            return Ok(Outcome::Render {
                view: VISIT_FORM_VIEW,
                model: ViewModel {
                    pet: Some(context.pet),
                    visit: Some(visit),
                    errors,
                    ..Default::default()
                },
            });
        }

        visit.status = STATUS_ACTIVE;
        let id = self.repo.save_visit(&visit)?;
        info!(visit_id = id, pet_id, status = visit.status, "created visit");

        Ok(Outcome::redirect_to_owner(owner_id))
    }

    /// Show the form filled in with an existing visit.
    pub fn init_edit_visit_form(
        &self,
        owner_id: i64,
        pet_id: i64,
        visit_id: i64,
    ) -> ClinicResult<Outcome> {
        let context = VisitContext::prepare(self.repo, pet_id)?;
        let owner = require(self.repo.find_owner(owner_id)?, "Owner", owner_id)?;
        let visit = require(self.repo.find_visit(visit_id)?, "Visit", visit_id)?;

        Ok(Outcome::Render {
            view: VISIT_FORM_VIEW,
            model: ViewModel {
                owner: Some(owner),
                pet: Some(context.pet),
                visit: Some(visit),
                ..Default::default()
            },
        })
    }

    /// Validate and save changes to an existing visit.
    ///
    /// The saved visit always carries `visit_id` from the path, whatever ID
    /// the form submitted. Status becomes active for the `edit` action and
    /// pending for any other value.
    pub fn process_edit_visit_form(
        &self,
        owner_id: i64,
        pet_id: i64,
        visit_id: i64,
        form: &VisitForm,
        action: &str,
    ) -> ClinicResult<Outcome> {
        let context = VisitContext::prepare(self.repo, pet_id)?;
        let (mut visit, errors) = form.bind(context.visit);

        if errors.has_errors() {
            warn!(visit_id, fields = ?errors.fields(), "rejected visit edit");
            return Ok(Outcome::Render {
                view: VISIT_FORM_VIEW,
                model: ViewModel {
                    pet: Some(context.pet),
                    visit: Some(visit),
                    errors,
                    ..Default::default()
                },
            });
        }

        if let Some(submitted) = form.submitted_id().filter(|id| *id != visit_id) {
            debug!(submitted, visit_id, "ignoring submitted visit id");
        }
        visit.id = Some(visit_id);
        visit.status = status_for_action(action);

        self.repo.save_visit(&visit)?;
        info!(visit_id, status = visit.status, action, "updated visit");

        Ok(Outcome::redirect_to_owner(owner_id))
    }

    /// Mark a visit active and go back to the owner page.
    ///
    /// `owner_id` is only used to fill the redirect; it is not looked up.
    pub fn init_return_visit_form(
        &self,
        owner_id: i64,
        pet_id: i64,
        visit_id: i64,
    ) -> ClinicResult<Outcome> {
        VisitContext::prepare(self.repo, pet_id)?;
        let mut visit = require(self.repo.find_visit(visit_id)?, "Visit", visit_id)?;

        let previous = visit.status;
        visit.status = STATUS_ACTIVE;
        self.repo.save_visit(&visit)?;
        info!(visit_id, previous, status = visit.status, "returned visit");

        Ok(Outcome::redirect_to_owner(owner_id))
    }

    /// Vets shown alongside every rendered form.
    pub fn vet_types(&self) -> ClinicResult<Vec<Vet>> {
        Ok(self.repo.find_vet_types()?)
    }
}

/// Status for an edit submission: active only for exactly `"edit"`.
pub fn status_for_action(action: &str) -> i32 {
    if action == EDIT_ACTION {
        STATUS_ACTIVE
    } else {
        STATUS_PENDING
    }
}
