//! Shared first step of every visit operation.

use tracing::debug;

use super::require;
use crate::models::{Pet, Visit};
use crate::repository::{PetRepository, VisitRepository};
use crate::ClinicResult;

/// The pet a request is about, plus a fresh visit for it.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitContext {
    /// The pet, with its full visit history attached
    pub pet: Pet,
    /// Unsaved visit linked to the pet, dated today
    pub visit: Visit,
}

impl VisitContext {
    /// Load the pet and its visit history and create a new visit for it.
    ///
    /// Fails with `NotFound` if the pet does not exist.
    pub fn prepare<R>(repo: &R, pet_id: i64) -> ClinicResult<Self>
    where
        R: PetRepository + VisitRepository + ?Sized,
    {
        let mut pet = require(repo.find_pet(pet_id)?, "Pet", pet_id)?;
        pet.set_visits(repo.find_visits_by_pet_id(pet_id)?);
        debug!(pet_id, history = pet.visits.len(), "prepared visit context");

        let visit = Visit::new(pet.id);
        Ok(Self { pet, visit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::Owner;

    #[test]
    fn test_prepare_loads_history() {
        let db = Database::open_in_memory().unwrap();
        let owner_id = db
            .insert_owner(&Owner::new(0, "George".into(), "Franklin".into()))
            .unwrap();
        let pet_id = db
            .insert_pet(&Pet::new(0, owner_id, "Leo".into(), "cat".into()))
            .unwrap();

        let mut old = Visit::new(pet_id);
        old.description = "rabies shot".into();
        db.save_visit(&old).unwrap();

        let context = VisitContext::prepare(&db, pet_id).unwrap();
        assert_eq!(context.pet.id, pet_id);
        assert_eq!(context.pet.visits.len(), 1);
        assert_eq!(context.visit.pet_id, pet_id);
        assert!(context.visit.is_new());
    }

    #[test]
    fn test_prepare_missing_pet() {
        let db = Database::open_in_memory().unwrap();
        let err = VisitContext::prepare(&db, 3).unwrap_err();
        assert!(err.is_not_found());
    }
}
