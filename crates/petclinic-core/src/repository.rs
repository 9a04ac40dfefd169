//! Storage traits used by the controllers.
//!
//! Lookups return `Ok(None)` when the row does not exist; turning that into
//! a not-found response is the caller's job. [`Database`] implements all of
//! them.

use crate::db::{Database, DbResult};
use crate::models::{Owner, Pet, Vet, Visit};

/// Visit storage.
pub trait VisitRepository {
    fn find_visit(&self, id: i64) -> DbResult<Option<Visit>>;

    fn find_visits_by_pet_id(&self, pet_id: i64) -> DbResult<Vec<Visit>>;

    /// Insert when `visit.id` is `None`, otherwise upsert under that ID.
    /// Returns the visit's ID.
    fn save_visit(&self, visit: &Visit) -> DbResult<i64>;
}

/// Pet lookup.
pub trait PetRepository {
    fn find_pet(&self, id: i64) -> DbResult<Option<Pet>>;

    fn find_pets_by_owner_id(&self, owner_id: i64) -> DbResult<Vec<Pet>>;
}

/// Owner lookup.
pub trait OwnerRepository {
    fn find_owner(&self, id: i64) -> DbResult<Option<Owner>>;
}

/// Read-only vet listing for display.
pub trait VetRepository {
    fn find_vet_types(&self) -> DbResult<Vec<Vet>>;
}

/// Everything the clinic controllers need.
pub trait ClinicRepository: VisitRepository + PetRepository + OwnerRepository + VetRepository {}

impl<T> ClinicRepository for T where
    T: VisitRepository + PetRepository + OwnerRepository + VetRepository
{
}

impl VisitRepository for Database {
    fn find_visit(&self, id: i64) -> DbResult<Option<Visit>> {
        self.get_visit(id)
    }

    fn find_visits_by_pet_id(&self, pet_id: i64) -> DbResult<Vec<Visit>> {
        self.list_visits_for_pet(pet_id)
    }

    fn save_visit(&self, visit: &Visit) -> DbResult<i64> {
        Database::save_visit(self, visit)
    }
}

impl PetRepository for Database {
    fn find_pet(&self, id: i64) -> DbResult<Option<Pet>> {
        self.get_pet(id)
    }

    fn find_pets_by_owner_id(&self, owner_id: i64) -> DbResult<Vec<Pet>> {
        self.list_pets_for_owner(owner_id)
    }
}

impl OwnerRepository for Database {
    fn find_owner(&self, id: i64) -> DbResult<Option<Owner>> {
        self.get_owner(id)
    }
}

impl VetRepository for Database {
    fn find_vet_types(&self) -> DbResult<Vec<Vet>> {
        self.list_vets()
    }
}
