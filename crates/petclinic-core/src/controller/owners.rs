//! Owner details page, the target of every visit redirect.

use super::{require, Outcome, ViewModel, OWNER_DETAILS_VIEW};
use crate::repository::ClinicRepository;
use crate::ClinicResult;

/// Read-only owner pages.
pub struct OwnerController<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R: ClinicRepository + ?Sized> OwnerController<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Show an owner with each pet and its visit history.
    pub fn show_owner(&self, owner_id: i64) -> ClinicResult<Outcome> {
        let mut owner = require(self.repo.find_owner(owner_id)?, "Owner", owner_id)?;

        let mut pets = self.repo.find_pets_by_owner_id(owner_id)?;
        for pet in &mut pets {
            pet.set_visits(self.repo.find_visits_by_pet_id(pet.id)?);
        }
        owner.pets = pets;

        Ok(Outcome::Render {
            view: OWNER_DETAILS_VIEW,
            model: ViewModel {
                owner: Some(owner),
                ..Default::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_show_owner_with_pets_and_visits() {
        let db = Database::open_in_memory().unwrap();
        db.seed_sample_data().unwrap();
        let controller = OwnerController::new(&db);

        // Eduardo Rodriquez: Jewel (1 visit) and Rosy (2 visits)
        let outcome = controller.show_owner(3).unwrap();
        let Outcome::Render { view, model } = outcome else {
            panic!("expected render");
        };
        assert_eq!(view, OWNER_DETAILS_VIEW);

        let owner = model.owner.unwrap();
        assert_eq!(owner.last_name, "Rodriquez");
        let visits: Vec<(&str, usize)> = owner
            .pets
            .iter()
            .map(|p| (p.name.as_str(), p.visits.len()))
            .collect();
        assert_eq!(visits, vec![("Jewel", 1), ("Rosy", 2)]);
    }

    #[test]
    fn test_show_missing_owner() {
        let db = Database::open_in_memory().unwrap();
        let controller = OwnerController::new(&db);

        assert!(controller.show_owner(404).unwrap_err().is_not_found());
    }
}
