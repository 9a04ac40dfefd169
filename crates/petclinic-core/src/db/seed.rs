//! Sample clinic data for fresh databases.

use chrono::NaiveDate;
use tracing::info;

use super::{Database, DbResult};
use crate::models::{Owner, Pet, Specialty, Vet, Visit, STATUS_ACTIVE};

const OWNERS: &[(&str, &str, &str, &str, &str)] = &[
    ("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    ("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    ("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    ("Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    ("Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
];

/// (owner index, name, birth date, type)
const PETS: &[(usize, &str, (i32, u32, u32), &str)] = &[
    (0, "Leo", (2010, 9, 7), "cat"),
    (1, "Basil", (2012, 8, 6), "hamster"),
    (2, "Rosy", (2011, 4, 17), "dog"),
    (2, "Jewel", (2010, 3, 7), "dog"),
    (3, "Iggy", (2010, 11, 30), "lizard"),
    (4, "George", (2010, 1, 20), "snake"),
];

/// (pet index, date, description)
const VISITS: &[(usize, (i32, u32, u32), &str)] = &[
    (0, (2013, 1, 1), "rabies shot"),
    (2, (2013, 1, 2), "rabies shot"),
    (2, (2013, 1, 3), "neutered"),
    (3, (2013, 1, 4), "spayed"),
];

const VETS: &[(&str, &str, &[&str])] = &[
    ("James", "Carter", &[]),
    ("Helen", "Leary", &["radiology"]),
    ("Linda", "Douglas", &["surgery", "dentistry"]),
    ("Rafael", "Ortega", &["surgery"]),
    ("Henry", "Stevens", &["radiology"]),
    ("Sharon", "Jenkins", &[]),
];

impl Database {
    /// Load the sample owners, pets, visits and vets.
    ///
    /// Returns `false` without writing anything if owners already exist.
    pub fn seed_sample_data(&self) -> DbResult<bool> {
        if self.count_owners()? > 0 {
            return Ok(false);
        }

        let tx = self.conn.unchecked_transaction()?;

        let mut owner_ids = Vec::with_capacity(OWNERS.len());
        for (first, last, address, city, telephone) in OWNERS {
            let mut owner = Owner::new(0, first.to_string(), last.to_string());
            owner.address = address.to_string();
            owner.city = city.to_string();
            owner.telephone = telephone.to_string();
            owner_ids.push(self.insert_owner(&owner)?);
        }

        let mut pet_ids = Vec::with_capacity(PETS.len());
        for (owner, name, (y, m, d), pet_type) in PETS {
            let mut pet = Pet::new(0, owner_ids[*owner], name.to_string(), pet_type.to_string());
            pet.birth_date = NaiveDate::from_ymd_opt(*y, *m, *d);
            pet_ids.push(self.insert_pet(&pet)?);
        }

        for (pet, (y, m, d), description) in VISITS {
            let mut visit = Visit::new(pet_ids[*pet]);
            if let Some(date) = NaiveDate::from_ymd_opt(*y, *m, *d) {
                visit.date = date;
            }
            visit.description = description.to_string();
            visit.status = STATUS_ACTIVE;
            self.save_visit(&visit)?;
        }

        for (first, last, specialties) in VETS {
            let mut vet = Vet::new(0, first.to_string(), last.to_string());
            vet.specialties = specialties
                .iter()
                .map(|name| Specialty {
                    id: 0,
                    name: name.to_string(),
                })
                .collect();
            self.insert_vet(&vet)?;
        }

        tx.commit()?;

        info!(
            owners = OWNERS.len(),
            pets = PETS.len(),
            visits = VISITS.len(),
            vets = VETS.len(),
            "seeded sample data"
        );
        Ok(true)
    }
}
