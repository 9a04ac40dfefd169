//! Veterinarian reference data.

use serde::{Deserialize, Serialize};

/// A veterinary specialty (e.g., "radiology").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
}

/// A veterinarian, shown alongside every visit form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vet {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Specialties, sorted by name
    pub specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(id: i64, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            specialties: Vec::new(),
        }
    }
}
