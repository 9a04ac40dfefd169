//! Pet models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::visit::Visit;

/// A pet belonging to an owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Row ID
    pub id: i64,
    /// Owning client
    pub owner_id: i64,
    /// Pet name
    pub name: String,
    /// Date of birth
    pub birth_date: Option<NaiveDate>,
    /// Kind of animal (e.g., "cat", "dog")
    pub pet_type: String,
    /// Visit history, loaded per request for display only
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Create a pet with required fields and no visit history.
    pub fn new(id: i64, owner_id: i64, name: String, pet_type: String) -> Self {
        Self {
            id,
            owner_id,
            name,
            birth_date: None,
            pet_type,
            visits: Vec::new(),
        }
    }

    /// Replace the transient visit history.
    ///
    /// Accepts visits in any order and stores them newest first, later IDs
    /// first on the same day, matching `Database::list_visits_for_pet`.
    pub fn set_visits(&mut self, mut visits: Vec<Visit>) {
        visits.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        self.visits = visits;
    }
}
