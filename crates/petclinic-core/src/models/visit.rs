//! Visit models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status written when a visit is edited with any action other than `edit`.
pub const STATUS_PENDING: i32 = 0;

/// Status written on creation, on an `edit` action and on return.
pub const STATUS_ACTIVE: i32 = 1;

/// Wire format for visit dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A pet's visit to the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// Row ID - None until the visit is first saved
    pub id: Option<i64>,
    /// Pet this visit belongs to
    pub pet_id: i64,
    /// Day of the visit
    pub date: NaiveDate,
    /// Free-text description
    pub description: String,
    /// Two-valued status flag (`STATUS_PENDING` or `STATUS_ACTIVE`)
    pub status: i32,
}

impl Visit {
    /// Create an unsaved visit for a pet, dated today.
    pub fn new(pet_id: i64) -> Self {
        Self {
            id: None,
            pet_id,
            date: chrono::Local::now().date_naive(),
            description: String::new(),
            status: STATUS_PENDING,
        }
    }

    /// Check if this visit has been persisted.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_visit() {
        let visit = Visit::new(3);
        assert_eq!(visit.pet_id, 3);
        assert!(visit.is_new());
        assert!(visit.description.is_empty());
        assert_eq!(visit.date, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let mut visit = Visit::new(1);
        visit.date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let json = serde_json::to_value(&visit).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["id"], serde_json::Value::Null);
    }
}
