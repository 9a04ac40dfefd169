//! Owner models.

use serde::{Deserialize, Serialize};

use super::pet::Pet;

/// A clinic client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    /// Row ID
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    /// Pets, loaded only for the owner details page
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Create an owner with a name and no contact details.
    pub fn new(id: i64, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
            pets: Vec::new(),
        }
    }

    /// Display name ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
