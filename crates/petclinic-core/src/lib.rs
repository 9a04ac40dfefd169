//! Pet Clinic Core Library
//!
//! Visit records for a veterinary clinic: owners own pets, pets have visits.
//!
//! # Request Flow
//!
//! ```text
//! HTTP request (owner id, pet id, visit id, form fields)
//!         │
//!         ▼
//! VisitContext::prepare ── pet + visit history + fresh unsaved visit
//!         │
//!         ▼
//! VisitForm::bind ──────── visit + field errors
//!         │
//!    ┌────┴─────┐
//!    ▼          ▼
//! errors     valid ── set status ── save (one write)
//!    │                               │
//!    ▼                               ▼
//! Render form view            Redirect /owners/{ownerId}
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer
//! - [`models`]: Domain types (Owner, Pet, Visit, Vet)
//! - [`repository`]: Storage traits the controllers are written against
//! - [`controller`]: Visit and owner request handling, independent of HTTP

pub mod controller;
pub mod db;
pub mod models;
pub mod repository;

// Re-export commonly used types
pub use controller::{
    FieldError, FieldErrors, Outcome, OwnerController, ViewModel, VisitContext, VisitController,
    VisitForm,
};
pub use db::Database;
pub use models::{Owner, Pet, Specialty, Vet, Visit, STATUS_ACTIVE, STATUS_PENDING};
pub use repository::{
    ClinicRepository, OwnerRepository, PetRepository, VetRepository, VisitRepository,
};

use thiserror::Error;

/// Errors surfaced by the controllers.
#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] db::DbError),
}

pub type ClinicResult<T> = Result<T, ClinicError>;

impl ClinicError {
    /// Check if this error means a looked-up entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClinicError::NotFound { .. })
    }
}
