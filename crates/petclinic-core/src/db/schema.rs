//! SQLite schema definition.

/// Complete database schema for the pet clinic.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Owners and Pets
-- ============================================================================

CREATE TABLE IF NOT EXISTS owners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    address TEXT NOT NULL DEFAULT '',
    city TEXT NOT NULL DEFAULT '',
    telephone TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_owners_last_name ON owners(last_name);

CREATE TABLE IF NOT EXISTS pets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id INTEGER NOT NULL REFERENCES owners(id),
    name TEXT NOT NULL,
    birth_date TEXT,                             -- YYYY-MM-DD
    pet_type TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_pets_owner ON pets(owner_id);

-- ============================================================================
-- Visits
-- ============================================================================

CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pet_id INTEGER NOT NULL REFERENCES pets(id),
    visit_date TEXT NOT NULL,                    -- YYYY-MM-DD
    description TEXT NOT NULL,
    status INTEGER NOT NULL DEFAULT 0 CHECK (status IN (0, 1))
);

CREATE INDEX IF NOT EXISTS idx_visits_pet ON visits(pet_id);

-- ============================================================================
-- Vets (read-only reference data)
-- ============================================================================

CREATE TABLE IF NOT EXISTS vets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS specialties (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS vet_specialties (
    vet_id INTEGER NOT NULL REFERENCES vets(id),
    specialty_id INTEGER NOT NULL REFERENCES specialties(id),
    PRIMARY KEY (vet_id, specialty_id)
);
"#;
