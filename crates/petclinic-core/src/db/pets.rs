//! Pet database operations.

use rusqlite::{params, OptionalExtension};

use super::{parse_date, Database, DbError, DbResult};
use crate::models::{Pet, DATE_FORMAT};

impl Database {
    /// Insert a pet, returning the assigned ID. Visits are not stored.
    pub fn insert_pet(&self, pet: &Pet) -> DbResult<i64> {
        let birth_date = pet
            .birth_date
            .map(|d| d.format(DATE_FORMAT).to_string());

        self.conn.execute(
            r#"
            INSERT INTO pets (owner_id, name, birth_date, pet_type)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![pet.owner_id, pet.name, birth_date, pet.pet_type],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a pet by ID, without its visits.
    pub fn get_pet(&self, id: i64) -> DbResult<Option<Pet>> {
        self.conn
            .query_row(
                r#"
                SELECT id, owner_id, name, birth_date, pet_type
                FROM pets
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(PetRow {
                        id: row.get(0)?,
                        owner_id: row.get(1)?,
                        name: row.get(2)?,
                        birth_date: row.get(3)?,
                        pet_type: row.get(4)?,
                    })
                },
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List an owner's pets by name.
    pub fn list_pets_for_owner(&self, owner_id: i64) -> DbResult<Vec<Pet>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, owner_id, name, birth_date, pet_type
            FROM pets
            WHERE owner_id = ?
            ORDER BY name
            "#,
        )?;

        let rows = stmt.query_map([owner_id], |row| {
            Ok(PetRow {
                id: row.get(0)?,
                owner_id: row.get(1)?,
                name: row.get(2)?,
                birth_date: row.get(3)?,
                pet_type: row.get(4)?,
            })
        })?;

        let mut pets = Vec::new();
        for row in rows {
            pets.push(row?.try_into()?);
        }
        Ok(pets)
    }
}

/// Intermediate row struct for database mapping.
struct PetRow {
    id: i64,
    owner_id: i64,
    name: String,
    birth_date: Option<String>,
    pet_type: String,
}

impl TryFrom<PetRow> for Pet {
    type Error = DbError;

    fn try_from(row: PetRow) -> Result<Self, Self::Error> {
        let birth_date = row
            .birth_date
            .as_deref()
            .map(|d| parse_date("birth_date", d))
            .transpose()?;

        Ok(Pet {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            birth_date,
            pet_type: row.pet_type,
            visits: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;
    use chrono::NaiveDate;

    fn setup_db() -> (Database, i64) {
        let db = Database::open_in_memory().unwrap();
        let owner_id = db
            .insert_owner(&Owner::new(0, "George".into(), "Franklin".into()))
            .unwrap();
        (db, owner_id)
    }

    #[test]
    fn test_insert_and_get() {
        let (db, owner_id) = setup_db();

        let mut pet = Pet::new(0, owner_id, "Leo".into(), "cat".into());
        pet.birth_date = NaiveDate::from_ymd_opt(2020, 9, 7);
        let id = db.insert_pet(&pet).unwrap();

        let retrieved = db.get_pet(id).unwrap().unwrap();
        assert_eq!(retrieved.id, id);
        assert_eq!(retrieved.owner_id, owner_id);
        assert_eq!(retrieved.name, "Leo");
        assert_eq!(retrieved.birth_date, NaiveDate::from_ymd_opt(2020, 9, 7));
        assert!(retrieved.visits.is_empty());
    }

    #[test]
    fn test_get_missing_pet() {
        let (db, _) = setup_db();
        assert!(db.get_pet(404).unwrap().is_none());
    }

    #[test]
    fn test_list_pets_for_owner() {
        let (db, owner_id) = setup_db();
        let other_id = db
            .insert_owner(&Owner::new(0, "Betty".into(), "Davis".into()))
            .unwrap();

        db.insert_pet(&Pet::new(0, owner_id, "Rosy".into(), "dog".into()))
            .unwrap();
        db.insert_pet(&Pet::new(0, owner_id, "Jewel".into(), "dog".into()))
            .unwrap();
        db.insert_pet(&Pet::new(0, other_id, "Basil".into(), "hamster".into()))
            .unwrap();

        let pets = db.list_pets_for_owner(owner_id).unwrap();
        let names: Vec<_> = pets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Jewel", "Rosy"]);
    }

    #[test]
    fn test_bad_stored_birth_date() {
        let (db, owner_id) = setup_db();
        db.conn()
            .execute(
                "INSERT INTO pets (id, owner_id, name, birth_date, pet_type) VALUES (9, ?, 'Odd', 'not-a-date', 'cat')",
                [owner_id],
            )
            .unwrap();

        let result = db.get_pet(9);
        assert!(matches!(result, Err(DbError::Constraint(_))));
    }
}
