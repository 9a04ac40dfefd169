//! Owner database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::Owner;

impl Database {
    /// Insert an owner, returning the assigned ID.
    pub fn insert_owner(&self, owner: &Owner) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO owners (first_name, last_name, address, city, telephone)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                owner.first_name,
                owner.last_name,
                owner.address,
                owner.city,
                owner.telephone,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get an owner by ID. Pets are not loaded.
    pub fn get_owner(&self, id: i64) -> DbResult<Option<Owner>> {
        self.conn
            .query_row(
                r#"
                SELECT id, first_name, last_name, address, city, telephone
                FROM owners
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(Owner {
                        id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        address: row.get(3)?,
                        city: row.get(4)?,
                        telephone: row.get(5)?,
                        pets: Vec::new(),
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Count stored owners.
    pub fn count_owners(&self) -> DbResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM owners", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let db = setup_db();

        let mut owner = Owner::new(0, "George".into(), "Franklin".into());
        owner.city = "Madison".into();
        owner.telephone = "6085551023".into();

        let id = db.insert_owner(&owner).unwrap();

        let retrieved = db.get_owner(id).unwrap().unwrap();
        assert_eq!(retrieved.id, id);
        assert_eq!(retrieved.first_name, "George");
        assert_eq!(retrieved.city, "Madison");
        assert!(retrieved.pets.is_empty());
    }

    #[test]
    fn test_get_missing_owner() {
        let db = setup_db();
        assert!(db.get_owner(404).unwrap().is_none());
    }

    #[test]
    fn test_count_owners() {
        let db = setup_db();
        assert_eq!(db.count_owners().unwrap(), 0);

        db.insert_owner(&Owner::new(0, "Betty".into(), "Davis".into()))
            .unwrap();
        assert_eq!(db.count_owners().unwrap(), 1);
    }
}
