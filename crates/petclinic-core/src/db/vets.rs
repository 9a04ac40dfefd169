//! Vet database operations.

use rusqlite::{params, OptionalExtension};
use std::collections::BTreeMap;

use super::{Database, DbResult};
use crate::models::{Specialty, Vet};

impl Database {
    /// Insert a vet with its specialties, returning the vet ID.
    ///
    /// Specialties are matched by name and created when missing.
    pub fn insert_vet(&self, vet: &Vet) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO vets (first_name, last_name) VALUES (?1, ?2)",
            params![vet.first_name, vet.last_name],
        )?;
        let vet_id = self.conn.last_insert_rowid();

        for specialty in &vet.specialties {
            let specialty_id = self.ensure_specialty(&specialty.name)?;
            self.conn.execute(
                "INSERT OR IGNORE INTO vet_specialties (vet_id, specialty_id) VALUES (?1, ?2)",
                params![vet_id, specialty_id],
            )?;
        }

        Ok(vet_id)
    }

    /// List all vets with their specialties, ordered by last name.
    pub fn list_vets(&self) -> DbResult<Vec<Vet>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT v.id, v.first_name, v.last_name, s.id, s.name
            FROM vets v
            LEFT JOIN vet_specialties vs ON vs.vet_id = v.id
            LEFT JOIN specialties s ON s.id = vs.specialty_id
            ORDER BY v.last_name, v.first_name, v.id, s.name
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            let vet = Vet::new(row.get(0)?, row.get(1)?, row.get(2)?);
            let specialty_id: Option<i64> = row.get(3)?;
            let specialty_name: Option<String> = row.get(4)?;
            let specialty = specialty_id
                .zip(specialty_name)
                .map(|(id, name)| Specialty { id, name });
            Ok((vet, specialty))
        })?;

        // Rows arrive grouped by vet; fold the join back into one Vet each.
        let mut order = Vec::new();
        let mut vets: BTreeMap<i64, Vet> = BTreeMap::new();
        for row in rows {
            let (vet, specialty) = row?;
            let entry = vets.entry(vet.id).or_insert_with(|| {
                order.push(vet.id);
                vet
            });
            if let Some(specialty) = specialty {
                entry.specialties.push(specialty);
            }
        }

        Ok(order
            .into_iter()
            .filter_map(|id| vets.remove(&id))
            .collect())
    }

    fn ensure_specialty(&self, name: &str) -> DbResult<i64> {
        let existing: Option<i64> = self
            .conn
            .query_row("SELECT id FROM specialties WHERE name = ?", [name], |row| {
                row.get(0)
            })
            .optional()?;

        match existing {
            Some(id) => Ok(id),
            None => {
                self.conn
                    .execute("INSERT INTO specialties (name) VALUES (?)", [name])?;
                Ok(self.conn.last_insert_rowid())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specialty(name: &str) -> Specialty {
        Specialty {
            id: 0,
            name: name.into(),
        }
    }

    #[test]
    fn test_list_vets_with_specialties() {
        let db = Database::open_in_memory().unwrap();

        let mut douglas = Vet::new(0, "Linda".into(), "Douglas".into());
        douglas.specialties = vec![specialty("surgery"), specialty("dentistry")];
        db.insert_vet(&douglas).unwrap();

        let mut carter = Vet::new(0, "James".into(), "Carter".into());
        carter.specialties = vec![];
        db.insert_vet(&carter).unwrap();

        let mut leary = Vet::new(0, "Helen".into(), "Leary".into());
        leary.specialties = vec![specialty("radiology"), specialty("surgery")];
        db.insert_vet(&leary).unwrap();

        let vets = db.list_vets().unwrap();
        let names: Vec<_> = vets.iter().map(|v| v.last_name.as_str()).collect();
        assert_eq!(names, vec!["Carter", "Douglas", "Leary"]);

        assert!(vets[0].specialties.is_empty());
        let douglas: Vec<_> = vets[1].specialties.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(douglas, vec!["dentistry", "surgery"]);

        // "surgery" is shared, not duplicated
        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM specialties", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_list_vets_empty() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.list_vets().unwrap().is_empty());
    }
}
