//! Visit database operations.

use rusqlite::{params, OptionalExtension};

use super::{parse_date, Database, DbError, DbResult};
use crate::models::{Visit, DATE_FORMAT};

impl Database {
    /// Save a visit, returning its ID.
    ///
    /// A visit without an ID is inserted and gets a fresh one. A visit with
    /// an ID is upserted under that ID, so saving never duplicates a row.
    pub fn save_visit(&self, visit: &Visit) -> DbResult<i64> {
        let date = visit.date.format(DATE_FORMAT).to_string();

        match visit.id {
            None => {
                self.conn.execute(
                    r#"
                    INSERT INTO visits (pet_id, visit_date, description, status)
                    VALUES (?1, ?2, ?3, ?4)
                    "#,
                    params![visit.pet_id, date, visit.description, visit.status],
                )?;
                Ok(self.conn.last_insert_rowid())
            }
            Some(id) => {
                self.conn.execute(
                    r#"
                    INSERT INTO visits (id, pet_id, visit_date, description, status)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    ON CONFLICT(id) DO UPDATE SET
                        pet_id = excluded.pet_id,
                        visit_date = excluded.visit_date,
                        description = excluded.description,
                        status = excluded.status
                    "#,
                    params![id, visit.pet_id, date, visit.description, visit.status],
                )?;
                Ok(id)
            }
        }
    }

    /// Get a visit by ID.
    pub fn get_visit(&self, id: i64) -> DbResult<Option<Visit>> {
        self.conn
            .query_row(
                r#"
                SELECT id, pet_id, visit_date, description, status
                FROM visits
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(VisitRow {
                        id: row.get(0)?,
                        pet_id: row.get(1)?,
                        visit_date: row.get(2)?,
                        description: row.get(3)?,
                        status: row.get(4)?,
                    })
                },
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List all visits for a pet, newest first.
    pub fn list_visits_for_pet(&self, pet_id: i64) -> DbResult<Vec<Visit>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, pet_id, visit_date, description, status
            FROM visits
            WHERE pet_id = ?
            ORDER BY visit_date DESC, id DESC
            "#,
        )?;

        let rows = stmt.query_map([pet_id], |row| {
            Ok(VisitRow {
                id: row.get(0)?,
                pet_id: row.get(1)?,
                visit_date: row.get(2)?,
                description: row.get(3)?,
                status: row.get(4)?,
            })
        })?;

        let mut visits = Vec::new();
        for row in rows {
            visits.push(row?.try_into()?);
        }
        Ok(visits)
    }

    /// Count stored visits.
    pub fn count_visits(&self) -> DbResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM visits", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Intermediate row struct for database mapping.
struct VisitRow {
    id: i64,
    pet_id: i64,
    visit_date: String,
    description: String,
    status: i32,
}

impl TryFrom<VisitRow> for Visit {
    type Error = DbError;

    fn try_from(row: VisitRow) -> Result<Self, Self::Error> {
        Ok(Visit {
            id: Some(row.id),
            pet_id: row.pet_id,
            date: parse_date("visit_date", &row.visit_date)?,
            description: row.description,
            status: row.status,
        })
    }
}
