//! Activity CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{CampusError, DatabaseResultExt, Result},
    models::{Activity, ActivityFilter, ActivityStatus, ActivityType},
    source::ActivitySource,
};

const ACTIVITY_COLUMNS: &str = "id, title, description, type, status, start_date, end_date, location, coordinator, participants, tags, image_url";
const INSERT_ACTIVITY_SQL: &str = "INSERT INTO activities (title, description, type, status, start_date, end_date, location, coordinator, participants, tags, image_url, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const UPDATE_ACTIVITY_SQL: &str = "UPDATE activities SET title = ?1, description = ?2, type = ?3, status = ?4, start_date = ?5, end_date = ?6, location = ?7, coordinator = ?8, participants = ?9, tags = ?10, image_url = ?11, updated_at = ?12 WHERE id = ?13";
const CHECK_ACTIVITY_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM activities WHERE id = ?1)";
const DELETE_ACTIVITY_SQL: &str = "DELETE FROM activities WHERE id = ?1";

/// Identifiers are SQLite integer keys; anything else cannot exist.
fn row_id(id: &str) -> Option<i64> {
    id.trim().parse().ok()
}

fn conversion_error(column: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, message.into())
}

impl super::Database {
    /// Helper function to construct an Activity from a database row
    fn build_activity_from_row(row: &rusqlite::Row) -> rusqlite::Result<Activity> {
        let kind_str: String = row.get(3)?;
        let kind = kind_str
            .parse::<ActivityType>()
            .map_err(|_| conversion_error(3, format!("Invalid activity type: {kind_str}")))?;

        let status_str: String = row.get(4)?;
        let status = status_str
            .parse::<ActivityStatus>()
            .map_err(|_| conversion_error(4, format!("Invalid activity status: {status_str}")))?;

        let tags_json: String = row.get(10)?;
        let tags = serde_json::from_str::<Vec<String>>(&tags_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e)))?;

        Ok(Activity {
            id: row.get::<_, i64>(0)?.to_string(),
            title: row.get(1)?,
            description: row.get(2)?,
            kind,
            status,
            start_date: row.get::<_, String>(5)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            end_date: row.get::<_, String>(6)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            location: row.get(7)?,
            coordinator: row.get(8)?,
            participants: row.get(9)?,
            tags,
            image_url: row.get(11)?,
        })
    }

    /// Stores a new activity and returns it with its assigned identifier.
    ///
    /// Any `id` already present on `activity` is ignored.
    pub fn insert_activity(&mut self, activity: &Activity) -> Result<Activity> {
        let tags = serde_json::to_string(&activity.tags)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_ACTIVITY_SQL,
            params![
                &activity.title,
                &activity.description,
                activity.kind.as_str(),
                activity.status.as_str(),
                activity.start_date.to_string(),
                activity.end_date.to_string(),
                &activity.location,
                &activity.coordinator,
                activity.participants,
                &tags,
                activity.image_url.as_deref(),
                &now,
                &now,
            ],
        )
        .db_context("Failed to insert activity")?;

        let id = tx.last_insert_rowid();

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Inserted activity {id}");
        Ok(Activity {
            id: id.to_string(),
            ..activity.clone()
        })
    }

    /// Replaces every field of the stored activity with the same `id`.
    ///
    /// Returns `None` when no such activity exists.
    pub fn update_activity(&mut self, activity: &Activity) -> Result<Option<Activity>> {
        let Some(id) = row_id(&activity.id) else {
            return Ok(None);
        };
        let tags = serde_json::to_string(&activity.tags)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(
                UPDATE_ACTIVITY_SQL,
                params![
                    &activity.title,
                    &activity.description,
                    activity.kind.as_str(),
                    activity.status.as_str(),
                    activity.start_date.to_string(),
                    activity.end_date.to_string(),
                    &activity.location,
                    &activity.coordinator,
                    activity.participants,
                    &tags,
                    activity.image_url.as_deref(),
                    &now,
                    id,
                ],
            )
            .db_context("Failed to update activity")?;

        tx.commit().db_context("Failed to commit transaction")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        debug!("Updated activity {id}");
        Ok(Some(Activity {
            id: id.to_string(),
            ..activity.clone()
        }))
    }

    /// Retrieves an activity by its ID.
    pub fn get_activity(&self, id: &str) -> Result<Option<Activity>> {
        let Some(id) = row_id(id) else {
            return Ok(None);
        };

        let query = format!("SELECT {ACTIVITY_COLUMNS} FROM activities WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id], Self::build_activity_from_row)
            .optional()
            .db_context("Failed to query activity")
    }

    /// Lists activities matching `filter`, ordered by start date then id.
    ///
    /// Type and status are filtered in SQL; the free-text criterion is applied
    /// afterwards so that it behaves exactly like [`Activity::matches_text`].
    pub fn list_activities(&self, filter: &ActivityFilter) -> Result<Vec<Activity>> {
        let mut query = format!("SELECT {ACTIVITY_COLUMNS} FROM activities");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(kind) = filter.kind {
            conditions.push("type = ?");
            params_vec.push(Box::new(kind.as_str()));
        }

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY start_date, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let mut activities = stmt
            .query_map(&params_refs[..], Self::build_activity_from_row)
            .db_context("Failed to query activities")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch activities")?;

        if let Some(text) = filter.text.as_deref() {
            activities.retain(|activity| activity.matches_text(text));
        }

        Ok(activities)
    }

    /// Permanently deletes an activity and returns what was removed.
    ///
    /// # Errors
    ///
    /// * `CampusError::ActivityNotFound` - When no activity has this ID
    pub fn delete_activity(&mut self, id: &str) -> Result<Activity> {
        let not_found = || CampusError::ActivityNotFound { id: id.to_string() };
        let row = row_id(id).ok_or_else(not_found)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_ACTIVITY_EXISTS_SQL, params![row], |r| r.get(0))
            .db_context("Failed to check activity existence")?;

        if !exists {
            return Err(not_found());
        }

        let query = format!("SELECT {ACTIVITY_COLUMNS} FROM activities WHERE id = ?1");
        let activity = tx
            .query_row(&query, params![row], Self::build_activity_from_row)
            .db_context("Failed to load activity")?;

        tx.execute(DELETE_ACTIVITY_SQL, params![row])
            .db_context("Failed to delete activity")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Deleted activity {row}");
        Ok(activity)
    }
}

impl ActivitySource for super::Database {
    fn list_activities(&self, filter: &ActivityFilter) -> Result<Vec<Activity>> {
        super::Database::list_activities(self, filter)
    }

    fn find_activity(&self, id: &str) -> Result<Option<Activity>> {
        self.get_activity(id)
    }
}
