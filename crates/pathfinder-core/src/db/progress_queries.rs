//! Progress snapshot storage.

use rusqlite::{params, Connection, OptionalExtension};

use super::utils::{id_column, timestamp_column, u32_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::ProgressSnapshot,
};

const UPSERT_SNAPSHOT_SQL: &str = "INSERT INTO progress (user_id, plan_id, total_days_planned, total_days_completed, completion_percentage, last_updated) VALUES (?1, ?2, ?3, ?4, ?5, ?6) ON CONFLICT(user_id) DO UPDATE SET plan_id = excluded.plan_id, total_days_planned = excluded.total_days_planned, total_days_completed = excluded.total_days_completed, completion_percentage = excluded.completion_percentage, last_updated = excluded.last_updated";
const SELECT_SNAPSHOT_SQL: &str = "SELECT user_id, plan_id, total_days_planned, total_days_completed, completion_percentage, last_updated FROM progress WHERE user_id = ?1";

impl super::Database {
    /// Writes a user's snapshot on `conn`, which may be an open transaction.
    pub(crate) fn write_snapshot(conn: &Connection, snapshot: &ProgressSnapshot) -> Result<()> {
        conn.execute(
            UPSERT_SNAPSHOT_SQL,
            params![
                snapshot.user_id as i64,
                snapshot.plan_id.map(|id| id as i64),
                i64::from(snapshot.total_days_planned),
                i64::from(snapshot.total_days_completed),
                snapshot.completion_percentage,
                snapshot.last_updated.to_string()
            ],
        )
        .db_context("Failed to write progress snapshot")?;
        Ok(())
    }

    /// The user's cached progress rollup.
    pub fn get_progress(&self, user_id: u64) -> Result<Option<ProgressSnapshot>> {
        self.connection
            .query_row(SELECT_SNAPSHOT_SQL, params![user_id as i64], |row| {
                Ok(ProgressSnapshot {
                    user_id: id_column(row, 0)?,
                    plan_id: row.get::<_, Option<i64>>(1)?.map(|id| id as u64),
                    total_days_planned: u32_column(row, 2)?,
                    total_days_completed: u32_column(row, 3)?,
                    completion_percentage: row.get(4)?,
                    last_updated: timestamp_column(row, 5)?,
                })
            })
            .optional()
            .db_context("Failed to query progress snapshot")
    }
}
