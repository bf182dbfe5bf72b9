//! Daily task queries and the progress tracker's write path.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use super::utils::{enum_column, id_column, optional_timestamp_column, timestamp_column, u32_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{DailyTask, ProgressSnapshot, ProgressUpdate, TaskPage},
    params::UpdateTask,
    progress::{completion_date, completion_percentage},
};

const TASK_COLUMNS: &str = "id, plan_id, day, task, focus_area, recommended_hours, difficulty, planned_date, completed, completed_date, hours_spent, notes, created_at, updated_at";
const COUNT_TASKS_SQL: &str =
    "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM daily_tasks WHERE plan_id = ?1";
const UPDATE_TASK_SQL: &str = "UPDATE daily_tasks SET completed = ?1, completed_date = ?2, hours_spent = ?3, notes = ?4, updated_at = ?5 WHERE id = ?6";
const SELECT_PLAN_OWNER_SQL: &str = "SELECT user_id FROM plans WHERE id = ?1";

impl super::Database {
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<DailyTask> {
        Ok(DailyTask {
            id: id_column(row, 0)?,
            plan_id: id_column(row, 1)?,
            day: u32_column(row, 2)?,
            task: row.get(3)?,
            focus_area: row.get(4)?,
            recommended_hours: u32_column(row, 5)?,
            difficulty: enum_column(row, 6)?,
            planned_date: timestamp_column(row, 7)?,
            completed: row.get(8)?,
            completed_date: optional_timestamp_column(row, 9)?,
            hours_spent: row.get(10)?,
            notes: row.get(11)?,
            created_at: timestamp_column(row, 12)?,
            updated_at: timestamp_column(row, 13)?,
        })
    }

    fn query_tasks(
        conn: &rusqlite::Connection,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<DailyTask>> {
        let mut stmt = conn.prepare(sql).db_context("Failed to prepare task query")?;
        let tasks = stmt
            .query_map(params, Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;
        Ok(tasks)
    }

    /// All tasks of a plan ordered by day.
    pub fn get_tasks(&self, plan_id: u64) -> Result<Vec<DailyTask>> {
        Self::query_tasks(
            &self.connection,
            &format!("SELECT {TASK_COLUMNS} FROM daily_tasks WHERE plan_id = ?1 ORDER BY day"),
            &[&(plan_id as i64)],
        )
    }

    /// Retrieves a daily task by its ID.
    pub fn get_task(&self, id: u64) -> Result<Option<DailyTask>> {
        self.connection
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM daily_tasks WHERE id = ?1"),
                params![id as i64],
                Self::build_task_from_row,
            )
            .optional()
            .db_context("Failed to query task")
    }

    /// Lowest-day incomplete task of a plan.
    pub fn next_pending_task(&self, plan_id: u64) -> Result<Option<DailyTask>> {
        Self::next_pending_in(&self.connection, plan_id)
    }

    fn next_pending_in(conn: &rusqlite::Connection, plan_id: u64) -> Result<Option<DailyTask>> {
        conn.query_row(
            &format!(
                "SELECT {TASK_COLUMNS} FROM daily_tasks WHERE plan_id = ?1 AND completed = 0 ORDER BY day LIMIT 1"
            ),
            params![plan_id as i64],
            Self::build_task_from_row,
        )
        .optional()
        .db_context("Failed to query next task")
    }

    /// One page of a plan's tasks, or `None` when the plan does not exist.
    pub fn list_tasks_page(
        &self,
        plan_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Option<TaskPage>> {
        if self.get_plan_record(plan_id)?.is_none() {
            return Ok(None);
        }

        let (total, _) = Self::count_tasks(&self.connection, plan_id)?;
        let offset = i64::from(page.saturating_sub(1)) * i64::from(per_page);
        let tasks = Self::query_tasks(
            &self.connection,
            &format!(
                "SELECT {TASK_COLUMNS} FROM daily_tasks WHERE plan_id = ?1 ORDER BY day LIMIT ?2 OFFSET ?3"
            ),
            &[&(plan_id as i64), &i64::from(per_page), &offset],
        )?;

        Ok(Some(TaskPage {
            plan_id,
            total_tasks: total,
            current_page: page,
            total_pages: total.div_ceil(per_page),
            per_page,
            tasks,
        }))
    }

    fn count_tasks(conn: &rusqlite::Connection, plan_id: u64) -> Result<(u32, u32)> {
        let (total, completed): (i64, i64) = conn
            .query_row(COUNT_TASKS_SQL, params![plan_id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .db_context("Failed to count plan tasks")?;
        Ok((total as u32, completed as u32))
    }

    /// Records progress on a task and refreshes the owner's snapshot.
    ///
    /// The write, the recount and the snapshot upsert share one IMMEDIATE
    /// transaction, so concurrent updates to the same plan serialize and the
    /// snapshot always reflects a consistent count.
    pub fn update_task(&mut self, update: &UpdateTask, now: Timestamp) -> Result<ProgressUpdate> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM daily_tasks WHERE id = ?1"),
                params![update.id as i64],
                Self::build_task_from_row,
            )
            .optional()
            .db_context("Failed to query task")?
            .ok_or(PlannerError::TaskNotFound { id: update.id })?;

        let completed = update.is_completed.unwrap_or(current.completed);
        let completed_date = completion_date(completed, current.completed_date, now);
        let hours_spent = update.hours_spent.unwrap_or(current.hours_spent);
        let notes = update.notes.clone().or_else(|| current.notes.clone());

        tx.execute(
            UPDATE_TASK_SQL,
            params![
                completed,
                completed_date.map(|stamp| stamp.to_string()),
                hours_spent,
                &notes,
                now.to_string(),
                update.id as i64
            ],
        )
        .db_context("Failed to update task")?;

        let plan_id = current.plan_id;
        let (total_tasks, completed_tasks) = Self::count_tasks(&tx, plan_id)?;
        let percentage = completion_percentage(completed_tasks, total_tasks);

        let owner: i64 = tx
            .query_row(SELECT_PLAN_OWNER_SQL, params![plan_id as i64], |row| row.get(0))
            .db_context("Failed to read plan owner")?;
        Self::write_snapshot(
            &tx,
            &ProgressSnapshot {
                user_id: owner as u64,
                plan_id: Some(plan_id),
                total_days_planned: total_tasks,
                total_days_completed: completed_tasks,
                completion_percentage: percentage,
                last_updated: now,
            },
        )?;

        let next_task = Self::next_pending_in(&tx, plan_id)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ProgressUpdate {
            task: DailyTask {
                completed,
                completed_date,
                hours_spent,
                notes,
                updated_at: now,
                ..current
            },
            completion_percentage: percentage,
            completed_tasks,
            total_tasks,
            next_task,
        })
    }

    /// Number of a plan's tasks completed at or after `since`.
    pub fn count_completed_since(&self, plan_id: u64, since: Timestamp) -> Result<u32> {
        let count = self
            .get_tasks(plan_id)?
            .iter()
            .filter(|task| task.completed)
            .filter(|task| task.completed_date.is_some_and(|date| date >= since))
            .count();
        Ok(count as u32)
    }
}
