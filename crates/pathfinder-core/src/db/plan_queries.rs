//! Plan CRUD operations and queries.

use jiff::{SignedDuration, Timestamp};
use rusqlite::{params, OptionalExtension};

use super::utils::{enum_column, id_column, json_column, timestamp_column, u32_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    generator::GeneratedPlan,
    models::{Plan, PlanStatus, ProgressSnapshot},
};

const PLAN_COLUMNS: &str = "id, user_id, resume_id, goal, duration_months, start_date, end_date, milestones, technologies, status, version, last_updated, created_at";
const INSERT_PLAN_SQL: &str = "INSERT INTO plans (user_id, resume_id, goal, duration_months, start_date, end_date, milestones, technologies, status, version, last_updated, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 1, ?10, ?10)";
const INSERT_TASK_SQL: &str = "INSERT INTO daily_tasks (plan_id, day, task, focus_area, recommended_hours, difficulty, planned_date, completed, hours_spent, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, 0, ?8, ?8)";
const SELECT_TECH_VERSION_SQL: &str = "SELECT technologies, version FROM plans WHERE id = ?1";
const UPDATE_TECHNOLOGIES_SQL: &str = "UPDATE plans SET technologies = ?1, version = version + 1, status = ?2, last_updated = ?3 WHERE id = ?4";
const UPDATE_PENDING_SQL: &str = "UPDATE plans SET status = ?1, version = version + 1, last_updated = ?2 WHERE id = ?3 AND user_id = ?4";
const SELECT_VERSION_SQL: &str = "SELECT version FROM plans WHERE id = ?1";
const FLAG_UPDATE_AVAILABLE_SQL: &str =
    "UPDATE plans SET status = ?1, last_updated = ?2 WHERE id = ?3 AND status = ?4";

/// Everything needed to store a freshly generated plan.
#[derive(Debug)]
pub struct NewPlan<'a> {
    pub user_id: u64,
    pub resume_id: Option<u64>,
    pub goal: &'a str,
    pub duration_months: u32,
    pub generated: &'a GeneratedPlan,
    pub start: Timestamp,
}

/// `start` moved forward by whole 24-hour days.
fn days_after(start: Timestamp, days: u32) -> Result<Timestamp> {
    start
        .checked_add(SignedDuration::from_hours(24 * i64::from(days)))
        .map_err(|e| {
            PlannerError::invalid_input("duration_months")
                .with_reason(format!("Plan dates out of range: {e}"))
        })
}

impl super::Database {
    fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
        Ok(Plan {
            id: id_column(row, 0)?,
            user_id: id_column(row, 1)?,
            resume_id: row.get::<_, Option<i64>>(2)?.map(|id| id as u64),
            goal: row.get(3)?,
            duration_months: u32_column(row, 4)?,
            start_date: timestamp_column(row, 5)?,
            end_date: timestamp_column(row, 6)?,
            milestones: json_column(row, 7)?,
            technologies: json_column(row, 8)?,
            status: enum_column(row, 9)?,
            version: u32_column(row, 10)?,
            last_updated: timestamp_column(row, 11)?,
            created_at: timestamp_column(row, 12)?,
            tasks: Vec::new(),
        })
    }

    /// Stores a generated plan with one row per day and resets the owner's
    /// progress snapshot, all in one transaction.
    pub fn create_plan(&mut self, new_plan: NewPlan<'_>) -> Result<Plan> {
        let generated = new_plan.generated;
        let start = new_plan.start;
        let end = days_after(start, generated.total_days)?;
        let start_str = start.to_string();
        let milestones_json = serde_json::to_string(&generated.milestones)?;
        let technologies_json = serde_json::to_string(&generated.technologies)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                new_plan.user_id as i64,
                new_plan.resume_id.map(|id| id as i64),
                new_plan.goal,
                i64::from(new_plan.duration_months),
                &start_str,
                end.to_string(),
                &milestones_json,
                &technologies_json,
                PlanStatus::Active.as_str(),
                &start_str,
            ],
        )
        .db_context("Failed to insert plan")?;
        let plan_id = tx.last_insert_rowid() as u64;

        {
            let mut stmt = tx
                .prepare(INSERT_TASK_SQL)
                .db_context("Failed to prepare task insert")?;
            for task in &generated.tasks {
                let planned_date = days_after(start, task.day)?;
                stmt.execute(params![
                    plan_id as i64,
                    i64::from(task.day),
                    &task.task,
                    &task.focus_area,
                    i64::from(task.recommended_hours),
                    task.difficulty.as_str(),
                    planned_date.to_string(),
                    &start_str,
                ])
                .db_context("Failed to insert daily task")?;
            }
        }

        Self::write_snapshot(
            &tx,
            &ProgressSnapshot {
                user_id: new_plan.user_id,
                plan_id: Some(plan_id),
                total_days_planned: generated.total_days,
                total_days_completed: 0,
                completion_percentage: 0.0,
                last_updated: start,
            },
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        log::debug!(
            "Stored plan {plan_id} with {} daily tasks",
            generated.tasks.len()
        );
        self.get_plan(plan_id)?
            .ok_or(PlannerError::PlanNotFound { id: plan_id })
    }

    /// Retrieves a plan by its ID, with its tasks ordered by day.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut plan = self.get_plan_record(id)?;
        if let Some(ref mut plan) = plan {
            plan.tasks = self.get_tasks(plan.id)?;
        }
        Ok(plan)
    }

    /// Retrieves a plan without loading its tasks.
    pub fn get_plan_record(&self, id: u64) -> Result<Option<Plan>> {
        self.connection
            .query_row(
                &format!("SELECT {PLAN_COLUMNS} FROM plans WHERE id = ?1"),
                params![id as i64],
                Self::build_plan_from_row,
            )
            .optional()
            .db_context("Failed to query plan")
    }

    /// Lists plans newest first, optionally filtered by owner and status.
    /// Tasks are loaded for every plan returned.
    pub fn list_plans(
        &self,
        user_id: Option<u64>,
        status: Option<PlanStatus>,
    ) -> Result<Vec<Plan>> {
        let mut plans = self.select_plans(user_id, status)?;
        for plan in &mut plans {
            plan.tasks = self.get_tasks(plan.id)?;
        }
        Ok(plans)
    }

    /// All plans in `Active` status, without tasks.
    pub fn active_plans(&self) -> Result<Vec<Plan>> {
        self.select_plans(None, Some(PlanStatus::Active))
    }

    /// The user's most recently created active plan, with tasks.
    pub fn active_plan_for_user(&self, user_id: u64) -> Result<Option<Plan>> {
        let mut plan = self
            .select_plans(Some(user_id), Some(PlanStatus::Active))?
            .into_iter()
            .next();
        if let Some(ref mut plan) = plan {
            plan.tasks = self.get_tasks(plan.id)?;
        }
        Ok(plan)
    }

    fn select_plans(&self, user_id: Option<u64>, status: Option<PlanStatus>) -> Result<Vec<Plan>> {
        let mut query = format!("SELECT {PLAN_COLUMNS} FROM plans");
        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(user_id) = user_id {
            conditions.push("user_id = ?");
            params_vec.push(Box::new(user_id as i64));
        }
        if let Some(status) = status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str()));
        }
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let plans = stmt
            .query_map(&params_refs[..], Self::build_plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;
        Ok(plans)
    }

    /// Overwrites a plan's technology list, bumps its version and marks it
    /// `Updated`. Returns the previous list and the new version, or `None`
    /// when the plan does not exist.
    pub fn replace_technologies(
        &mut self,
        plan_id: u64,
        technologies: &[String],
    ) -> Result<Option<(Vec<String>, u32)>> {
        let technologies_json = serde_json::to_string(technologies)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current: Option<(String, i64)> = tx
            .query_row(SELECT_TECH_VERSION_SQL, params![plan_id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()
            .db_context("Failed to read plan technologies")?;
        let Some((old_json, version)) = current else {
            return Ok(None);
        };
        let old: Vec<String> = serde_json::from_str(&old_json)?;

        tx.execute(
            UPDATE_TECHNOLOGIES_SQL,
            params![
                &technologies_json,
                PlanStatus::Updated.as_str(),
                Timestamp::now().to_string(),
                plan_id as i64
            ],
        )
        .db_context("Failed to update plan technologies")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(Some((old, version as u32 + 1)))
    }

    /// Parks a plan owned by `user_id` in `UpdatePending` and bumps its
    /// version. Returns the new version, or `None` when no such plan exists
    /// for that user.
    pub fn mark_update_pending(&mut self, plan_id: u64, user_id: u64) -> Result<Option<u32>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let changed = tx
            .execute(
                UPDATE_PENDING_SQL,
                params![
                    PlanStatus::UpdatePending.as_str(),
                    Timestamp::now().to_string(),
                    plan_id as i64,
                    user_id as i64
                ],
            )
            .db_context("Failed to mark plan update pending")?;
        if changed == 0 {
            return Ok(None);
        }

        let version: i64 = tx
            .query_row(SELECT_VERSION_SQL, params![plan_id as i64], |row| row.get(0))
            .db_context("Failed to read plan version")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(Some(version as u32))
    }

    /// Moves an `Active` plan to `UpdateAvailable`. Returns false when the
    /// plan is missing or no longer active.
    pub fn flag_update_available(&self, plan_id: u64, now: Timestamp) -> Result<bool> {
        let changed = self
            .connection
            .execute(
                FLAG_UPDATE_AVAILABLE_SQL,
                params![
                    PlanStatus::UpdateAvailable.as_str(),
                    now.to_string(),
                    plan_id as i64,
                    PlanStatus::Active.as_str()
                ],
            )
            .db_context("Failed to flag plan for update")?;
        Ok(changed > 0)
    }
}
