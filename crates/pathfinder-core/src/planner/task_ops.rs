//! Daily task operations for the Planner.

use jiff::Timestamp;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::{DailyTask, ProgressUpdate, TaskPage},
    params::{Id, ListTasks, UpdateTask},
};

impl Planner {
    /// Records completion, hours and notes on a daily task.
    ///
    /// Marking a task completed stamps its completion date the first time
    /// only; reopening it clears the date. The owner's progress snapshot is
    /// recomputed in the same transaction.
    ///
    /// # Errors
    ///
    /// * `PlannerError::TaskNotFound` - When no task has the given ID
    /// * `PlannerError::InvalidInput` - When `hours_spent` is negative or NaN
    pub async fn update_task(&self, params: &UpdateTask) -> Result<ProgressUpdate> {
        params.validate()?;
        let params = params.clone();

        let update = self
            .with_db(move |db| db.update_task(&params, Timestamp::now()))
            .await?;

        log::debug!(
            "Task {} updated, plan {} now {:.1}% complete",
            update.task.id,
            update.task.plan_id,
            update.completion_percentage
        );
        Ok(update)
    }

    /// Retrieves a daily task by ID.
    pub async fn get_task(&self, params: &Id) -> Result<Option<DailyTask>> {
        let task_id = params.id;
        self.with_db(move |db| db.get_task(task_id)).await
    }

    /// The lowest-day task of a plan that is not completed yet.
    ///
    /// # Errors
    ///
    /// * `PlannerError::PlanNotFound` - When the plan does not exist
    pub async fn next_task(&self, params: &Id) -> Result<Option<DailyTask>> {
        let plan_id = params.id;
        self.with_db(move |db| {
            if db.get_plan_record(plan_id)?.is_none() {
                return Err(PlannerError::PlanNotFound { id: plan_id });
            }
            db.next_pending_task(plan_id)
        })
        .await
    }

    /// One page of a plan's tasks, ordered by day.
    ///
    /// # Errors
    ///
    /// * `PlannerError::PlanNotFound` - When the plan does not exist
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<TaskPage> {
        let (page, per_page) = params.validate()?;
        let plan_id = params.plan_id;

        self.with_db(move |db| {
            db.list_tasks_page(plan_id, page, per_page)?
                .ok_or(PlannerError::PlanNotFound { id: plan_id })
        })
        .await
    }
}
