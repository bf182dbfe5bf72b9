//! Progress snapshot model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::DailyTask;

/// Cached per-user rollup of plan completion.
///
/// Recomputed by the progress tracker whenever a task changes, so it matches
/// the owning plan only as of `last_updated`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressSnapshot {
    pub user_id: u64,
    /// Plan the numbers were last computed for
    pub plan_id: Option<u64>,
    pub total_days_planned: u32,
    pub total_days_completed: u32,
    pub completion_percentage: f64,
    pub last_updated: Timestamp,
}

/// Outcome of recording progress on one daily task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressUpdate {
    /// The task as stored after the update
    pub task: DailyTask,
    pub completion_percentage: f64,
    pub completed_tasks: u32,
    pub total_tasks: u32,
    /// Lowest-numbered task of the plan still open, if any
    pub next_task: Option<DailyTask>,
}
