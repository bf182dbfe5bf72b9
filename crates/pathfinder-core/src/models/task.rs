//! Daily task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Difficulty;

/// One day of a learning plan.
///
/// Day numbers inside a plan are unique and contiguous from 1, and the set of
/// tasks is fixed once the plan is created. Only the progress fields
/// (`completed`, `completed_date`, `hours_spent`, `notes`) change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyTask {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the parent plan
    pub plan_id: u64,

    /// 1-based day number within the plan
    pub day: u32,

    /// What to study on this day
    pub task: String,

    /// Phase focus label (or the goal itself for generic plans)
    pub focus_area: String,

    pub recommended_hours: u32,

    pub difficulty: Difficulty,

    /// Calendar slot for this task (plan start plus `day` days)
    pub planned_date: Timestamp,

    pub completed: bool,

    /// Set when the task first becomes completed, cleared when reopened
    pub completed_date: Option<Timestamp>,

    pub hours_spent: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

/// One page of a plan's daily tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskPage {
    pub plan_id: u64,
    pub total_tasks: u32,
    /// 1-based page number
    pub current_page: u32,
    pub total_pages: u32,
    pub per_page: u32,
    pub tasks: Vec<DailyTask>,
}
