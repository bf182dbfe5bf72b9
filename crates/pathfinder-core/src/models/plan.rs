//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DailyTask, PlanStatus};

/// A weekly checkpoint inside a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    /// Week number the milestone should be reached by (1-based)
    pub week: u32,
    /// Human readable checkpoint text
    pub milestone: String,
}

/// A generated learning plan with its daily tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Owner of the plan (opaque id supplied by the auth collaborator)
    pub user_id: u64,

    /// Resume the plan was generated from, if any
    pub resume_id: Option<u64>,

    /// Career goal the plan works toward, as entered by the user
    pub goal: String,

    /// Requested duration in months
    pub duration_months: u32,

    /// Timestamp the plan starts (UTC)
    pub start_date: Timestamp,

    /// `start_date` plus the plan's total days
    pub end_date: Timestamp,

    pub milestones: Vec<Milestone>,

    /// Technology gap list, replaced wholesale by technology updates
    pub technologies: Vec<String>,

    #[serde(default)]
    pub status: PlanStatus,

    /// Bumped on every technology update, starts at 1
    pub version: u32,

    /// Last status or technology change (UTC)
    pub last_updated: Timestamp,

    pub created_at: Timestamp,

    /// Daily tasks ordered by day number (loaded with the plan)
    #[serde(default)]
    pub tasks: Vec<DailyTask>,
}

impl Plan {
    /// Number of days the plan covers.
    pub fn total_days(&self) -> u32 {
        self.duration_months * 30
    }

    /// Whole days elapsed between creation and `now`.
    pub fn days_since_creation(&self, now: Timestamp) -> i64 {
        now.duration_since(self.created_at).as_secs() / 86_400
    }

    /// The lowest-numbered incomplete task among the loaded tasks.
    pub fn next_pending_task(&self) -> Option<&DailyTask> {
        self.tasks
            .iter()
            .filter(|task| !task.completed)
            .min_by_key(|task| task.day)
    }
}

/// Summary shape handed to callers after creating or showing a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    pub id: u64,
    pub goal: String,
    pub duration_months: u32,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub milestones: Vec<Milestone>,
    pub technologies: Vec<String>,
    pub status: PlanStatus,
    pub version: u32,
    /// Number of daily tasks in the plan
    pub total_days: u32,
    /// Number of completed daily tasks
    pub completed_days: u32,
    pub completion_percentage: f64,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let total_days = plan.tasks.len() as u32;
        let completed_days = plan.tasks.iter().filter(|task| task.completed).count() as u32;

        Self {
            id: plan.id,
            goal: plan.goal.clone(),
            duration_months: plan.duration_months,
            start_date: plan.start_date,
            end_date: plan.end_date,
            milestones: plan.milestones.clone(),
            technologies: plan.technologies.clone(),
            status: plan.status,
            version: plan.version,
            total_days,
            completed_days,
            completion_percentage: crate::progress::completion_percentage(
                completed_days,
                total_days,
            ),
        }
    }
}
