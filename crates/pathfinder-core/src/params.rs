//! Parameter structures for planner operations.
//!
//! These are plain data carriers shared by every interface. The CLI wraps
//! them in clap `Args` structs and converts with `From`, so nothing here
//! depends on an interface framework.
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct CreatePlanArgs {
//!     pub user_id: u64,
//!     pub goal: String,
//!     #[arg(long, default_value_t = 6)]
//!     pub months: u32,
//! }
//!
//! impl From<CreatePlanArgs> for CreatePlan { /* field by field */ }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{ExperienceLevel, PlanStatus},
};

/// Default plan length when none is requested.
pub const DEFAULT_DURATION_MONTHS: u32 = 6;

/// Longest plan that can be generated, in months.
pub const MAX_DURATION_MONTHS: u32 = 120;

/// Default page size for task listings.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for storing a parsed resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordResume {
    pub user_id: u64,
    #[serde(default)]
    pub skills: Vec<String>,
    /// 'beginner', 'intermediate' or 'advanced'; beginner when absent
    pub experience_level: Option<String>,
}

impl RecordResume {
    /// Parses the experience level.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the level is not recognized
    pub fn validate(&self) -> Result<ExperienceLevel> {
        match &self.experience_level {
            Some(level) => level.parse::<ExperienceLevel>().map_err(|_| {
                PlannerError::invalid_input("experience_level").with_reason(format!(
                    "Invalid experience level: {level}. Must be 'beginner', 'intermediate', or 'advanced'"
                ))
            }),
            None => Ok(ExperienceLevel::default()),
        }
    }
}

/// Parameters for generating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    pub user_id: u64,
    /// Career goal, matched case-insensitively against the catalog
    pub goal: String,
    /// Plan length in months (6 when absent)
    pub duration_months: Option<u32>,
    /// Resume to take skills from; the user's latest resume when absent
    pub resume_id: Option<u64>,
}

impl CreatePlan {
    /// Returns the requested duration after checking it is between one
    /// month and [`MAX_DURATION_MONTHS`].
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the goal is blank or the
    ///   duration is out of range
    pub fn validate(&self) -> Result<u32> {
        if self.goal.trim().is_empty() {
            return Err(PlannerError::invalid_input("goal").with_reason("Goal cannot be empty"));
        }
        let months = self.duration_months.unwrap_or(DEFAULT_DURATION_MONTHS);
        if months == 0 {
            return Err(PlannerError::invalid_input("duration_months")
                .with_reason("Duration must be at least 1 month"));
        }
        if months > MAX_DURATION_MONTHS {
            return Err(PlannerError::invalid_input("duration_months").with_reason(format!(
                "Duration cannot exceed {MAX_DURATION_MONTHS} months"
            )));
        }
        Ok(months)
    }
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Only plans owned by this user
    pub user_id: Option<u64>,
    /// Only plans in this status
    pub status: Option<String>,
}

impl ListPlans {
    /// Parses the status filter.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the status is not recognized
    pub fn validate(&self) -> Result<Option<PlanStatus>> {
        self.status
            .as_deref()
            .map(|status| {
                status.parse::<PlanStatus>().map_err(|reason| {
                    PlannerError::invalid_input("status").with_reason(reason)
                })
            })
            .transpose()
    }
}

/// Parameters for paging through a plan's tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    pub plan_id: u64,
    /// 1-based page number (1 when absent)
    pub page: Option<u32>,
    /// Page size (20 when absent)
    pub per_page: Option<u32>,
}

impl ListTasks {
    /// Returns `(page, per_page)` with defaults applied.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When either value is zero
    pub fn validate(&self) -> Result<(u32, u32)> {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if page == 0 {
            return Err(PlannerError::invalid_input("page").with_reason("Pages start at 1"));
        }
        if per_page == 0 {
            return Err(
                PlannerError::invalid_input("per_page").with_reason("Page size must be positive")
            );
        }
        Ok((page, per_page))
    }
}

/// Parameters for recording progress on a daily task.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Daily task ID to update (required)
    pub id: u64,
    pub is_completed: Option<bool>,
    pub hours_spent: Option<f64>,
    pub notes: Option<String>,
}

impl UpdateTask {
    /// Checks the hours value.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When `hours_spent` is negative or not
    ///   a finite number
    pub fn validate(&self) -> Result<()> {
        match self.hours_spent {
            Some(hours) if !hours.is_finite() || hours < 0.0 => Err(PlannerError::invalid_input(
                "hours_spent",
            )
            .with_reason(format!("Hours spent must be a non-negative number, got {hours}"))),
            _ => Ok(()),
        }
    }
}

/// Parameters for replacing a plan's technology list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyTechnologies {
    pub plan_id: u64,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Parameters for accepting an advisor suggestion on a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplySuggestion {
    /// User applying the suggestion; must own the plan
    pub user_id: u64,
    pub plan_id: u64,
    #[serde(default)]
    pub new_technologies: Vec<String>,
}

/// Parameters for listing trending technologies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendQuery {
    pub profession: Option<String>,
    /// Relevance floor (75 when absent)
    pub min_relevance: Option<u8>,
}
