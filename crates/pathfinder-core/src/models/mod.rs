//! Data models for learning plans, daily tasks and progress.
//!
//! These are the records the planner persists and hands back to callers.
//! Display implementations live in [`crate::display`] so presentation stays
//! out of the data definitions.
//!
//! # Examples
//!
//! ```rust
//! use pathfinder_core::models::{Difficulty, PlanStatus};
//!
//! assert_eq!(PlanStatus::UpdateAvailable.as_str(), "update_available");
//! assert!(Difficulty::Easy < Difficulty::VeryHard);
//! ```

pub mod plan;
pub mod progress;
pub mod resume;
pub mod status;
pub mod task;

// Re-export all public types at the models level
pub use plan::{Milestone, Plan, PlanSummary};
pub use progress::{ProgressSnapshot, ProgressUpdate};
pub use resume::Resume;
pub use status::{Difficulty, ExperienceLevel, PlanStatus};
pub use task::{DailyTask, TaskPage};
