//! Core library for the Pathfinder learning planner.
//!
//! Pathfinder turns a career goal, a duration and a learner's current skills
//! into a day-by-day learning plan, tracks progress against it and watches a
//! table of trending technologies for drift.
//!
//! # Components
//!
//! - [`generator`]: builds daily tasks and milestones from the profession
//!   [`catalog`]
//! - [`trends`]: the trend table and the queries over it (new technology
//!   detection, update urgency, recommendations)
//! - [`progress`] and [`analytics`]: completion numbers, velocity and badges
//! - [`advisor`]: skill assessment and suggestions for a learner
//! - [`reconciler`]: background loops that poll trends and flag stale plans
//! - [`planner`]: the async facade over the SQLite store in [`db`]
//! - [`display`]: markdown rendering for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pathfinder_core::{
//!     params::{CreatePlan, ListTasks, RecordResume, UpdateTask},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("pathfinder.db"))
//!     .build()
//!     .await?;
//!
//! planner
//!     .record_resume(&RecordResume {
//!         user_id: 1,
//!         skills: vec!["Python".to_string()],
//!         experience_level: Some("intermediate".to_string()),
//!     })
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         user_id: 1,
//!         goal: "AI Engineer".to_string(),
//!         duration_months: Some(3),
//!         resume_id: None,
//!     })
//!     .await?;
//!
//! let page = planner
//!     .list_tasks(&ListTasks {
//!         plan_id: plan.id,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let progress = planner
//!     .update_task(&UpdateTask {
//!         id: page.tasks[0].id,
//!         is_completed: Some(true),
//!         hours_spent: Some(2.0),
//!         notes: None,
//!     })
//!     .await?;
//! println!("{progress}");
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod analytics;
pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;
pub mod progress;
pub mod reconciler;
pub mod trends;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, LocalDateTime, OperationStatus, PlanSummaries, TrendList};
pub use error::{PlannerError, Result};
pub use models::{
    DailyTask, Difficulty, ExperienceLevel, Plan, PlanStatus, PlanSummary, ProgressSnapshot,
    ProgressUpdate, Resume, TaskPage,
};
pub use planner::{Planner, PlannerBuilder};
pub use reconciler::{BackgroundService, ReconcilerConfig};
pub use trends::{TrendEntry, TrendTable};
