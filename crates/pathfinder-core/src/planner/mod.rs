//! High-level planner API.
//!
//! [`Planner`] is the facade every interface talks to. It owns only the
//! database path; each operation opens its own connection on the blocking
//! thread pool, so a `Planner` is cheap to clone and share between tasks.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (display       │───▶│ (plan_ops,      │───▶│   (via db/)     │
//! │   wrappers)     │    │  task_ops, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`plan_ops`]: Resumes, plan generation and plan lookups
//! - [`task_ops`]: Daily task progress and paging
//! - [`advisor_ops`]: Skill assessment, suggestions and analytics
//! - [`reconcile_ops`]: Drift checks, technology updates and the sweep
//! - [`handlers`]: Operations returning display wrappers for the CLI
//!
//! # Examples
//!
//! ```rust,no_run
//! use pathfinder_core::{params::CreatePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/pathfinder.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         user_id: 1,
//!         goal: "Web Developer".to_string(),
//!         duration_months: Some(1),
//!         resume_id: None,
//!     })
//!     .await?;
//! assert_eq!(plan.total_days, 30);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
};

pub mod advisor_ops;
pub mod builder;
pub mod handlers;
pub mod plan_ops;
pub mod reconcile_ops;
pub mod task_ops;

pub use builder::PlannerBuilder;

/// Main planner interface.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file backing this planner.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(PlannerError::join)?
    }
}
