#![allow(dead_code)]

use pathfinder_core::{params::CreatePlan, Planner, PlannerBuilder, PlanSummary};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Creates a plan without a resume.
pub async fn create_plan(planner: &Planner, user_id: u64, goal: &str, months: u32) -> PlanSummary {
    planner
        .create_plan(&CreatePlan {
            user_id,
            goal: goal.to_string(),
            duration_months: Some(months),
            resume_id: None,
        })
        .await
        .expect("Failed to create plan")
}
