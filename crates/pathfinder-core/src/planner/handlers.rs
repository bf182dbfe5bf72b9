//! Planner operations that return display wrappers.

use jiff::Timestamp;

use super::Planner;
use crate::{
    display::{CreateResult, OperationStatus, PlanSummaries, TrendList},
    error::Result,
    models::{PlanSummary, Resume},
    params::{CreatePlan, ListPlans, RecordResume, TrendQuery},
};

impl Planner {
    /// Lists plans as summaries with completion counts.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use pathfinder_core::{params::ListPlans, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let params = ListPlans { user_id: Some(1), status: None };
    /// let summaries = planner.list_plans_summary(&params).await?;
    /// println!("{summaries}");
    /// # Result::<(), pathfinder_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_plans_summary(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let plans = self.list_plans(params).await?;
        Ok(PlanSummaries(plans.iter().map(PlanSummary::from).collect()))
    }

    /// Creates a plan and wraps the summary for confirmation output.
    pub async fn create_plan_result(
        &self,
        params: &CreatePlan,
    ) -> Result<CreateResult<PlanSummary>> {
        self.create_plan(params).await.map(CreateResult::new)
    }

    /// Records a resume and wraps it for confirmation output.
    pub async fn record_resume_result(
        &self,
        params: &RecordResume,
    ) -> Result<CreateResult<Resume>> {
        self.record_resume(params).await.map(CreateResult::new)
    }

    pub fn trending_list(&self, params: &TrendQuery) -> TrendList {
        TrendList(self.trending(params))
    }

    /// Runs one sweep now and reports how many plans were flagged.
    pub async fn sweep_status(&self) -> Result<OperationStatus> {
        let flagged = self.sweep_stale_plans(Timestamp::now()).await?;
        let message = match flagged.as_slice() {
            [] => "No plans needed an update".to_string(),
            ids => format!(
                "Flagged {} plan(s) as update_available: {}",
                ids.len(),
                ids.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };
        Ok(OperationStatus::success(message))
    }
}
