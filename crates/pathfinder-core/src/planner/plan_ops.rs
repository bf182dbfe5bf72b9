//! Resume and plan operations for the Planner.

use jiff::Timestamp;

use super::Planner;
use crate::{
    db::plan_queries::NewPlan,
    error::{PlannerError, Result},
    generator::generate_plan,
    models::{ExperienceLevel, Plan, PlanSummary, ProgressSnapshot, Resume},
    params::{CreatePlan, Id, ListPlans, RecordResume},
};

impl Planner {
    /// Stores the skills and experience level extracted from a resume.
    pub async fn record_resume(&self, params: &RecordResume) -> Result<Resume> {
        let experience_level = params.validate()?;
        let user_id = params.user_id;
        let skills = params.skills.clone();

        self.with_db(move |db| db.insert_resume(user_id, &skills, experience_level))
            .await
    }

    /// Generates and stores a plan for a user.
    ///
    /// Skills come from the given resume, or the user's latest one; without
    /// any resume the plan is generated for a beginner with no skills. The
    /// user's progress snapshot is reset to the new plan.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the goal is blank, the duration
    ///   is zero, or the resume belongs to another user
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<PlanSummary> {
        let duration_months = params.validate()?;
        let params = params.clone();

        let plan = self
            .with_db(move |db| {
                let resume = match params.resume_id {
                    Some(resume_id) => {
                        let resume = db.get_resume(resume_id)?.ok_or_else(|| {
                            PlannerError::invalid_input("resume_id")
                                .with_reason(format!("Resume {resume_id} not found"))
                        })?;
                        if resume.user_id != params.user_id {
                            return Err(PlannerError::invalid_input("resume_id").with_reason(
                                format!("Resume {resume_id} does not belong to user {}", params.user_id),
                            ));
                        }
                        Some(resume)
                    }
                    None => db.latest_resume(params.user_id)?,
                };

                let (skills, level) = resume
                    .as_ref()
                    .map(|r| (r.skills.clone(), r.experience_level))
                    .unwrap_or((Vec::new(), ExperienceLevel::Beginner));
                let generated = generate_plan(&params.goal, duration_months, &skills, level);

                db.create_plan(NewPlan {
                    user_id: params.user_id,
                    resume_id: resume.map(|r| r.id),
                    goal: &params.goal,
                    duration_months,
                    generated: &generated,
                    start: Timestamp::now(),
                })
            })
            .await?;

        log::info!(
            "Created plan {} for user {}: '{}' over {} days",
            plan.id,
            plan.user_id,
            plan.goal,
            plan.total_days()
        );
        Ok(PlanSummary::from(&plan))
    }

    /// Retrieves a plan with its tasks.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let plan_id = params.id;
        self.with_db(move |db| db.get_plan(plan_id)).await
    }

    /// Lists plans newest first.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<Plan>> {
        let status = params.validate()?;
        let user_id = params.user_id;
        self.with_db(move |db| db.list_plans(user_id, status)).await
    }

    /// The user's cached progress rollup.
    pub async fn get_progress(&self, user_id: u64) -> Result<Option<ProgressSnapshot>> {
        self.with_db(move |db| db.get_progress(user_id)).await
    }

    /// Loads a plan without tasks or fails with `PlanNotFound`.
    pub(crate) async fn require_plan_record(&self, plan_id: u64) -> Result<Plan> {
        self.with_db(move |db| {
            db.get_plan_record(plan_id)?
                .ok_or(PlannerError::PlanNotFound { id: plan_id })
        })
        .await
    }
}
