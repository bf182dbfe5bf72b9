//! Skill assessment, suggestions and analytics for the Planner.

use jiff::{SignedDuration, Timestamp};

use super::Planner;
use crate::{
    advisor::{self, SkillAssessment, Suggestions},
    analytics::{self, PlanAnalytics},
    error::{PlannerError, Result},
    params::{Id, TrendQuery},
    trends::{TrendEntry, TrendTable, DEFAULT_MIN_RELEVANCE},
};

/// Window for counting recently completed tasks.
const RECENT_WINDOW: SignedDuration = SignedDuration::from_hours(30 * 24);

impl Planner {
    /// Assesses a learner from their latest resume and active plan.
    ///
    /// A user with neither yields an empty assessment with `unknown`
    /// proficiency rather than an error.
    pub async fn assess_user(&self, user_id: u64) -> Result<SkillAssessment> {
        self.with_db(move |db| {
            let resume = db.latest_resume(user_id)?;
            let plan = db.active_plan_for_user(user_id)?;
            let recent = match &plan {
                Some(plan) => {
                    let since = Timestamp::now()
                        .checked_sub(RECENT_WINDOW)
                        .unwrap_or(Timestamp::MIN);
                    db.count_completed_since(plan.id, since)?
                }
                None => 0,
            };
            Ok(advisor::assess(resume.as_ref(), plan.as_ref(), recent))
        })
        .await
    }

    /// Assessment plus trend-based recommendations for a learner.
    pub async fn suggestions_for_user(&self, user_id: u64) -> Result<Suggestions> {
        let assessment = self.assess_user(user_id).await?;
        let recommendations = advisor::recommend(&assessment, TrendTable::builtin());
        Ok(Suggestions {
            assessment,
            recommendations,
        })
    }

    /// Completion, velocity, badges and focus areas for a plan.
    ///
    /// # Errors
    ///
    /// * `PlannerError::PlanNotFound` - When the plan does not exist
    pub async fn plan_analytics(&self, params: &Id) -> Result<PlanAnalytics> {
        let plan_id = params.id;
        self.with_db(move |db| {
            let plan = db
                .get_plan(plan_id)?
                .ok_or(PlannerError::PlanNotFound { id: plan_id })?;
            let skills = db
                .latest_resume(plan.user_id)?
                .map(|resume| resume.skills)
                .unwrap_or_default();
            Ok(analytics::plan_analytics(
                plan.id,
                &plan.goal,
                &plan.tasks,
                &skills,
            ))
        })
        .await
    }

    /// Trending technologies from the built-in table.
    pub fn trending(&self, params: &TrendQuery) -> Vec<TrendEntry> {
        TrendTable::builtin().trending(
            params.profession.as_deref(),
            params.min_relevance.unwrap_or(DEFAULT_MIN_RELEVANCE),
        )
    }
}
