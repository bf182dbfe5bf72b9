//! Drift detection and technology updates for the Planner.

use jiff::Timestamp;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    params::{ApplySuggestion, ApplyTechnologies, Id},
    reconciler::{PlanCheck, PlanRecommendations, SuggestionOutcome, TechUpdate},
    trends::{diff_summary, TrendTable, MIN_PLAN_AGE_DAYS},
};

impl Planner {
    /// Checks whether a plan's technologies have drifted from current trends.
    ///
    /// # Errors
    ///
    /// * `PlannerError::PlanNotFound` - When the plan does not exist
    pub async fn check_plan_updates(&self, params: &Id) -> Result<PlanCheck> {
        let plan = self.require_plan_record(params.id).await?;
        let now = Timestamp::now();
        let days_since_creation = plan.days_since_creation(now);

        let report =
            TrendTable::builtin().should_update(&plan.technologies, &plan.goal, days_since_creation);

        Ok(PlanCheck {
            plan_id: plan.id,
            days_since_creation,
            report,
            checked_at: now,
        })
    }

    /// Trending technologies the plan does not cover yet, bucketed by
    /// relevance.
    ///
    /// # Errors
    ///
    /// * `PlannerError::PlanNotFound` - When the plan does not exist
    pub async fn tech_recommendations(&self, params: &Id) -> Result<PlanRecommendations> {
        let plan = self.require_plan_record(params.id).await?;
        let recommendations = TrendTable::builtin().recommendations(&plan.goal, &plan.technologies);

        Ok(PlanRecommendations {
            plan_id: plan.id,
            profession: plan.goal,
            recommendations,
            generated_at: Timestamp::now(),
        })
    }

    /// Replaces a plan's technology list, bumps its version and marks it
    /// `Updated`.
    ///
    /// # Errors
    ///
    /// * `PlannerError::PlanNotFound` - When the plan does not exist
    pub async fn apply_technologies(&self, params: &ApplyTechnologies) -> Result<TechUpdate> {
        let plan_id = params.plan_id;
        let technologies = params.technologies.clone();

        let (old, new_version, technologies) = self
            .with_db(move |db| {
                let (old, version) = db
                    .replace_technologies(plan_id, &technologies)?
                    .ok_or(PlannerError::PlanNotFound { id: plan_id })?;
                Ok((old, version, technologies))
            })
            .await?;

        let changes = diff_summary(&old, &technologies);
        log::info!(
            "Plan {plan_id} updated to version {new_version} ({} added, {} removed)",
            changes.added_count,
            changes.removed_count
        );

        Ok(TechUpdate {
            plan_id,
            new_version,
            changes,
        })
    }

    /// Accepts an advisor suggestion: the user's plan moves to
    /// `UpdatePending` with a new version while its technology list stays
    /// as it is.
    pub async fn apply_suggestion(&self, params: &ApplySuggestion) -> Result<SuggestionOutcome> {
        let user_id = params.user_id;
        let plan_id = params.plan_id;
        let new_technologies_count = params.new_technologies.len();

        let outcome = self
            .with_db(move |db| db.mark_update_pending(plan_id, user_id))
            .await?
            .map_or(SuggestionOutcome::NotFound, |new_version| {
                SuggestionOutcome::Applied {
                    plan_id,
                    new_version,
                    new_technologies_count,
                }
            });

        match &outcome {
            SuggestionOutcome::Applied { new_version, .. } => {
                log::info!("Plan {plan_id} marked update pending at version {new_version}");
            }
            SuggestionOutcome::NotFound => {
                log::warn!("Suggestion for plan {plan_id} rejected: not found for user {user_id}");
            }
        }
        Ok(outcome)
    }

    /// One reconciler pass with the default staleness window.
    pub async fn sweep_stale_plans(&self, now: Timestamp) -> Result<Vec<u64>> {
        self.sweep_plans_older_than(now, MIN_PLAN_AGE_DAYS).await
    }

    /// Re-checks every active plan whose last update is at least
    /// `stale_after_days` old and flags the drifted ones as
    /// `UpdateAvailable`. Returns the IDs flagged.
    pub async fn sweep_plans_older_than(
        &self,
        now: Timestamp,
        stale_after_days: i64,
    ) -> Result<Vec<u64>> {
        self.with_db(move |db| {
            let table = TrendTable::builtin();
            let mut flagged = Vec::new();

            for plan in db.active_plans()? {
                let idle_days = now.duration_since(plan.last_updated).as_secs() / 86_400;
                if idle_days < stale_after_days {
                    continue;
                }

                let report = table.should_update(
                    &plan.technologies,
                    &plan.goal,
                    plan.days_since_creation(now),
                );
                if report.should_update && db.flag_update_available(plan.id, now)? {
                    log::info!("Plan {} marked for update review: {}", plan.id, report.reason);
                    flagged.push(plan.id);
                }
            }
            Ok(flagged)
        })
        .await
    }
}
