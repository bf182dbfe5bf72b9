//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::{collections::fmt_trend_table, datetime::LocalDateTime};
use crate::{
    models::{PlanSummary, Resume},
    reconciler::{PlanCheck, PlanRecommendations, SuggestionOutcome, TechUpdate, TrendSnapshot},
    trends::{TechDiff, Urgency},
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use pathfinder_core::{
///     display::CreateResult,
///     models::{ExperienceLevel, Resume},
/// };
/// use jiff::Timestamp;
///
/// let resume = Resume {
///     id: 4,
///     user_id: 1,
///     skills: vec!["Python".to_string()],
///     experience_level: ExperienceLevel::Intermediate,
///     uploaded_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(resume).to_string();
/// assert!(output.starts_with("Recorded resume with ID: 4"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PlanSummary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created plan with ID: {} ({} days)",
            self.resource.id, self.resource.total_days
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)?;

        if !self.resource.milestones.is_empty() {
            writeln!(f, "### Milestones")?;
            writeln!(f)?;
            for milestone in &self.resource.milestones {
                writeln!(f, "- {milestone}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CreateResult<Resume> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recorded resume with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Update check for plan {}", self.plan_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Update recommended**: {}",
            if self.report.should_update { "yes" } else { "no" }
        )?;
        writeln!(f, "- **Reason**: {}", self.report.reason)?;
        writeln!(f, "- **Urgency**: {}", self.report.urgency)?;
        writeln!(f, "- **Plan age**: {} days", self.days_since_creation)?;
        writeln!(f, "- **Checked**: {}", LocalDateTime(&self.checked_at))?;

        if let Some(new_technologies) = &self.report.new_technologies {
            writeln!(f, "\n## New Technologies")?;
            writeln!(f)?;
            fmt_trend_table(f, new_technologies)?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanRecommendations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Technology recommendations for plan {} ({})",
            self.plan_id, self.profession
        )?;

        writeln!(f, "\n## Must Learn")?;
        writeln!(f)?;
        fmt_trend_table(f, &self.recommendations.must_learn)?;

        writeln!(f, "\n## Good to Learn")?;
        writeln!(f)?;
        fmt_trend_table(f, &self.recommendations.good_to_learn)?;

        if !self.recommendations.emerging.is_empty() {
            writeln!(f, "\n## Emerging")?;
            writeln!(f)?;
            fmt_trend_table(f, &self.recommendations.emerging)?;
        }
        Ok(())
    }
}

impl fmt::Display for TechDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.added.is_empty() && self.removed.is_empty() {
            return writeln!(f, "No technology changes.");
        }
        writeln!(f, "Changes made:")?;
        for added in &self.added {
            writeln!(f, "- Added {added}")?;
        }
        for removed in &self.removed {
            writeln!(f, "- Removed {removed}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TechUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Updated plan {} to version {} ({} added, {} removed)",
            self.plan_id, self.new_version, self.changes.added_count, self.changes.removed_count
        )?;
        writeln!(f)?;
        write!(f, "{}", self.changes)
    }
}

impl fmt::Display for SuggestionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionOutcome::Applied {
                plan_id,
                new_version,
                new_technologies_count,
            } => writeln!(
                f,
                "Plan {plan_id} marked update pending at version {new_version} \
                 ({new_technologies_count} suggested technologies)"
            ),
            SuggestionOutcome::NotFound => writeln!(f, "Plan not found for this user."),
        }
    }
}

impl fmt::Display for TrendSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Trending ({})", LocalDateTime(&self.polled_at))?;
        writeln!(f)?;
        fmt_trend_table(f, &self.trending)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::trends::{diff_summary, DriftReport, TrendEntry};

    #[test]
    fn test_plan_check_too_new_has_no_table() {
        let check = PlanCheck {
            plan_id: 3,
            days_since_creation: 2,
            report: DriftReport {
                should_update: false,
                reason: "Plan too new to check for updates".to_string(),
                new_technologies: None,
                urgency: Urgency::NotNeeded,
            },
            checked_at: Timestamp::now(),
        };
        let output = check.to_string();
        assert!(output.contains("- **Update recommended**: no"));
        assert!(output.contains("- **Urgency**: none"));
        assert!(!output.contains("## New Technologies"));
    }

    #[test]
    fn test_plan_check_lists_new_technologies() {
        let check = PlanCheck {
            plan_id: 3,
            days_since_creation: 30,
            report: DriftReport {
                should_update: true,
                reason: "2 new high-relevance technologies detected".to_string(),
                new_technologies: Some(vec![TrendEntry::new(
                    "Kubernetes",
                    "DevOps",
                    90,
                    &["DevOps Engineer"],
                )]),
                urgency: Urgency::Medium,
            },
            checked_at: Timestamp::now(),
        };
        let output = check.to_string();
        assert!(output.contains("## New Technologies"));
        assert!(output.contains("| Kubernetes | DevOps | 90 |"));
    }

    #[test]
    fn test_tech_update_lists_changes() {
        let update = TechUpdate {
            plan_id: 1,
            new_version: 2,
            changes: diff_summary(&["React"], &["React", "Astro"]),
        };
        let output = update.to_string();
        assert!(output.contains("version 2 (1 added, 0 removed)"));
        assert!(output.contains("- Added astro"));

        let unchanged = diff_summary(&["Go"], &["go"]);
        assert_eq!(unchanged.to_string(), "No technology changes.\n");
    }

    #[test]
    fn test_suggestion_outcome_display() {
        assert_eq!(
            SuggestionOutcome::NotFound.to_string(),
            "Plan not found for this user.\n"
        );
        let applied = SuggestionOutcome::Applied {
            plan_id: 5,
            new_version: 2,
            new_technologies_count: 3,
        };
        assert!(applied.to_string().contains("Plan 5 marked update pending at version 2"));
    }
}
