//! Display implementations for assessments, suggestions and analytics.

use std::fmt;

use super::collections::fmt_trend_table;
use crate::{
    advisor::{Proficiency, SkillAssessment, Suggestions},
    analytics::{PlanAnalytics, VelocityTrend},
};

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for VelocityTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VelocityTrend::InsufficientData => "insufficient data",
            VelocityTrend::Accelerating => "accelerating",
            VelocityTrend::Steady => "steady",
        };
        write!(f, "{label}")
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl fmt::Display for SkillAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Skill Assessment")?;
        writeln!(f)?;
        writeln!(f, "- **Proficiency**: {}", self.proficiency)?;
        if let Some(goal) = &self.plan_goal {
            writeln!(f, "- **Goal**: {goal}")?;
        }
        writeln!(f, "- **Current skills**: {}", list_or_none(&self.current_skills))?;
        writeln!(f, "- **Plan skills**: {}", list_or_none(&self.plan_skills))?;
        writeln!(f, "- **Skill gaps**: {}", list_or_none(&self.skill_gaps))?;
        writeln!(
            f,
            "- **Tasks completed (30 days)**: {}",
            self.recent_tasks_completed
        )
    }
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.assessment)?;

        let recs = &self.recommendations;
        writeln!(f, "\n## Must Learn")?;
        writeln!(f)?;
        fmt_trend_table(f, &recs.must_learn)?;

        writeln!(f, "\n## Good to Learn")?;
        writeln!(f)?;
        fmt_trend_table(f, &recs.good_to_learn)?;

        writeln!(
            f,
            "\n## New Technologies ({} detected)",
            recs.total_new_detected
        )?;
        writeln!(f)?;
        fmt_trend_table(f, &recs.new_technologies)?;

        if recs.recommend_plan_update {
            writeln!(f)?;
            writeln!(f, "**A plan update is recommended.**")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanAnalytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Analytics for plan {}", self.plan_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Completion**: {}/{} tasks ({:.1}%)",
            self.completed_tasks, self.total_tasks, self.completion_rate
        )?;
        writeln!(
            f,
            "- **Remaining**: {} tasks, about {:.1} days",
            self.remaining_tasks, self.estimated_days_left
        )?;

        let velocity = &self.velocity;
        writeln!(f, "\n## Velocity")?;
        writeln!(f)?;
        writeln!(f, "- **Tasks per week**: {:.2}", velocity.tasks_per_week)?;
        writeln!(f, "- **Consistency**: {:.1}%", velocity.consistency)?;
        writeln!(f, "- **Trend**: {}", velocity.trend)?;

        if !self.badges.is_empty() {
            writeln!(f, "\n## Badges")?;
            writeln!(f)?;
            for badge in &self.badges {
                writeln!(f, "- {} {}", badge.emoji, badge.name)?;
            }
        }

        let focus = &self.recommendations;
        writeln!(f, "\n## Focus")?;
        writeln!(f)?;
        writeln!(f, "- **Challenge level**: {}", focus.challenge_level)?;
        writeln!(f, "- **Focus areas**: {}", list_or_none(&focus.focus_areas))?;
        writeln!(
            f,
            "- **Estimated hours remaining**: {}",
            focus.estimated_hours_remaining
        )?;
        for resource in &focus.recommended_resources {
            writeln!(f, "- Resource: {resource}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::Recommendations;

    #[test]
    fn test_unknown_assessment_display() {
        let output = SkillAssessment::unknown().to_string();
        assert!(output.contains("- **Proficiency**: unknown"));
        assert!(output.contains("- **Skill gaps**: none"));
        assert!(!output.contains("**Goal**"));
    }

    #[test]
    fn test_suggestions_flag_plan_update() {
        let suggestions = Suggestions {
            assessment: SkillAssessment::unknown(),
            recommendations: Recommendations {
                skill_gaps: vec![],
                must_learn: vec![],
                good_to_learn: vec![],
                new_technologies: vec![],
                total_new_detected: 4,
                recommend_plan_update: true,
            },
        };
        let output = suggestions.to_string();
        assert!(output.contains("## New Technologies (4 detected)"));
        assert!(output.contains("A plan update is recommended."));
    }
}
