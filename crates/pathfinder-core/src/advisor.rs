//! Skill assessment and trend-based suggestions for a learner.
//!
//! [`assess`] combines what the resume says a learner knows with what their
//! active plan asks for. [`recommend`] runs the result through the trend
//! table. Both are pure; the planner loads the inputs.

use serde::{Deserialize, Serialize};

use crate::{
    models::{ExperienceLevel, Plan, Resume},
    trends::{TrendEntry, TrendTable},
};

/// Skill gaps reported in an assessment.
pub const ASSESSMENT_GAP_LIMIT: usize = 5;

/// Entries kept per recommendation bucket.
pub const RECOMMENDATION_LIMIT: usize = 3;

/// Relevance floor used when recommending to a learner.
pub const ADVISOR_THRESHOLD: u8 = 80;

/// Goal used for trend lookups when the learner has no active plan.
pub const UNKNOWN_GOAL: &str = "Unknown";

/// Estimated proficiency of a learner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    /// Nothing is known about the learner
    Unknown,
}

impl From<ExperienceLevel> for Proficiency {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Beginner => Proficiency::Beginner,
            ExperienceLevel::Intermediate => Proficiency::Intermediate,
            ExperienceLevel::Advanced => Proficiency::Advanced,
        }
    }
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Unknown => "unknown",
        }
    }
}

/// Where a learner stands relative to their active plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillAssessment {
    pub current_skills: Vec<String>,
    /// Technologies of the active plan
    pub plan_skills: Vec<String>,
    /// Plan technologies the learner does not list, at most five
    pub skill_gaps: Vec<String>,
    pub proficiency: Proficiency,
    pub plan_goal: Option<String>,
    /// Active-plan tasks completed in the last 30 days
    pub recent_tasks_completed: u32,
}

impl SkillAssessment {
    /// Assessment for a learner with no resume and no plan.
    pub fn unknown() -> Self {
        Self {
            current_skills: Vec::new(),
            plan_skills: Vec::new(),
            skill_gaps: Vec::new(),
            proficiency: Proficiency::Unknown,
            plan_goal: None,
            recent_tasks_completed: 0,
        }
    }
}

/// Trend-driven suggestions for a learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub skill_gaps: Vec<String>,
    pub must_learn: Vec<TrendEntry>,
    pub good_to_learn: Vec<TrendEntry>,
    pub new_technologies: Vec<TrendEntry>,
    pub total_new_detected: usize,
    pub recommend_plan_update: bool,
}

/// An assessment together with the suggestions derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestions {
    pub assessment: SkillAssessment,
    pub recommendations: Recommendations,
}

/// Builds an assessment from the learner's latest resume and active plan.
pub fn assess(
    resume: Option<&Resume>,
    active_plan: Option<&Plan>,
    recent_tasks_completed: u32,
) -> SkillAssessment {
    if resume.is_none() && active_plan.is_none() {
        return SkillAssessment::unknown();
    }

    let current_skills = resume.map(|r| r.skills.clone()).unwrap_or_default();
    let proficiency = resume
        .map(|r| r.experience_level)
        .unwrap_or_default()
        .into();
    let plan_skills = active_plan
        .map(|p| p.technologies.clone())
        .unwrap_or_default();

    let held: Vec<String> = current_skills.iter().map(|s| s.to_lowercase()).collect();
    let skill_gaps = plan_skills
        .iter()
        .filter(|skill| !held.contains(&skill.to_lowercase()))
        .take(ASSESSMENT_GAP_LIMIT)
        .cloned()
        .collect();

    SkillAssessment {
        current_skills,
        plan_skills,
        skill_gaps,
        proficiency,
        plan_goal: active_plan.map(|p| p.goal.clone()),
        recent_tasks_completed,
    }
}

/// Suggests technologies for the assessed learner's plan goal.
pub fn recommend(assessment: &SkillAssessment, table: &TrendTable) -> Recommendations {
    let goal = assessment.plan_goal.as_deref().unwrap_or(UNKNOWN_GOAL);
    let detected = table.detect_new(&assessment.plan_skills, goal, ADVISOR_THRESHOLD);
    let buckets = table.recommendations(goal, &assessment.plan_skills);

    Recommendations {
        skill_gaps: assessment.skill_gaps.clone(),
        must_learn: buckets.must_learn.into_iter().take(RECOMMENDATION_LIMIT).collect(),
        good_to_learn: buckets
            .good_to_learn
            .into_iter()
            .take(RECOMMENDATION_LIMIT)
            .collect(),
        new_technologies: detected
            .new_technologies
            .into_iter()
            .take(RECOMMENDATION_LIMIT)
            .collect(),
        total_new_detected: detected.total_new,
        recommend_plan_update: detected.total_new >= 2,
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::PlanStatus;

    fn resume(skills: &[&str], level: ExperienceLevel) -> Resume {
        Resume {
            id: 1,
            user_id: 7,
            skills: skills.iter().map(ToString::to_string).collect(),
            experience_level: level,
            uploaded_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn plan(goal: &str, technologies: &[&str]) -> Plan {
        Plan {
            id: 3,
            user_id: 7,
            resume_id: None,
            goal: goal.to_string(),
            duration_months: 1,
            start_date: Timestamp::UNIX_EPOCH,
            end_date: Timestamp::UNIX_EPOCH,
            milestones: Vec::new(),
            technologies: technologies.iter().map(ToString::to_string).collect(),
            status: PlanStatus::Active,
            version: 1,
            last_updated: Timestamp::UNIX_EPOCH,
            created_at: Timestamp::UNIX_EPOCH,
            tasks: Vec::new(),
        }
    }

    #[test]
    fn test_unknown_learner() {
        let assessment = assess(None, None, 0);
        assert_eq!(assessment, SkillAssessment::unknown());
        assert_eq!(assessment.proficiency.as_str(), "unknown");
    }

    #[test]
    fn test_plan_without_resume_defaults_to_beginner() {
        let plan = plan("AI Engineer", &["Python", "PyTorch"]);
        let assessment = assess(None, Some(&plan), 4);
        assert_eq!(assessment.proficiency, Proficiency::Beginner);
        assert_eq!(assessment.skill_gaps, vec!["Python", "PyTorch"]);
        assert_eq!(assessment.plan_goal.as_deref(), Some("AI Engineer"));
        assert_eq!(assessment.recent_tasks_completed, 4);
    }

    #[test]
    fn test_gaps_ignore_case_and_are_capped() {
        let resume = resume(&["python"], ExperienceLevel::Advanced);
        let plan = plan("Data Scientist", &["Python", "A", "B", "C", "D", "E", "F"]);
        let assessment = assess(Some(&resume), Some(&plan), 0);
        assert_eq!(assessment.skill_gaps, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(assessment.proficiency, Proficiency::Advanced);
    }

    #[test]
    fn test_recommend_caps_each_bucket() {
        let plan = plan("AI Engineer", &["Python"]);
        let assessment = assess(None, Some(&plan), 0);
        let recs = recommend(&assessment, TrendTable::builtin());

        assert!(recs.must_learn.len() <= RECOMMENDATION_LIMIT);
        assert!(recs.good_to_learn.len() <= RECOMMENDATION_LIMIT);
        assert_eq!(recs.new_technologies.len(), RECOMMENDATION_LIMIT);
        assert!(recs.total_new_detected >= 2);
        assert!(recs.recommend_plan_update);
    }

    #[test]
    fn test_recommend_for_unknown_goal_is_empty() {
        let recs = recommend(&SkillAssessment::unknown(), TrendTable::builtin());
        assert!(recs.must_learn.is_empty());
        assert!(recs.new_technologies.is_empty());
        assert_eq!(recs.total_new_detected, 0);
        assert!(!recs.recommend_plan_update);
    }
}
