//! Learning analytics over a plan's task records.

use std::collections::BTreeSet;

use jiff::{civil::Date, tz::TimeZone, ToSpan};
use serde::{Deserialize, Serialize};

use crate::{models::DailyTask, progress::round_to};

/// Task records needed before velocity is reported.
pub const MIN_VELOCITY_SAMPLE: usize = 7;

/// Hours budgeted per missing focus skill.
pub const HOURS_PER_MISSING_SKILL: u32 = 40;

/// Assumed completion pace when estimating the days left.
pub const TASKS_PER_DAY: f64 = 1.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VelocityTrend {
    InsufficientData,
    Accelerating,
    Steady,
}

/// Completion pace over a set of task records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningVelocity {
    /// Completed tasks per week, two decimals
    pub velocity: f64,
    /// Share of records completed, as a percentage with one decimal
    pub consistency: f64,
    pub trend: VelocityTrend,
    pub tasks_per_week: f64,
}

/// An earned achievement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub emoji: String,
    pub name: String,
}

impl Badge {
    fn new(id: &str, emoji: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            emoji: emoji.to_string(),
            name: name.to_string(),
        }
    }
}

/// Study focus suggestions for a goal with a known skill map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FocusRecommendations {
    /// Up to three missing skills
    pub focus_areas: Vec<String>,
    pub recommended_resources: Vec<String>,
    pub challenge_level: String,
    pub estimated_hours_remaining: u32,
}

/// Dashboard numbers for one plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanAnalytics {
    pub plan_id: u64,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub completion_rate: f64,
    pub remaining_tasks: u32,
    pub estimated_days_left: f64,
    pub velocity: LearningVelocity,
    pub badges: Vec<Badge>,
    pub recommendations: FocusRecommendations,
}

const SKILL_MAPS: &[(&str, &[&str])] = &[
    (
        "AI Engineer",
        &["Python", "Machine Learning", "TensorFlow", "PyTorch", "NLP", "Deep Learning"],
    ),
    (
        "Data Scientist",
        &["Python", "Statistics", "SQL", "Pandas", "Scikit-learn", "Data Visualization"],
    ),
    (
        "Software Engineer",
        &["Python", "JavaScript", "System Design", "Databases", "Git"],
    ),
];

const RESOURCES: &[(&str, &str)] = &[
    ("machine learning", "Andrew Ng's Machine Learning Course (Coursera)"),
    ("tensorflow", "TensorFlow Official Tutorials"),
    ("nlp", "Hugging Face NLP Course"),
    ("deep learning", "Fast.ai Deep Learning"),
    ("system design", "System Design Interview Prep"),
];

fn completed_count(tasks: &[DailyTask]) -> u32 {
    tasks.iter().filter(|task| task.completed).count() as u32
}

/// Completion pace over `tasks`; fewer than seven records is not enough data.
pub fn learning_velocity(tasks: &[DailyTask]) -> LearningVelocity {
    if tasks.len() < MIN_VELOCITY_SAMPLE {
        return LearningVelocity {
            velocity: 0.0,
            consistency: 0.0,
            trend: VelocityTrend::InsufficientData,
            tasks_per_week: 0.0,
        };
    }

    let completed = f64::from(completed_count(tasks));
    let days = tasks.len() as f64;
    let weeks = (days / 7.0).max(1.0);

    LearningVelocity {
        velocity: round_to(completed / weeks, 2),
        consistency: round_to(completed / days * 100.0, 1),
        trend: if completed > days / 2.0 {
            VelocityTrend::Accelerating
        } else {
            VelocityTrend::Steady
        },
        tasks_per_week: round_to(completed / weeks, 1),
    }
}

/// Length of the run of consecutive completion dates ending at the latest one.
pub fn current_streak(tasks: &[DailyTask]) -> u32 {
    let dates: BTreeSet<Date> = tasks
        .iter()
        .filter(|task| task.completed)
        .filter_map(|task| task.completed_date)
        .map(|stamp| stamp.to_zoned(TimeZone::UTC).date())
        .collect();

    let Some(mut day) = dates.last().copied() else {
        return 0;
    };
    let mut streak = 0;
    while dates.contains(&day) {
        streak += 1;
        day = match day.checked_sub(1.day()) {
            Ok(previous) => previous,
            Err(_) => break,
        };
    }
    streak
}

/// Badges earned by the completed tasks in `tasks`.
pub fn achievement_badges(tasks: &[DailyTask]) -> Vec<Badge> {
    let completed = completed_count(tasks);
    let streak = current_streak(tasks);

    let mut badges = Vec::new();
    if completed >= 7 {
        badges.push(Badge::new("early_bird", "🌅", "Early Bird"));
    }
    if completed >= 30 {
        badges.push(Badge::new("consistent_learner", "📚", "Consistent Learner"));
    }
    if completed >= 50 {
        badges.push(Badge::new("momentum", "🚀", "Momentum"));
    }
    if completed >= 100 {
        badges.push(Badge::new("master", "👑", "Master"));
    }
    if streak >= 7 {
        badges.push(Badge::new("streak_7", "🔥", "7-Day Streak"));
    }
    badges
}

/// Top missing skills for `goal` with a study resource for each.
///
/// Goals without a skill map get no focus areas.
pub fn focus_recommendations<S: AsRef<str>>(skills: &[S], goal: &str) -> FocusRecommendations {
    let required = SKILL_MAPS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(goal))
        .map_or(&[][..], |(_, skills)| *skills);

    let held: BTreeSet<String> = skills.iter().map(|s| s.as_ref().to_lowercase()).collect();
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|skill| !held.contains(&skill.to_lowercase()))
        .collect();

    let recommended_resources = missing
        .iter()
        .take(3)
        .map(|skill| {
            let key = skill.to_lowercase();
            RESOURCES
                .iter()
                .find(|(name, _)| *name == key)
                .map_or_else(|| format!("{skill} Official Docs"), |(_, r)| (*r).to_string())
        })
        .collect();

    FocusRecommendations {
        focus_areas: missing.iter().take(3).map(|s| (*s).to_string()).collect(),
        recommended_resources,
        challenge_level: "intermediate".to_string(),
        estimated_hours_remaining: missing.len() as u32 * HOURS_PER_MISSING_SKILL,
    }
}

/// Full dashboard for a plan's tasks, given the learner's skills.
pub fn plan_analytics<S: AsRef<str>>(
    plan_id: u64,
    goal: &str,
    tasks: &[DailyTask],
    skills: &[S],
) -> PlanAnalytics {
    let total_tasks = tasks.len() as u32;
    let completed_tasks = completed_count(tasks);
    let remaining_tasks = total_tasks - completed_tasks;

    PlanAnalytics {
        plan_id,
        total_tasks,
        completed_tasks,
        completion_rate: round_to(
            crate::progress::completion_percentage(completed_tasks, total_tasks),
            1,
        ),
        remaining_tasks,
        estimated_days_left: f64::from(remaining_tasks) / TASKS_PER_DAY,
        velocity: learning_velocity(tasks),
        badges: achievement_badges(tasks),
        recommendations: focus_recommendations(skills, goal),
    }
}
