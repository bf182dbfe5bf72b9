//! Expands a career goal into a day-by-day plan.
//!
//! Generation is deterministic and never fails: an unknown goal gets the
//! generic plan, and a phase without a task pool gets placeholder text.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{self, ProfessionTemplate, TemplateLookup},
    models::{Difficulty, ExperienceLevel, Milestone},
};

/// Days per month when sizing a plan.
pub const DAYS_PER_MONTH: u32 = 30;

const GENERIC_TEMPLATES: [&str; 10] = [
    "Read a system design article or blog and summarize key takeaways",
    "Study core principles: scalability, availability, consistency",
    "Practice designing a component (APIs, data model, storage) on paper",
    "Implement a small prototype or proof-of-concept for a subsystem",
    "Review distributed systems patterns (load balancing, sharding, caching)",
    "Analyze a real-world system case study and note trade-offs",
    "Do a mock system design interview: sketch architecture and justify choices",
    "Improve previous designs: add reliability and monitoring considerations",
    "Write tests/specs for a designed component and think about scaling",
    "Refactor a prototype to improve performance or simplicity",
];

/// One generated day, before it is dated and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedTask {
    pub day: u32,
    pub task: String,
    pub focus_area: String,
    pub recommended_hours: u32,
    pub difficulty: Difficulty,
}

/// Output of [`generate_plan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub total_days: u32,
    pub tasks: Vec<PlannedTask>,
    /// Required skills the learner does not have yet, in template order
    pub technologies: Vec<String>,
    pub milestones: Vec<Milestone>,
    pub experience_level: ExperienceLevel,
}

/// Generates a plan of exactly `duration_months * 30` days for `goal`.
///
/// Template phases are walked in order and repeated when the requested
/// duration is longer than the template, so every plan has exactly
/// `total_days` tasks rather than stopping at the template's last week.
/// Day numbers are contiguous from 1.
pub fn generate_plan<S: AsRef<str>>(
    goal: &str,
    duration_months: u32,
    current_skills: &[S],
    experience_level: ExperienceLevel,
) -> GeneratedPlan {
    let total_days = duration_months.saturating_mul(DAYS_PER_MONTH);

    match catalog::lookup(goal) {
        TemplateLookup::Found(template) => {
            log::debug!("Generating '{}' plan over {total_days} days", template.key);
            GeneratedPlan {
                total_days,
                tasks: template_tasks(template, total_days),
                technologies: skill_gaps(template.skills_required, current_skills),
                milestones: template
                    .milestones
                    .iter()
                    .map(|(week, text)| Milestone {
                        week: *week,
                        milestone: (*text).to_string(),
                    })
                    .collect(),
                experience_level,
            }
        }
        TemplateLookup::NotFound => {
            log::debug!("No template for '{goal}', using the generic plan");
            generic_plan(goal, total_days, experience_level)
        }
    }
}

fn template_tasks(template: &ProfessionTemplate, total_days: u32) -> Vec<PlannedTask> {
    let mut tasks = Vec::with_capacity(total_days as usize);
    let cycle_days: u32 = template.phases.iter().map(catalog::Phase::days).sum();
    if cycle_days == 0 {
        return tasks;
    }

    let mut day = 0;
    'cycle: loop {
        for phase in template.phases {
            for day_in_phase in 1..=phase.days() {
                if day == total_days {
                    break 'cycle;
                }
                day += 1;
                tasks.push(PlannedTask {
                    day,
                    task: phase_task(phase.focus, day_in_phase),
                    focus_area: phase.focus.to_string(),
                    recommended_hours: phase.daily_hours,
                    difficulty: Difficulty::for_day(day, total_days),
                });
            }
        }
        if day == total_days {
            break;
        }
    }
    tasks
}

fn phase_task(focus: &str, day_in_phase: u32) -> String {
    match catalog::task_pool(focus) {
        Some(pool) if !pool.is_empty() => {
            pool[(day_in_phase as usize - 1) % pool.len()].to_string()
        }
        _ => format!("Work on {focus} - Day {day_in_phase}"),
    }
}

fn generic_plan(goal: &str, total_days: u32, experience_level: ExperienceLevel) -> GeneratedPlan {
    let tasks = (1..=total_days)
        .map(|day| {
            let index = (day - 1) as usize;
            PlannedTask {
                day,
                task: format!(
                    "{} (Day {day})",
                    GENERIC_TEMPLATES[index % GENERIC_TEMPLATES.len()]
                ),
                focus_area: goal.to_string(),
                recommended_hours: 3 + (day - 1) % 3,
                difficulty: Difficulty::for_day(day, total_days),
            }
        })
        .collect();

    GeneratedPlan {
        total_days,
        tasks,
        technologies: Vec::new(),
        milestones: vec![
            Milestone {
                week: 2,
                milestone: format!("Complete Week 2 of {goal} learning"),
            },
            Milestone {
                week: 13,
                milestone: format!("Halfway through {goal} mastery"),
            },
            Milestone {
                week: 26,
                milestone: format!("Complete {goal} learning plan"),
            },
        ],
        experience_level,
    }
}

/// Required skills not covered by `current_skills`, compared case-insensitively.
pub fn skill_gaps<S: AsRef<str>>(required: &[&str], current_skills: &[S]) -> Vec<String> {
    let held: Vec<String> = current_skills
        .iter()
        .map(|skill| skill.as_ref().to_lowercase())
        .collect();
    required
        .iter()
        .filter(|skill| !held.contains(&skill.to_lowercase()))
        .map(|skill| (*skill).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_SKILLS: [&str; 0] = [];

    #[test]
    fn test_supported_goal_has_contiguous_days() {
        for months in [1, 3, 6] {
            let plan = generate_plan("Software Engineer", months, &NO_SKILLS, ExperienceLevel::Beginner);
            assert_eq!(plan.total_days, months * 30);
            assert_eq!(plan.tasks.len(), (months * 30) as usize);
            for (index, task) in plan.tasks.iter().enumerate() {
                assert_eq!(task.day, index as u32 + 1);
            }
        }
    }

    #[test]
    fn test_long_plans_cycle_through_phases() {
        let plan = generate_plan("Data Scientist", 9, &NO_SKILLS, ExperienceLevel::Intermediate);
        assert_eq!(plan.tasks.len(), 270);
        assert_eq!(plan.tasks.last().map(|t| t.day), Some(270));
        // Day 183 starts the phase sequence over.
        assert_eq!(plan.tasks[182].focus_area, plan.tasks[0].focus_area);
        assert_eq!(plan.tasks[182].task, plan.tasks[0].task);
    }

    #[test]
    fn test_difficulty_is_monotonic() {
        let plan = generate_plan("Web Developer", 6, &NO_SKILLS, ExperienceLevel::Beginner);
        assert!(plan
            .tasks
            .windows(2)
            .all(|pair| pair[0].difficulty <= pair[1].difficulty));
        assert_eq!(plan.tasks[0].difficulty, Difficulty::Easy);
        assert_eq!(plan.tasks[179].difficulty, Difficulty::VeryHard);
    }

    #[test]
    fn test_web_developer_one_month() {
        let plan = generate_plan("Web Developer", 1, &NO_SKILLS, ExperienceLevel::Beginner);
        let days: Vec<u32> = plan.tasks.iter().map(|t| t.day).collect();
        assert_eq!(days, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_unknown_goal_uses_generic_plan() {
        let goal = "Underwater Basket Weaver";
        let plan = generate_plan(goal, 2, &NO_SKILLS, ExperienceLevel::Advanced);

        assert_eq!(plan.tasks.len(), 60);
        assert!(plan.tasks.iter().all(|t| t.focus_area == goal));
        assert!(plan.technologies.is_empty());
        assert_eq!(plan.milestones.len(), 3);
        assert!(plan.milestones.iter().all(|m| m.milestone.contains(goal)));

        assert_eq!(
            plan.tasks[0].task,
            "Read a system design article or blog and summarize key takeaways (Day 1)"
        );
        assert_eq!(plan.tasks[10].task, format!("{} (Day 11)", GENERIC_TEMPLATES[0]));
        let hours: Vec<u32> = plan.tasks.iter().take(4).map(|t| t.recommended_hours).collect();
        assert_eq!(hours, vec![3, 4, 5, 3]);
    }

    #[test]
    fn test_phase_text_repeats_cyclically() {
        let plan = generate_plan("Software Engineer", 1, &NO_SKILLS, ExperienceLevel::Beginner);
        // Python Fundamentals has eight tasks and spans fourteen days.
        assert_eq!(plan.tasks[8].task, plan.tasks[0].task);
        assert_eq!(plan.tasks[0].focus_area, "Python Fundamentals");
        assert_eq!(plan.tasks[14].focus_area, "Web Development Basics (HTML/CSS)");
        assert_eq!(plan.tasks[14].task, "Learn HTML semantic elements and structure");
    }

    #[test]
    fn test_phase_without_pool_gets_placeholder() {
        assert_eq!(
            phase_task("Portfolio & Interview Prep", 3),
            "Work on Portfolio & Interview Prep - Day 3"
        );
    }

    #[test]
    fn test_skill_gaps_ignore_case_and_keep_order() {
        let gaps = skill_gaps(&["Python", "JavaScript", "SQL", "React"], &["python", "REACT"]);
        assert_eq!(gaps, vec!["JavaScript".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn test_zero_months_yields_empty_plan() {
        let plan = generate_plan("Software Engineer", 0, &NO_SKILLS, ExperienceLevel::Beginner);
        assert_eq!(plan.total_days, 0);
        assert!(plan.tasks.is_empty());
    }
}
