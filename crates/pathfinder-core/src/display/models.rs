//! Display implementations for domain models.
//!
//! Everything renders as markdown so the CLI can hand it straight to the
//! terminal renderer.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{
    DailyTask, Difficulty, ExperienceLevel, Milestone, Plan, PlanStatus, PlanSummary,
    ProgressSnapshot, ProgressUpdate, Resume, TaskPage,
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}: {}", self.week, self.milestone)
    }
}

/// Writes a `- **Technologies**:` line, or nothing for an empty list.
fn fmt_technologies(f: &mut fmt::Formatter<'_>, technologies: &[String]) -> fmt::Result {
    if technologies.is_empty() {
        return Ok(());
    }
    writeln!(f, "- **Technologies**: {}", technologies.join(", "))
}

fn fmt_milestones(f: &mut fmt::Formatter<'_>, milestones: &[Milestone]) -> fmt::Result {
    if milestones.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n## Milestones")?;
    writeln!(f)?;
    for milestone in milestones {
        writeln!(f, "- {milestone}")?;
    }
    Ok(())
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.goal)?;
        writeln!(f)?;

        let summary = PlanSummary::from(self);
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Version: {}", self.version)?;
        writeln!(
            f,
            "- Duration: {} months ({} days)",
            self.duration_months,
            self.total_days()
        )?;
        writeln!(
            f,
            "- Schedule: {} to {}",
            LocalDate(&self.start_date),
            LocalDate(&self.end_date)
        )?;
        writeln!(
            f,
            "- Progress: {}/{} days ({:.2}%)",
            summary.completed_days, summary.total_days, summary.completion_percentage
        )?;
        writeln!(f, "- Last updated: {}", LocalDateTime(&self.last_updated))?;
        if !self.technologies.is_empty() {
            writeln!(f, "- Technologies: {}", self.technologies.join(", "))?;
        }

        fmt_milestones(f, &self.milestones)?;

        match self.next_pending_task() {
            Some(task) => {
                writeln!(f, "\n## Next Task")?;
                writeln!(f)?;
                write!(f, "{task}")?;
            }
            None if self.tasks.is_empty() => writeln!(f, "\nNo tasks in this plan.")?,
            None => writeln!(f, "\nAll tasks completed.")?,
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.goal, self.id, self.completed_days, self.total_days
        )?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {} (version {})", self.status, self.version)?;
        writeln!(
            f,
            "- **Schedule**: {} to {} ({} months)",
            LocalDate(&self.start_date),
            LocalDate(&self.end_date),
            self.duration_months
        )?;
        writeln!(f, "- **Completion**: {:.2}%", self.completion_percentage)?;
        fmt_technologies(f, &self.technologies)?;
        writeln!(f)?;

        Ok(())
    }
}

impl DailyTask {
    fn status_icon(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for DailyTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Day {}: {} ({} {})",
            self.day,
            self.task,
            self.status_icon(),
            if self.completed { "done" } else { "todo" }
        )?;
        writeln!(f)?;
        writeln!(f, "- **Task ID**: {}", self.id)?;
        writeln!(f, "- **Focus**: {}", self.focus_area)?;
        writeln!(
            f,
            "- **Difficulty**: {} ({}h recommended)",
            self.difficulty, self.recommended_hours
        )?;
        writeln!(f, "- **Planned**: {}", LocalDate(&self.planned_date))?;
        if let Some(completed) = &self.completed_date {
            writeln!(f, "- **Completed**: {}", LocalDateTime(completed))?;
        }
        if self.hours_spent > 0.0 {
            writeln!(f, "- **Hours spent**: {}", self.hours_spent)?;
        }
        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for TaskPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Plan {} tasks (page {} of {}, {} total)",
            self.plan_id, self.current_page, self.total_pages, self.total_tasks
        )?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            return writeln!(f, "No tasks on this page.");
        }
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Resume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Resume {} (user {})", self.id, self.user_id)?;
        writeln!(f)?;
        writeln!(f, "- **Experience**: {}", self.experience_level)?;
        if self.skills.is_empty() {
            writeln!(f, "- **Skills**: none")?;
        } else {
            writeln!(f, "- **Skills**: {}", self.skills.join(", "))?;
        }
        writeln!(f, "- **Uploaded**: {}", LocalDateTime(&self.uploaded_at))
    }
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Progress for user {}", self.user_id)?;
        writeln!(f)?;
        if let Some(plan_id) = self.plan_id {
            writeln!(f, "- **Plan**: {plan_id}")?;
        }
        writeln!(
            f,
            "- **Completed**: {}/{} days ({:.2}%)",
            self.total_days_completed, self.total_days_planned, self.completion_percentage
        )?;
        writeln!(f, "- **Last updated**: {}", LocalDateTime(&self.last_updated))
    }
}

impl fmt::Display for ProgressUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Updated task {} (day {} of plan {})",
            self.task.id, self.task.day, self.task.plan_id
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Plan progress**: {}/{} tasks ({:.2}%)",
            self.completed_tasks, self.total_tasks, self.completion_percentage
        )?;
        writeln!(f)?;
        write!(f, "{}", self.task)?;

        match &self.next_task {
            Some(next) => {
                writeln!(f, "## Up Next")?;
                writeln!(f)?;
                write!(f, "{next}")
            }
            None => writeln!(f, "All tasks in this plan are completed."),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn task(day: u32, completed: bool) -> DailyTask {
        let now = Timestamp::now();
        DailyTask {
            id: u64::from(day),
            plan_id: 1,
            day,
            task: format!("Study topic {day}"),
            focus_area: "Fundamentals".to_string(),
            recommended_hours: 3,
            difficulty: Difficulty::Easy,
            planned_date: now,
            completed,
            completed_date: completed.then_some(now),
            hours_spent: if completed { 2.5 } else { 0.0 },
            notes: completed.then(|| "Went well".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    fn plan(tasks: Vec<DailyTask>) -> Plan {
        let now = Timestamp::now();
        Plan {
            id: 7,
            user_id: 1,
            resume_id: None,
            goal: "Data Scientist".to_string(),
            duration_months: 1,
            start_date: now,
            end_date: now,
            milestones: vec![Milestone {
                week: 4,
                milestone: "Ship a model".to_string(),
            }],
            technologies: vec!["Python".to_string(), "SQL".to_string()],
            status: PlanStatus::Active,
            version: 1,
            last_updated: now,
            created_at: now,
            tasks,
        }
    }

    #[test]
    fn test_plan_display_shows_next_task() {
        let output = plan(vec![task(1, true), task(2, false)]).to_string();
        assert!(output.contains("# 7. Data Scientist"));
        assert!(output.contains("- Progress: 1/2 days (50.00%)"));
        assert!(output.contains("Week 4: Ship a model"));
        assert!(output.contains("## Next Task"));
        assert!(output.contains("### Day 2: Study topic 2"));
    }

    #[test]
    fn test_plan_display_all_done() {
        let output = plan(vec![task(1, true)]).to_string();
        assert!(output.contains("All tasks completed."));

        let output = plan(vec![]).to_string();
        assert!(output.contains("No tasks in this plan."));
    }

    #[test]
    fn test_task_display_only_shows_progress_when_present() {
        let open = task(3, false).to_string();
        assert!(open.contains("todo"));
        assert!(!open.contains("Hours spent"));
        assert!(!open.contains("Completed"));

        let done = task(3, true).to_string();
        assert!(done.contains("done"));
        assert!(done.contains("- **Hours spent**: 2.5"));
        assert!(done.contains("Went well"));
    }

    #[test]
    fn test_summary_display() {
        let summary = PlanSummary::from(&plan(vec![task(1, true), task(2, false)]));
        let output = summary.to_string();
        assert!(output.contains("## Data Scientist (ID: 7) (1/2)"));
        assert!(output.contains("- **Technologies**: Python, SQL"));
    }

    #[test]
    fn test_progress_update_display() {
        let update = ProgressUpdate {
            task: task(1, true),
            completion_percentage: 50.0,
            completed_tasks: 1,
            total_tasks: 2,
            next_task: None,
        };
        let output = update.to_string();
        assert!(output.contains("1/2 tasks (50.00%)"));
        assert!(output.contains("All tasks in this plan are completed."));
    }
}
