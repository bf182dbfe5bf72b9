//! Static reference data for plan generation.
//!
//! The catalog holds one [`ProfessionTemplate`] per supported career goal and
//! the task-text pools used to fill in each phase. Everything here is
//! `'static` and immutable, so it can be shared freely between threads.

mod professions;
mod task_pools;

pub use professions::PROFESSIONS;
pub use task_pools::TASK_POOLS;

/// One block of weeks inside a profession template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Week range key of the form `weeks_<start>_<end>`
    pub weeks: &'static str,
    /// Focus label shown on every task in the phase
    pub focus: &'static str,
    pub daily_hours: u32,
}

impl Phase {
    /// Parses the phase's week range into `(start_week, end_week)`.
    ///
    /// Keys that do not follow the `weeks_<start>_<end>` shape fall back to a
    /// single two-week block.
    pub fn week_range(&self) -> (u32, u32) {
        parse_week_range(self.weeks).unwrap_or((1, 2))
    }

    /// Number of days the phase expands to.
    pub fn days(&self) -> u32 {
        let (start, end) = self.week_range();
        (end + 1).saturating_sub(start) * 7
    }
}

fn parse_week_range(key: &str) -> Option<(u32, u32)> {
    let mut parts = key.split('_');
    parts.next()?;
    let start = parts.next()?.parse().ok()?;
    let end = parts.next()?.parse().ok()?;
    Some((start, end))
}

/// Blueprint of phases, skills and milestones for one career goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfessionTemplate {
    /// Lowercase lookup key
    pub key: &'static str,
    pub duration_months: u32,
    pub skills_required: &'static [&'static str],
    pub phases: &'static [Phase],
    pub milestones: &'static [(u32, &'static str)],
}

/// Outcome of looking a goal up in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateLookup {
    Found(&'static ProfessionTemplate),
    NotFound,
}

/// Finds the template for `goal`, ignoring case.
pub fn lookup(goal: &str) -> TemplateLookup {
    let key = goal.to_lowercase();
    PROFESSIONS
        .iter()
        .find(|template| template.key == key)
        .map_or(TemplateLookup::NotFound, TemplateLookup::Found)
}

/// Returns the task pool for a phase focus label.
///
/// Exact matches win. Otherwise the first pool (in declaration order) whose
/// key contains the label, or is contained by it, ignoring case.
pub fn task_pool(focus: &str) -> Option<&'static [&'static str]> {
    if let Some((_, pool)) = TASK_POOLS.iter().find(|(key, _)| *key == focus) {
        return Some(*pool);
    }

    let focus = focus.to_lowercase();
    TASK_POOLS
        .iter()
        .find(|(key, _)| {
            let key = key.to_lowercase();
            focus.contains(&key) || key.contains(&focus)
        })
        .map(|(_, pool)| *pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        match lookup("Web Developer") {
            TemplateLookup::Found(template) => assert_eq!(template.key, "web developer"),
            TemplateLookup::NotFound => panic!("web developer should be in the catalog"),
        }
        assert_eq!(lookup("Underwater Basket Weaver"), TemplateLookup::NotFound);
    }

    #[test]
    fn test_every_template_spans_twenty_six_weeks() {
        for template in PROFESSIONS {
            let days: u32 = template.phases.iter().map(Phase::days).sum();
            assert_eq!(days, 26 * 7, "{} has an unexpected phase layout", template.key);
            assert_eq!(template.milestones.len(), 7);
        }
    }

    #[test]
    fn test_malformed_week_range_defaults_to_two_weeks() {
        let phase = Phase {
            weeks: "weeks_one_two",
            focus: "Anything",
            daily_hours: 3,
        };
        assert_eq!(phase.week_range(), (1, 2));
        assert_eq!(phase.days(), 14);

        let truncated = Phase {
            weeks: "weeks_5",
            ..phase
        };
        assert_eq!(truncated.days(), 14);
    }

    #[test]
    fn test_inverted_week_range_yields_no_days() {
        let phase = Phase {
            weeks: "weeks_9_3",
            focus: "Backwards",
            daily_hours: 3,
        };
        assert_eq!(phase.days(), 0);
    }

    #[test]
    fn test_task_pool_exact_and_fuzzy_matching() {
        let exact = task_pool("Backend & Databases").expect("exact pool");
        assert_eq!(exact[0], "Learn SQL basics: SELECT, INSERT, UPDATE, DELETE");

        let fuzzy = task_pool("Advanced python fundamentals review").expect("fuzzy pool");
        assert_eq!(fuzzy[0], "Learn variables, data types, and basic operations");

        assert!(task_pool("Underwater Welding").is_none());
    }
}
