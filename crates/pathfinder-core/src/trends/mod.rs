//! Technology trend table and the queries that run against it.
//!
//! The table is reference data: it is built once on first use and never
//! written afterwards, so every query here is a pure function of its inputs
//! (apart from stamping the current time on results).
//!
//! # Examples
//!
//! ```rust
//! use pathfinder_core::trends::{diff_summary, TrendTable};
//!
//! let table = TrendTable::builtin();
//! let trending = table.trending(Some("ai engineer"), 90);
//! assert!(trending.iter().all(|entry| entry.relevance >= 90));
//!
//! let diff = diff_summary(&["Python", "SQL"], &["python", "SQL", "Docker"]);
//! assert_eq!(diff.added, vec!["docker".to_string()]);
//! ```

mod query;
mod table;

pub use query::{
    diff_summary, DriftReport, NewTechnologies, TechDiff, TechRecommendations, Urgency,
};
pub use table::{TrendEntry, TrendTable};

/// Default relevance floor for "what's trending" listings.
pub const DEFAULT_MIN_RELEVANCE: u8 = 75;

/// Default relevance floor when looking for technologies missing from a plan.
pub const DEFAULT_NEW_THRESHOLD: u8 = 80;

/// Relevance floor used when deciding whether a plan is stale.
pub const UPDATE_THRESHOLD: u8 = 85;

/// Plans younger than this many days are never flagged.
pub const MIN_PLAN_AGE_DAYS: i64 = 7;

/// Relevance at which a recommendation becomes "must learn".
pub const MUST_LEARN_RELEVANCE: u8 = 85;

/// Maximum number of technologies reported as new.
pub const NEW_TECHNOLOGY_LIMIT: usize = 5;

/// Loose skill equivalence: either side, case-folded, contains the other.
///
/// "React" matches "React 18" and "react 18" matches "React".
pub fn skill_matches(skill: &str, technology: &str) -> bool {
    let skill = skill.to_lowercase();
    let technology = technology.to_lowercase();
    technology.contains(&skill) || skill.contains(&technology)
}

/// True when any of `skills` is loosely equivalent to `technology`.
pub fn held_by<S: AsRef<str>>(skills: &[S], technology: &str) -> bool {
    skills
        .iter()
        .any(|skill| skill_matches(skill.as_ref(), technology))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_matches_both_directions() {
        assert!(skill_matches("React", "React 18"));
        assert!(skill_matches("react 18", "React"));
        assert!(skill_matches("DOCKER", "docker"));
        assert!(!skill_matches("Vue", "React 18"));
    }

    #[test]
    fn test_held_by_with_no_skills() {
        let skills: [&str; 0] = [];
        assert!(!held_by(&skills, "Docker"));
    }
}
