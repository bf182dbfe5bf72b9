use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{
    held_by, TrendEntry, TrendTable, DEFAULT_MIN_RELEVANCE, MIN_PLAN_AGE_DAYS,
    MUST_LEARN_RELEVANCE, NEW_TECHNOLOGY_LIMIT, UPDATE_THRESHOLD,
};

/// Trending technologies that a skill list does not yet cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTechnologies {
    /// The highest-relevance uncovered entries, at most five
    pub new_technologies: Vec<TrendEntry>,
    /// Everything trending for the profession at the threshold
    pub all_trending: Vec<TrendEntry>,
    /// Number of uncovered entries before truncation
    pub total_new: usize,
    pub detected_at: Timestamp,
}

/// How soon a plan should pick up new technologies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[serde(rename = "none")]
    NotNeeded,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::NotNeeded => "none",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

/// Result of checking a plan's technology list against current trends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftReport {
    pub should_update: bool,
    pub reason: String,
    /// `None` when the plan was too new to be checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_technologies: Option<Vec<TrendEntry>>,
    pub urgency: Urgency,
}

/// Trending technologies bucketed by relevance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechRecommendations {
    pub must_learn: Vec<TrendEntry>,
    pub good_to_learn: Vec<TrendEntry>,
    /// Below the listing floor, so never populated by [`TrendTable::recommendations`]
    pub emerging: Vec<TrendEntry>,
}

/// Case-insensitive difference between two technology lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub added_count: usize,
    pub removed_count: usize,
    pub timestamp: Timestamp,
}

impl TrendTable {
    /// Entries at or above `min_relevance`, optionally restricted to one
    /// profession, ordered by descending relevance. Ties keep table order.
    pub fn trending(&self, profession: Option<&str>, min_relevance: u8) -> Vec<TrendEntry> {
        let mut trending: Vec<TrendEntry> = self
            .entries()
            .iter()
            .filter(|entry| entry.relevance >= min_relevance)
            .filter(|entry| profession.map_or(true, |p| entry.applies_to(p)))
            .cloned()
            .collect();
        trending.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        trending
    }

    /// Trending entries for `profession` at `threshold` that none of
    /// `current_skills` covers.
    pub fn detect_new<S: AsRef<str>>(
        &self,
        current_skills: &[S],
        profession: &str,
        threshold: u8,
    ) -> NewTechnologies {
        let all_trending = self.trending(Some(profession), threshold);
        let uncovered: Vec<TrendEntry> = all_trending
            .iter()
            .filter(|entry| !held_by(current_skills, &entry.name))
            .cloned()
            .collect();
        let total_new = uncovered.len();

        NewTechnologies {
            new_technologies: uncovered.into_iter().take(NEW_TECHNOLOGY_LIMIT).collect(),
            all_trending,
            total_new,
            detected_at: Timestamp::now(),
        }
    }

    /// Decides whether a plan of the given age has drifted from the trends
    /// for its profession.
    pub fn should_update<S: AsRef<str>>(
        &self,
        plan_technologies: &[S],
        profession: &str,
        days_since_creation: i64,
    ) -> DriftReport {
        if days_since_creation < MIN_PLAN_AGE_DAYS {
            return DriftReport {
                should_update: false,
                reason: "Plan too new to check for updates".to_string(),
                new_technologies: None,
                urgency: Urgency::NotNeeded,
            };
        }

        let detected = self.detect_new(plan_technologies, profession, UPDATE_THRESHOLD);
        if detected.total_new >= 2 {
            DriftReport {
                should_update: true,
                reason: format!(
                    "{} new high-relevance technologies detected",
                    detected.total_new
                ),
                new_technologies: Some(detected.new_technologies),
                urgency: if detected.total_new >= 3 {
                    Urgency::High
                } else {
                    Urgency::Medium
                },
            }
        } else {
            DriftReport {
                should_update: false,
                reason: "No significant new technologies detected".to_string(),
                new_technologies: Some(detected.new_technologies),
                urgency: Urgency::NotNeeded,
            }
        }
    }

    /// Buckets trending technologies the plan does not already cover.
    pub fn recommendations<S: AsRef<str>>(
        &self,
        profession: &str,
        current_technologies: &[S],
    ) -> TechRecommendations {
        let mut recommendations = TechRecommendations::default();
        for entry in self.trending(Some(profession), DEFAULT_MIN_RELEVANCE) {
            if held_by(current_technologies, &entry.name) {
                continue;
            }
            if entry.relevance >= MUST_LEARN_RELEVANCE {
                recommendations.must_learn.push(entry);
            } else if entry.relevance >= DEFAULT_MIN_RELEVANCE {
                recommendations.good_to_learn.push(entry);
            } else {
                recommendations.emerging.push(entry);
            }
        }
        recommendations
    }
}

/// Lowercased set difference between `old` and `new`, each side sorted.
pub fn diff_summary<A: AsRef<str>, B: AsRef<str>>(old: &[A], new: &[B]) -> TechDiff {
    let old: BTreeSet<String> = old.iter().map(|t| t.as_ref().to_lowercase()).collect();
    let new: BTreeSet<String> = new.iter().map(|t| t.as_ref().to_lowercase()).collect();

    let added: Vec<String> = new.difference(&old).cloned().collect();
    let removed: Vec<String> = old.difference(&new).cloned().collect();

    TechDiff {
        added_count: added.len(),
        removed_count: removed.len(),
        added,
        removed,
        timestamp: Timestamp::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static TrendTable {
        TrendTable::builtin()
    }

    #[test]
    fn test_trending_is_sorted_and_stable() {
        let trending = table().trending(Some("AI Engineer"), 85);
        assert!(trending
            .windows(2)
            .all(|pair| pair[0].relevance >= pair[1].relevance));
        // GPT-4 and Prompt Engineering tie at 95; table order wins.
        assert_eq!(trending[0].name, "GPT-4");
        assert_eq!(trending[1].name, "Prompt Engineering");
    }

    #[test]
    fn test_trending_without_profession() {
        let all = table().trending(None, 0);
        assert_eq!(all.len(), table().len());
        assert_eq!(all.last().map(|e| e.name.as_str()), Some("Web3"));
    }

    #[test]
    fn test_detect_new_with_no_skills() {
        let empty: [&str; 0] = [];
        let detected = table().detect_new(&empty, "AI Engineer", 80);

        assert!(detected.new_technologies.len() <= NEW_TECHNOLOGY_LIMIT);
        assert_eq!(detected.total_new, detected.all_trending.len());
        assert!(detected
            .new_technologies
            .iter()
            .all(|entry| entry.relevance >= 80 && entry.applies_to("AI Engineer")));
        assert!(detected
            .new_technologies
            .windows(2)
            .all(|pair| pair[0].relevance >= pair[1].relevance));
    }

    #[test]
    fn test_detect_new_excludes_held_skills() {
        let detected = table().detect_new(&["gpt-4", "Claude"], "AI Engineer", 80);
        assert!(detected
            .new_technologies
            .iter()
            .all(|entry| entry.name != "GPT-4" && entry.name != "Claude 3"));
        assert_eq!(detected.total_new, detected.all_trending.len() - 2);
    }

    #[test]
    fn test_should_update_too_new() {
        let report = table().should_update(&["Python"], "AI Engineer", 3);
        assert!(!report.should_update);
        assert!(report.reason.contains("too new"));
        assert!(report.new_technologies.is_none());
        assert_eq!(report.urgency, Urgency::NotNeeded);
    }

    #[test]
    fn test_should_update_flags_drift() {
        let report = table().should_update(&["Python"], "AI Engineer", 30);
        assert!(report.should_update);
        assert_eq!(report.urgency, Urgency::High);
        assert!(report.reason.ends_with("new high-relevance technologies detected"));
    }

    #[test]
    fn test_should_update_medium_with_two_missing() {
        // DevOps Engineer at 85+: Kubernetes, Docker, AWS, Azure, Google Cloud, Terraform.
        let held = ["Kubernetes", "Docker", "AWS", "Azure"];
        let report = table().should_update(&held, "DevOps Engineer", 10);
        assert!(report.should_update);
        assert_eq!(report.urgency, Urgency::Medium);
        assert_eq!(report.new_technologies.map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_should_update_nothing_significant() {
        let held = ["Kubernetes", "Docker", "AWS", "Azure", "Google Cloud"];
        let report = table().should_update(&held, "DevOps Engineer", 10);
        assert!(!report.should_update);
        assert_eq!(report.reason, "No significant new technologies detected");
        assert_eq!(report.new_technologies.map(|v| v.len()), Some(1));
    }

    #[test]
    fn test_recommendations_partition() {
        let recs = table().recommendations("Frontend Developer", &["React"]);
        assert!(recs.must_learn.iter().all(|e| e.relevance >= 85));
        assert!(recs
            .good_to_learn
            .iter()
            .all(|e| (75..85).contains(&e.relevance)));
        assert!(recs.emerging.is_empty());
        assert!(recs.must_learn.iter().all(|e| e.name != "React 18"));
        assert!(recs.good_to_learn.iter().any(|e| e.name == "Astro"));
    }

    #[test]
    fn test_diff_summary_adds_docker() {
        let diff = diff_summary(&["Python", "SQL"], &["Python", "SQL", "Docker"]);
        assert_eq!(diff.added, vec!["docker".to_string()]);
        assert!(diff.removed.is_empty());
        assert_eq!(diff.added_count, 1);
        assert_eq!(diff.removed_count, 0);
    }

    #[test]
    fn test_diff_summary_is_case_insensitive() {
        let diff = diff_summary(&["Rust", "Go"], &["RUST", "Zig"]);
        assert_eq!(diff.added, vec!["zig".to_string()]);
        assert_eq!(diff.removed, vec!["go".to_string()]);
    }

    #[test]
    fn test_urgency_serializes_as_none() {
        let json = serde_json::to_string(&Urgency::NotNeeded).unwrap();
        assert_eq!(json, "\"none\"");
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"high\"");
    }
}
