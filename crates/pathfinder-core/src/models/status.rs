//! Status enumerations for plans, tasks and learners.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a learning plan.
///
/// Plans start `Active`. The reconciler sweep moves them to
/// `UpdateAvailable`, an explicit technology replacement moves them to
/// `Updated`, and applying an agent suggestion parks them in
/// `UpdatePending`. Nothing moves a plan back to `Active` automatically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    #[default]
    Active,
    Paused,
    Completed,
    Updated,
    UpdatePending,
    UpdateAvailable,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "paused" => Ok(PlanStatus::Paused),
            "completed" => Ok(PlanStatus::Completed),
            "updated" => Ok(PlanStatus::Updated),
            "update_pending" => Ok(PlanStatus::UpdatePending),
            "update_available" => Ok(PlanStatus::UpdateAvailable),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Paused => "paused",
            PlanStatus::Completed => "completed",
            PlanStatus::Updated => "updated",
            PlanStatus::UpdatePending => "update_pending",
            PlanStatus::UpdateAvailable => "update_available",
        }
    }
}

/// Difficulty tier of a daily task, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    #[serde(rename = "easy")]
    Easy,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "hard")]
    Hard,
    #[serde(rename = "very hard")]
    VeryHard,
}

impl Difficulty {
    /// Tier for a 1-based `day` out of `total_days`.
    ///
    /// Purely positional: `day / total_days` below 0.2 is easy, below 0.5
    /// medium, below 0.8 hard, anything else very hard.
    pub fn for_day(day: u32, total_days: u32) -> Self {
        if total_days == 0 {
            return Difficulty::VeryHard;
        }
        let pct = f64::from(day) / f64::from(total_days);
        if pct < 0.2 {
            Difficulty::Easy
        } else if pct < 0.5 {
            Difficulty::Medium
        } else if pct < 0.8 {
            Difficulty::Hard
        } else {
            Difficulty::VeryHard
        }
    }

    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "very hard" | "very_hard" => Ok(Difficulty::VeryHard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

/// Experience level reported by the resume collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(format!("Invalid experience level: {s}")),
        }
    }
}

impl ExperienceLevel {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_status_round_trips_through_strings() {
        for status in [
            PlanStatus::Active,
            PlanStatus::Paused,
            PlanStatus::Completed,
            PlanStatus::Updated,
            PlanStatus::UpdatePending,
            PlanStatus::UpdateAvailable,
        ] {
            assert_eq!(status.as_str().parse::<PlanStatus>(), Ok(status));
        }
        assert!("archived".parse::<PlanStatus>().is_err());
    }

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(Difficulty::for_day(1, 100), Difficulty::Easy);
        assert_eq!(Difficulty::for_day(19, 100), Difficulty::Easy);
        assert_eq!(Difficulty::for_day(20, 100), Difficulty::Medium);
        assert_eq!(Difficulty::for_day(49, 100), Difficulty::Medium);
        assert_eq!(Difficulty::for_day(50, 100), Difficulty::Hard);
        assert_eq!(Difficulty::for_day(79, 100), Difficulty::Hard);
        assert_eq!(Difficulty::for_day(80, 100), Difficulty::VeryHard);
        assert_eq!(Difficulty::for_day(100, 100), Difficulty::VeryHard);
    }

    #[test]
    fn test_difficulty_serializes_with_space() {
        let json = serde_json::to_string(&Difficulty::VeryHard).unwrap();
        assert_eq!(json, "\"very hard\"");
        assert_eq!("very hard".parse::<Difficulty>(), Ok(Difficulty::VeryHard));
    }

    #[test]
    fn test_experience_level_parsing_is_case_insensitive() {
        assert_eq!(
            "Intermediate".parse::<ExperienceLevel>(),
            Ok(ExperienceLevel::Intermediate)
        );
        assert!("guru".parse::<ExperienceLevel>().is_err());
    }
}
