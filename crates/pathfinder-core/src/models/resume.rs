//! Resume model as delivered by the resume collaborator.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ExperienceLevel;

/// Skills and experience extracted from an uploaded resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub id: u64,
    pub user_id: u64,
    /// Skill names as extracted, compared case-insensitively
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub uploaded_at: Timestamp,
}
