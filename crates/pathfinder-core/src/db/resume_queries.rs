//! Resume storage.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{enum_column, id_column, json_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{ExperienceLevel, Resume},
};

const INSERT_RESUME_SQL: &str =
    "INSERT INTO resumes (user_id, skills, experience_level, uploaded_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_RESUME_SQL: &str =
    "SELECT id, user_id, skills, experience_level, uploaded_at FROM resumes WHERE id = ?1";
const SELECT_LATEST_RESUME_SQL: &str = "SELECT id, user_id, skills, experience_level, uploaded_at FROM resumes WHERE user_id = ?1 ORDER BY id DESC LIMIT 1";

impl super::Database {
    fn build_resume_from_row(row: &rusqlite::Row) -> rusqlite::Result<Resume> {
        Ok(Resume {
            id: id_column(row, 0)?,
            user_id: id_column(row, 1)?,
            skills: json_column(row, 2)?,
            experience_level: enum_column(row, 3)?,
            uploaded_at: timestamp_column(row, 4)?,
        })
    }

    /// Stores the skills extracted from a resume upload.
    pub fn insert_resume(
        &self,
        user_id: u64,
        skills: &[String],
        experience_level: ExperienceLevel,
    ) -> Result<Resume> {
        let now = Timestamp::now();
        let skills_json = serde_json::to_string(skills)?;

        self.connection
            .execute(
                INSERT_RESUME_SQL,
                params![
                    user_id as i64,
                    &skills_json,
                    experience_level.as_str(),
                    now.to_string()
                ],
            )
            .db_context("Failed to insert resume")?;

        Ok(Resume {
            id: self.connection.last_insert_rowid() as u64,
            user_id,
            skills: skills.to_vec(),
            experience_level,
            uploaded_at: now,
        })
    }

    /// Retrieves a resume by its ID.
    pub fn get_resume(&self, id: u64) -> Result<Option<Resume>> {
        self.connection
            .query_row(SELECT_RESUME_SQL, params![id as i64], Self::build_resume_from_row)
            .optional()
            .db_context("Failed to query resume")
    }

    /// The user's most recent upload.
    pub fn latest_resume(&self, user_id: u64) -> Result<Option<Resume>> {
        self.connection
            .query_row(
                SELECT_LATEST_RESUME_SQL,
                params![user_id as i64],
                Self::build_resume_from_row,
            )
            .optional()
            .db_context("Failed to query latest resume")
    }
}
