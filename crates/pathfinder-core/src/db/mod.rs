//! SQLite storage for resumes, plans, daily tasks and progress snapshots.
//!
//! Each query file adds an `impl super::Database` block for one table group.
//! A [`Database`] owns a single connection and is meant to live for one
//! operation; the planner opens a fresh one per call.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod plan_queries;
pub mod progress_queries;
pub mod resume_queries;
pub mod task_queries;
pub mod utils;

/// How long a writer waits for a competing write transaction to finish.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
