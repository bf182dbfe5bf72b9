//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings databases created by earlier releases up to date.
    fn apply_migrations(&self) -> Result<()> {
        // Snapshots only gained a plan reference after the first release.
        let has_plan_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('progress') WHERE name = 'plan_id'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect progress table")?;

        if !has_plan_column {
            log::info!("Adding plan_id column to progress table");
            self.connection
                .execute(
                    "ALTER TABLE progress ADD COLUMN plan_id INTEGER REFERENCES plans(id) ON DELETE SET NULL",
                    [],
                )
                .db_context("Failed to add plan_id column to progress table")?;
        }

        Ok(())
    }
}
