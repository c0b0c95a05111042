//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before cover images were supported lack the column
        let has_image_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('activities') WHERE name = 'image_url'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect activities table")?;

        if !has_image_column {
            self.connection
                .execute("ALTER TABLE activities ADD COLUMN image_url TEXT", [])
                .db_context("Failed to add image_url column to activities table")?;
        }

        Ok(())
    }
}
