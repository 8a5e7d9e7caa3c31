use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::db::models::JobRow;

/// Repository for job read operations
///
/// Jobs are read-only from this application's perspective; rows are
/// inserted by an external process.
pub struct JobRepository;

impl JobRepository {
    /// Fetch every job row, in whatever order storage returns them
    pub async fn list_all(pool: &Pool<Postgres>) -> Result<Vec<JobRow>, sqlx::Error> {
        let rows = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs")
            .fetch_all(pool)
            .await?;

        debug!("Fetched {} job rows", rows.len());
        Ok(rows)
    }
}
