use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::db::models::ApplicationRow;

/// Repository for application write operations
///
/// Applications are append-only; nothing in this system reads them back
/// after the insert.
pub struct ApplicationRepository;

impl ApplicationRepository {
    /// Insert one application and return the stored row
    ///
    /// The amount is stored as the text the client supplied; no numeric
    /// conversion happens on this path.
    pub async fn create(
        pool: &Pool<Postgres>,
        job_id: i32,
        amount: &str,
        description: &str,
    ) -> Result<ApplicationRow, sqlx::Error> {
        debug!("Creating application: job_id={}", job_id);

        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications (job_id, amount, description)
            VALUES ($1, $2, $3)
            RETURNING id, job_id, amount, description, created_at
            "#,
        )
        .bind(job_id)
        .bind(amount)
        .bind(description)
        .fetch_one(pool)
        .await?;

        debug!("Application created with id={}", row.id);
        Ok(row)
    }
}
