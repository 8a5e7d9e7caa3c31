use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use thiserror::Error;

use crate::db::application_repository::ApplicationRepository;
use crate::db::job_repository::JobRepository;
use crate::db::models::{ApplicationRow, JobRow};

/// Failure while communicating with the relational backing store
///
/// This is the only error kind the service models; connection faults,
/// query faults and constraint violations all collapse into it and are
/// surfaced to clients as an opaque 500.
#[derive(Debug, Error)]
#[error("storage error: {0}")]
pub struct StorageError(#[from] pub sqlx::Error);

/// Storage operations the HTTP layer depends on
///
/// Handlers receive this as a trait object so tests can substitute an
/// in-memory implementation for the PostgreSQL one.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Full jobs table, in whatever order storage returns it
    async fn list_jobs(&self) -> Result<Vec<JobRow>, StorageError>;

    /// Insert one application and return the stored row
    async fn create_application(
        &self,
        job_id: i32,
        amount: &str,
        description: &str,
    ) -> Result<ApplicationRow, StorageError>;

    /// Current clock of the backing store (diagnostic route)
    async fn server_time(&self) -> Result<DateTime<Utc>, StorageError>;

    /// Cheap connectivity probe for health checks
    async fn ping(&self) -> Result<(), StorageError>;
}

/// PostgreSQL-backed storage over a shared connection pool
pub struct PgStorage {
    pool: Pool<Postgres>,
}

impl PgStorage {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn list_jobs(&self) -> Result<Vec<JobRow>, StorageError> {
        Ok(JobRepository::list_all(&self.pool).await?)
    }

    async fn create_application(
        &self,
        job_id: i32,
        amount: &str,
        description: &str,
    ) -> Result<ApplicationRow, StorageError> {
        Ok(ApplicationRepository::create(&self.pool, job_id, amount, description).await?)
    }

    async fn server_time(&self) -> Result<DateTime<Utc>, StorageError> {
        let now = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// In-memory stand-in for PostgreSQL used by handler tests
    ///
    /// With `fail` set, every operation reports a storage fault.
    pub struct FakeStorage {
        pub jobs: Vec<JobRow>,
        pub fail: bool,
        pub applications: Mutex<Vec<ApplicationRow>>,
    }

    impl FakeStorage {
        pub fn with_jobs(jobs: Vec<JobRow>) -> Self {
            Self {
                jobs,
                fail: false,
                applications: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                jobs: Vec::new(),
                fail: true,
                applications: Mutex::new(Vec::new()),
            }
        }

        fn fault() -> StorageError {
            StorageError(sqlx::Error::PoolClosed)
        }
    }

    #[async_trait]
    impl Storage for FakeStorage {
        async fn list_jobs(&self) -> Result<Vec<JobRow>, StorageError> {
            if self.fail {
                return Err(Self::fault());
            }
            Ok(self.jobs.clone())
        }

        async fn create_application(
            &self,
            job_id: i32,
            amount: &str,
            description: &str,
        ) -> Result<ApplicationRow, StorageError> {
            if self.fail {
                return Err(Self::fault());
            }
            let mut applications = self.applications.lock().unwrap();
            let row = ApplicationRow {
                id: applications.len() as i32 + 1,
                job_id,
                amount: amount.to_string(),
                description: description.to_string(),
                created_at: Utc::now(),
            };
            applications.push(row.clone());
            Ok(row)
        }

        async fn server_time(&self) -> Result<DateTime<Utc>, StorageError> {
            if self.fail {
                return Err(Self::fault());
            }
            Ok(Utc::now())
        }

        async fn ping(&self) -> Result<(), StorageError> {
            if self.fail {
                return Err(Self::fault());
            }
            Ok(())
        }
    }
}
