use std::sync::Arc;

use tracing::info;

use crate::db::models::JobRow;
use crate::db::storage::{Storage, StorageError};

/// Job listing service
///
/// Thin layer over storage: the route exposes the jobs table verbatim,
/// with no filtering, pagination or sorting contract.
pub struct JobService {
    storage: Arc<dyn Storage>,
}

impl JobService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Fetch every posted job
    pub async fn list_jobs(&self) -> Result<Vec<JobRow>, StorageError> {
        let rows = self.storage.list_jobs().await?;
        info!("Service: fetched {} jobs", rows.len());
        Ok(rows)
    }
}
