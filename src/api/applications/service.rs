use std::sync::Arc;

use tracing::info;

use crate::api::applications::dto::ApplyRequest;
use crate::db::models::ApplicationRow;
use crate::db::storage::{Storage, StorageError};

/// Application submission service
///
/// Write-only: nothing in this system reads applications back, so the
/// only result the caller gets is the row echoed by the insert.
pub struct ApplicationService {
    storage: Arc<dyn Storage>,
}

impl ApplicationService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Store one offer as provided by the client
    ///
    /// No existence check on the job id and no numeric validation of the
    /// amount; a database constraint violation surfaces as a storage
    /// fault like any other.
    pub async fn submit(&self, request: &ApplyRequest) -> Result<ApplicationRow, StorageError> {
        info!("Service: submitting application for job_id={}", request.job_id);

        let row = self
            .storage
            .create_application(request.job_id, &request.amount, &request.description)
            .await?;

        info!("Service: application stored with id={}", row.id);
        Ok(row)
    }
}
