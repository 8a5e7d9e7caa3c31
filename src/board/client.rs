use serde_json::json;

use crate::board::error::BoardError;
use crate::board::model::Job;

/// Blocking HTTP client for the two backend calls
///
/// The board runs a synchronous event loop; each call happens at most
/// once per session, from its own thread.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// One-shot fetch of the full job list
    pub fn fetch_jobs(&self) -> Result<Vec<Job>, BoardError> {
        let response = self
            .http
            .get(format!("{}/api/jobs", self.base_url))
            .send()?;

        if !response.status().is_success() {
            return Err(BoardError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json()?)
    }

    /// Submit one offer against a job
    ///
    /// The amount goes over the wire as the text the user typed.
    pub fn submit_offer(
        &self,
        job_id: i32,
        amount: &str,
        description: &str,
    ) -> Result<(), BoardError> {
        let response = self
            .http
            .post(format!("{}/api/apply", self.base_url))
            .json(&json!({
                "jobId": job_id,
                "amount": amount,
                "description": description,
            }))
            .send()?;

        if !response.status().is_success() {
            return Err(BoardError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
