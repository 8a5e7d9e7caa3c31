use serde::{Deserialize, Serialize};

/// Offer submitted against a job
///
/// `amount` stays a string all the way to storage; the service never
/// parses it as a number.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub job_id: i32,
    pub amount: String,
    pub description: String,
}
