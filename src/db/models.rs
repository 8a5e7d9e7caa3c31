use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database representation of a posted job with all fields
///
/// The jobs table is populated by an external process; every column
/// beyond the primary key and title is nullable and must be passed
/// through to clients as-is.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct JobRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub skills: Option<Vec<String>>,
    pub posted_at: Option<DateTime<Utc>>,
}

/// Database representation of a submitted application
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct ApplicationRow {
    pub id: i32,
    pub job_id: i32,
    pub amount: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
