use actix_web::{HttpResponse, Responder, get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::api::error::ErrorResponse;
use crate::db::storage::Storage;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Diagnostic response carrying the storage clock
#[derive(Serialize)]
struct ServerTimeResponse {
    now: DateTime<Utc>,
}

/// Health check endpoint
///
/// General health check including database connectivity.
/// Use for load balancers and uptime monitors.
#[get("/health")]
async fn health_check(storage: web::Data<dyn Storage>) -> impl Responder {
    match storage.ping().await {
        Ok(_) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            error: None,
        }),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unhealthy".to_string(),
                database: "disconnected".to_string(),
                error: Some(format!("Database error: {}", e)),
            })
        }
    }
}

/// Readiness check endpoint
///
/// Checks if service is ready to accept traffic (includes database check).
/// Returns 503 if dependencies unavailable, but process will recover when they return.
#[get("/ready")]
async fn readiness_check(storage: web::Data<dyn Storage>) -> impl Responder {
    match storage.ping().await {
        Ok(_) => HttpResponse::Ok().json(HealthResponse {
            status: "ready".to_string(),
            database: "connected".to_string(),
            error: None,
        }),
        Err(e) => {
            error!("Readiness check failed: database unavailable: {:?}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "not_ready".to_string(),
                database: "disconnected".to_string(),
                error: Some(format!("Database unavailable: {}", e)),
            })
        }
    }
}

/// Liveness check endpoint
///
/// Simple check that the process is alive. Does not check dependencies.
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive".to_string(),
        database: "not_checked".to_string(),
        error: None,
    })
}

/// Database diagnostic endpoint
///
/// Round-trips a query so operators can tell connection faults apart
/// from application faults. Returns the storage clock on success.
#[get("/test-db")]
async fn test_db(storage: web::Data<dyn Storage>) -> impl Responder {
    match storage.server_time().await {
        Ok(now) => HttpResponse::Ok().json(ServerTimeResponse { now }),
        Err(e) => {
            error!("Database diagnostic failed: {:?}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Database connection failed".to_string(),
            })
        }
    }
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check)
        .service(test_db);
}
