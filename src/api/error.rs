use actix_web::{HttpResponse, error::InternalError, web};
use serde::Serialize;

/// Error body shared by every failing route
///
/// Storage faults are logged server-side with full detail; clients only
/// ever see a fixed message in this shape.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Creates a configured JsonConfig with standardized error handling for the entire project
///
/// Bodies that fail to deserialize never reach a handler; they are
/// answered with a 400 in the same error shape the storage faults use.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid JSON payload".to_string(),
        });
        InternalError::from_response(err, response).into()
    })
}
