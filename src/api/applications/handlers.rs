use actix_web::{
    HttpResponse, Responder, post,
    web::{Data, Json, ServiceConfig, scope},
};
use tracing::error;

use crate::api::applications::ApplicationService;
use crate::api::applications::dto::ApplyRequest;
use crate::api::error::ErrorResponse;

#[post("/apply")]
async fn apply(
    service: Data<ApplicationService>,
    request: Json<ApplyRequest>,
) -> impl Responder {
    match service.submit(&request).await {
        Ok(row) => HttpResponse::Created().json(row),
        Err(err) => {
            error!("Failed to submit application: {:?}", err);

            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "An error occurred while submitting the application".to_string(),
            })
        }
    }
}

pub fn applications_config(config: &mut ServiceConfig) {
    config.service(scope("/api").service(apply));
}
