use actix_web::{
    HttpResponse, Responder, get,
    web::{Data, ServiceConfig, scope},
};
use tracing::error;

use crate::api::error::ErrorResponse;
use crate::api::jobs::JobService;

#[get("/jobs")]
async fn list_jobs(service: Data<JobService>) -> impl Responder {
    match service.list_jobs().await {
        Ok(jobs) => HttpResponse::Ok().json(jobs),
        Err(err) => {
            error!("Failed to fetch jobs: {:?}", err);

            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "An error occurred while fetching jobs".to_string(),
            })
        }
    }
}

pub fn jobs_config(config: &mut ServiceConfig) {
    config.service(scope("/api").service(list_jobs));
}
