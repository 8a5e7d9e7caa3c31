use actix_web::{HttpResponse, Responder, get, web};

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().body(
        "Welcome to the Job Application API. Use /api/jobs to get jobs and /api/apply to submit applications.",
    )
}

pub fn root_config(config: &mut web::ServiceConfig) {
    config.service(index);
}
