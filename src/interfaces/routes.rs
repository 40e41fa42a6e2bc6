use actix_web::{http::StatusCode, web, HttpResponse};

use crate::handlers::{home::home, json_error::json_error, system::health_check};

mod submissions;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(submissions::config_routes)
    );

    cfg.configure(json_error::config_routes);

    cfg.default_service(web::route().to(not_found));
}

async fn not_found() -> HttpResponse {
    json_error(StatusCode::NOT_FOUND, "Not found", "The requested resource does not exist")
}
