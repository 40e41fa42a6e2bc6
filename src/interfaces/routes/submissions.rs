use actix_web::web;
use crate::handlers::submissions;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/submissions")
            .service(
                web::resource("")
                    .route(web::post().to(submissions::create_submission))
                    .route(web::get().to(submissions::list_submissions))
            )
            .service(
                web::resource("/{submission_id}")
                    .route(web::get().to(submissions::get_submission))
                    .route(web::delete().to(submissions::delete_submission))
            )
    );
}
