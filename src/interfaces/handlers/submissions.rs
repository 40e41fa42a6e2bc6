use actix_web::{web, Error, HttpResponse, Responder};

use crate::{entities::submission::NewSubmissionForm, AppState};

pub async fn create_submission(
    state: web::Data<AppState>,
    form: web::Json<NewSubmissionForm>,
) -> Result<impl Responder, Error> {
    let response = state
        .submission_handler
        .create_submission(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

pub async fn get_submission(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<impl Responder, Error> {
    let detail = state
        .submission_handler
        .get_submission(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(detail))
}

pub async fn list_submissions(
    state: web::Data<AppState>,
) -> Result<impl Responder, Error> {
    let response = state.submission_handler.list_submissions().await?;

    Ok(HttpResponse::Ok().json(response))
}

pub async fn delete_submission(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<impl Responder, Error> {
    state
        .submission_handler
        .delete_submission(&path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
