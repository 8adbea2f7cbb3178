use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse};
use crate::errors::BoardErr;
use crate::form::SubmissionForm;
use crate::state::AppState;

pub const TEXT_HTML: &str = "text/html; charset=utf-8";

#[get("/")]
async fn home(shared_state: web::Data<AppState>) -> Result<HttpResponse, BoardErr> {
    let messages = shared_state.listing().recent().await?;
    tracing::debug!("listing {} messages", messages.len());
    let body = shared_state.views.home(&messages)?;
    Ok(HttpResponse::Ok().content_type(TEXT_HTML).body(body))
}

#[post("/handle_message")]
async fn handle_message(
    payload: Multipart,
    shared_state: web::Data<AppState>,
) -> Result<HttpResponse, BoardErr> {
    let form = SubmissionForm::from_multipart(payload, shared_state.max_field_bytes).await?;
    let submission = shared_state.submission().submit(form).await?;
    let body = shared_state.views.confirmation(&submission.message)?;
    Ok(HttpResponse::Ok().content_type(TEXT_HTML).body(body))
}
