use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{evaluate, AccessDecision, Session},
    errors::AppError,
    models::dto::{request::FeedbackRequest, response::FeedbackResponse},
    services::http_helpers::redirect,
};

#[post("/api/feedback")]
async fn generate_feedback(
    state: web::Data<AppState>,
    session: Session,
    request: web::Json<FeedbackRequest>,
) -> Result<HttpResponse, AppError> {
    // Any authenticated role may request feedback
    if let AccessDecision::Redirect(path) = evaluate(&session.0, None) {
        return Ok(redirect(path));
    }

    let request = request.into_inner();
    request.validate()?;

    let feedback = state.feedback_service.resolve(&request.into_query()).await;
    Ok(HttpResponse::Ok().json(FeedbackResponse { feedback }))
}
