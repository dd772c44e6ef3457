use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{evaluate, AccessDecision, Session},
    errors::AppError,
    models::dto::response::InsightsResponse,
    services::http_helpers::redirect,
};

#[get("/api/users/{user_id}/insights")]
async fn get_learning_insights(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if let AccessDecision::Redirect(path) = evaluate(&session.0, None) {
        return Ok(redirect(path));
    }

    let insights = state.insights_service.generate(&user_id).await;
    Ok(HttpResponse::Ok().json(InsightsResponse::from(insights)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::header, http::StatusCode, test, App};

    use crate::{
        auth::{JwtService, SessionMiddleware},
        config::Config,
        models::domain::session::Role,
        models::dto::response::RemoteFeedbackEnvelope,
        services::remote_client::MockFeedbackClient,
    };

    fn test_state() -> AppState {
        let mut client = MockFeedbackClient::new();
        client
            .expect_request_feedback()
            .returning(|_| Ok(RemoteFeedbackEnvelope::default()));
        AppState::with_client(Config::test_config(), Arc::new(client))
    }

    #[actix_web::test]
    async fn test_insights_require_authentication() {
        let config = Config::test_config();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .app_data(web::Data::new(JwtService::new(&config.jwt_secret, 1)))
                .wrap(SessionMiddleware)
                .service(get_learning_insights),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/user-1/insights")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
    }

    #[actix_web::test]
    async fn test_insights_payload_shape() {
        let config = Config::test_config();
        let jwt = JwtService::new(&config.jwt_secret, 1);
        let token = jwt.create_token("user-1", Role::Student).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .app_data(web::Data::new(jwt))
                .wrap(SessionMiddleware)
                .service(get_learning_insights),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/user-1/insights")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["strengths"].is_array());
        assert!(body["areasToImprove"].is_array());
        assert!(body["recommendations"].is_array());
    }
}
