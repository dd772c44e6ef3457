use actix_web::{get, HttpResponse};

use crate::{
    auth::{evaluate, Session},
    models::domain::session::Role,
    services::http_helpers::{respond, success_json},
};

#[get("/")]
async fn home(session: Session) -> HttpResponse {
    respond(evaluate(&session.0, None), || {
        success_json(serde_json::json!({ "page": "home" }))
    })
}

#[get("/login")]
async fn login_page() -> HttpResponse {
    success_json(serde_json::json!({ "page": "login" }))
}

#[get("/teacher/dashboard")]
async fn teacher_dashboard(session: Session) -> HttpResponse {
    respond(evaluate(&session.0, Some(Role::Teacher)), || {
        success_json(serde_json::json!({ "page": "teacher-dashboard" }))
    })
}

#[get("/student/dashboard")]
async fn student_dashboard(session: Session) -> HttpResponse {
    respond(evaluate(&session.0, Some(Role::Student)), || {
        success_json(serde_json::json!({ "page": "student-dashboard" }))
    })
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
