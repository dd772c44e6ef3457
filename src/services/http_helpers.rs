use actix_web::{http::header::LOCATION, HttpResponse};

use crate::auth::guard::AccessDecision;

/// Creates a success JSON response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}

/// Creates a 302 redirect to the given path
pub fn redirect(path: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, path))
        .finish()
}

/// Translates an access decision: render the route body or redirect
pub fn respond(decision: AccessDecision, render: impl FnOnce() -> HttpResponse) -> HttpResponse {
    match decision {
        AccessDecision::Render => render(),
        AccessDecision::Redirect(path) => redirect(path),
    }
}
