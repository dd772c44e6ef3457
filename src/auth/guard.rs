use crate::models::domain::session::{Role, SessionState};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const TEACHER_DASHBOARD_PATH: &str = "/teacher/dashboard";
pub const STUDENT_DASHBOARD_PATH: &str = "/student/dashboard";

/// Outcome of an access check. The caller performs the actual
/// navigation; the guard only decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Render,
    Redirect(&'static str),
}

/// Decide whether a session may render a route.
///
/// Unauthenticated sessions always go to the login page. A session whose
/// role does not match the required one is sent to its own dashboard, or
/// home when the role is unrecognized.
pub fn evaluate(session: &SessionState, required_role: Option<Role>) -> AccessDecision {
    if !session.is_authenticated {
        return AccessDecision::Redirect(LOGIN_PATH);
    }

    match required_role {
        Some(required) if session.role != required => match session.role {
            Role::Teacher => AccessDecision::Redirect(TEACHER_DASHBOARD_PATH),
            Role::Student => AccessDecision::Redirect(STUDENT_DASHBOARD_PATH),
            Role::Unknown => AccessDecision::Redirect(HOME_PATH),
        },
        _ => AccessDecision::Render,
    }
}
