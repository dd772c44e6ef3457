use serde::{Deserialize, Serialize};

/// Closed set of roles the application knows how to route. Any other
/// value coming off the wire collapses into `Unknown` so the guard's
/// fallback branch is an explicit match arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Teacher,
    Student,
    Unknown,
}

impl Role {
    pub fn parse(value: &str) -> Self {
        match value {
            "teacher" => Role::Teacher,
            "student" => Role::Student,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Authentication state consumed by the access guard. Produced per
/// request by session extraction; the guard only reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub role: Role,
}

impl SessionState {
    pub fn signed_in(role: Role) -> Self {
        Self {
            is_authenticated: true,
            role,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            role: Role::Unknown,
        }
    }
}
