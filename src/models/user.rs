//! User identity and auth request/response shapes.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// External identity as returned by the API.
///
/// The API identifies users by `_id`, though some payloads carry `id`
/// instead; both are kept and [`User::user_id`] picks whichever is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// The user's identifier, or `""` when the payload carried none.
    pub fn user_id(&self) -> &str {
        self.object_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or(self.id.as_deref())
            .unwrap_or("")
    }

    /// Whether either identifier equals `user_id`. An empty id never matches.
    pub fn is(&self, user_id: &str) -> bool {
        !user_id.is_empty()
            && (self.object_id.as_deref() == Some(user_id) || self.id.as_deref() == Some(user_id))
    }
}

/// `POST /auth/register` body.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// `POST /auth/login` body.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response from both auth endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}
