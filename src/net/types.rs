#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record as returned by `GET /api/users/me`.
///
/// Nullable columns default so older server rows deserialize cleanly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub reputation: i64,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub user_rank: Option<String>,
    #[serde(default)]
    pub profile_complete: bool,
    #[serde(default)]
    pub badges: Vec<String>,
}

fn default_role() -> String {
    "freelancer".to_owned()
}

impl User {
    /// Project this record into the partial permissions payload consumed by
    /// [`crate::state::auth::AuthState::set_permissions_for_user`].
    pub fn permissions(&self) -> UserData {
        UserData {
            is_admin: Some(self.is_admin),
            rank: self.user_rank.clone().map(serde_json::Value::String),
            username: Some(self.username.clone()),
        }
    }
}

/// Partial permissions record applied to the auth state.
///
/// Every field is optional; a missing field leaves the corresponding state
/// untouched. `rank` is opaque: the client stores whatever shape the
/// server sends. The server renamed its column to `user_rank`, so both
/// spellings are accepted.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default, alias = "user_rank")]
    pub rank: Option<serde_json::Value>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Response body of `POST /api/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// The `{"message": ...}` envelope several endpoints respond with.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
