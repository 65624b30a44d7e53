//! User registration endpoint.
//!
//! - POST /api/users - Register a new user
//!
//! The plaintext password is hashed before it goes anywhere near the
//! store, and neither the plaintext nor the hash appears in the response.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notes_store::{NewUser, UserRow};

use crate::error::{ApiError, ApiResult};
use crate::password;
use crate::state::AppState;

/// Request body for registering a user.
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// A registered user as rendered to clients. No credential material.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            name: row.name,
        }
    }
}

/// POST /api/users - Register a new user.
///
/// # Request
///
/// Body: `{ "username": "...", "name": "...", "password": "..." }`
/// (`name` optional)
///
/// # Response
///
/// - 201 Created: `{ "id": "...", "username": "...", "name": "..." }`
/// - 400 Bad Request: missing fields, or a message containing
///   ``expected `username` to be unique``
async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let plaintext = match request.password {
        Some(password) if !password.is_empty() => password,
        _ => return Err(ApiError::Validation("password missing".to_string())),
    };

    // Hashing is CPU-bound; keep it off the event loop.
    let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&plaintext))
        .await
        .map_err(|e| ApiError::Internal(format!("hashing task failed: {e}")))?
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;

    let new = NewUser::new(request.username, request.name, password_hash);
    let row = state.store().insert_user(&new).await?;

    tracing::info!(user_id = %row.id, username = %row.username, "user registered");
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users", post(register_user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_deserialize() {
        let json = r#"{"username": "mluukari", "name": "Matt", "password": "salainain"}"#;
        let request: RegisterUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username.as_deref(), Some("mluukari"));
        assert_eq!(request.name.as_deref(), Some("Matt"));
        assert_eq!(request.password.as_deref(), Some("salainain"));
    }

    #[test]
    fn test_register_request_deserialize_without_password() {
        let json = r#"{"username": "root"}"#;
        let request: RegisterUserRequest = serde_json::from_str(json).unwrap();
        assert!(request.password.is_none());
        assert!(request.name.is_none());
    }

    #[test]
    fn test_user_response_has_no_credential_fields() {
        let response = UserResponse::from(UserRow {
            id: Uuid::nil(),
            username: "root".to_string(),
            name: Some("Superuser".to_string()),
            password_hash: "$argon2id$secret".to_string(),
        });
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("root"));
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }
}
