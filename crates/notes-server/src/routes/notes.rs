//! Note routes.
//!
//! - GET    /api/notes        - List all notes
//! - GET    /api/notes/{id}   - Get a note by id
//! - POST   /api/notes        - Create a note
//! - PUT    /api/notes/{id}   - Update a note
//! - DELETE /api/notes/{id}   - Delete a note (idempotent)

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notes_store::{NewNote, NoteRow};

use crate::error::ApiResult;
use crate::state::AppState;

/// Request body for creating a note.
///
/// `content` is optional here so that the store layer, not the JSON layer,
/// rejects a missing field with the contractual message.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub important: Option<bool>,
}

/// Request body for updating a note. Same shape and validation as create.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub important: Option<bool>,
}

/// A note as rendered to clients.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    /// Identifier, string-rendered.
    pub id: Uuid,
    pub content: String,
    pub important: bool,
}

impl From<NoteRow> for NoteResponse {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            important: row.important,
        }
    }
}

/// GET /api/notes - List every note.
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<NoteResponse>>> {
    let rows = state.store().list_notes().await?;
    Ok(Json(rows.into_iter().map(NoteResponse::from).collect()))
}

/// GET /api/notes/{id} - Get one note.
///
/// # Response
///
/// - 200 OK: the note
/// - 400 Bad Request: `{"error": "malformatted id"}`
/// - 404 Not Found: empty body
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    let row = state.store().get_note(&id).await?;
    Ok(Json(row.into()))
}

/// POST /api/notes - Create a note.
///
/// # Request
///
/// Body: `{ "content": "...", "important": false }` (`important` optional,
/// defaults to false)
///
/// # Response
///
/// - 201 Created: the created note with its generated id
/// - 400 Bad Request: `{"error": "content missing"}`
async fn create_note(
    State(state): State<AppState>,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let new = NewNote::new(request.content, request.important);
    let row = state.store().insert_note(&new).await?;

    tracing::info!(note_id = %row.id, "note created");
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// PUT /api/notes/{id} - Replace a note's content and importance.
///
/// Runs the same validation as create.
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let new = NewNote::new(request.content, request.important);
    let row = state.store().update_note(&id, &new).await?;

    tracing::info!(note_id = %row.id, "note updated");
    Ok(Json(row.into()))
}

/// DELETE /api/notes/{id} - Delete a note.
///
/// Always 204, whether or not the note existed.
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store().delete_note(&id).await?;

    tracing::info!(note_id = %id, "note deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize_full() {
        let json = r#"{"content": "HTML is easy", "important": true}"#;
        let request: CreateNoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.content.as_deref(), Some("HTML is easy"));
        assert_eq!(request.important, Some(true));
    }

    #[test]
    fn test_create_request_deserialize_minimal() {
        let json = r#"{"content": "HTML is easy"}"#;
        let request: CreateNoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.content.as_deref(), Some("HTML is easy"));
        assert!(request.important.is_none());
    }

    #[test]
    fn test_create_request_deserialize_without_content() {
        // Must deserialize; the store layer produces the error message
        let json = r#"{"important": true}"#;
        let request: CreateNoteRequest = serde_json::from_str(json).unwrap();
        assert!(request.content.is_none());
    }

    #[test]
    fn test_note_response_serialize() {
        let response = NoteResponse {
            id: Uuid::nil(),
            content: "Browser can execute only JavaScript".to_string(),
            important: false,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""id":"00000000-0000-0000-0000-000000000000""#));
        assert!(json.contains(r#""important":false"#));
    }

    #[test]
    fn test_note_response_from_row() {
        let row = NoteRow {
            id: Uuid::nil(),
            content: "x".to_string(),
            important: true,
        };
        let response = NoteResponse::from(row);
        assert_eq!(response.content, "x");
        assert!(response.important);
    }
}
