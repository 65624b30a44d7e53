//! Repository operations for notes.
//!
//! Each operation is a single atomic statement against the shared pool.
//! No operation catches and hides a failure; everything propagates as a
//! [`StoreError`](crate::StoreError) for the HTTP layer to classify.

use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewNote, NoteRow};
use crate::{Store, parse_id};

impl Store {
    /// Fetch every note. Store order, unbounded.
    pub async fn list_notes(&self) -> StoreResult<Vec<NoteRow>> {
        let rows = sqlx::query_as::<_, NoteRow>("SELECT id, content, important FROM notes")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Fetch one note by its raw string id.
    ///
    /// Fails with `InvalidId` when the id does not parse and `NotFound`
    /// when no row matches.
    pub async fn get_note(&self, id: &str) -> StoreResult<NoteRow> {
        let id = parse_id(id)?;

        sqlx::query_as::<_, NoteRow>("SELECT id, content, important FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Insert a new note, generating its id.
    pub async fn insert_note(&self, new: &NewNote) -> StoreResult<NoteRow> {
        let (content, important) = new.validate()?;
        let id = Uuid::new_v4();

        let row = sqlx::query_as::<_, NoteRow>(
            "INSERT INTO notes (id, content, important) \
             VALUES ($1, $2, $3) \
             RETURNING id, content, important",
        )
        .bind(id)
        .bind(content)
        .bind(important)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(note_id = %row.id, "note inserted");
        Ok(row)
    }

    /// Replace the mutable fields of a note. Runs the same validation as
    /// insert; fails with `NotFound` when no row matches.
    pub async fn update_note(&self, id: &str, new: &NewNote) -> StoreResult<NoteRow> {
        let id = parse_id(id)?;
        let (content, important) = new.validate()?;

        sqlx::query_as::<_, NoteRow>(
            "UPDATE notes SET content = $2, important = $3 \
             WHERE id = $1 \
             RETURNING id, content, important",
        )
        .bind(id)
        .bind(content)
        .bind(important)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Delete a note. Idempotent: deleting an absent id is success.
    pub async fn delete_note(&self, id: &str) -> StoreResult<()> {
        let id = parse_id(id)?;

        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
