//! Repository operations for users.

use uuid::Uuid;

use crate::Store;
use crate::error::{StoreError, StoreResult};
use crate::models::{NewUser, UserRow};

impl Store {
    /// Insert a new user, generating its id.
    ///
    /// Username uniqueness is enforced by the store's unique index; a
    /// duplicate insert surfaces as a `Validation` error so the message
    /// reaches the client.
    pub async fn insert_user(&self, new: &NewUser) -> StoreResult<UserRow> {
        let username = new.validate()?;
        let id = Uuid::new_v4();

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (id, username, name, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, username, name, password_hash",
        )
        .bind(id)
        .bind(username)
        .bind(&new.name)
        .bind(&new.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
                StoreError::username_taken()
            } else {
                StoreError::Database(e)
            }
        })?;

        tracing::debug!(user_id = %row.id, username = %row.username, "user inserted");
        Ok(row)
    }
}
