use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgUserStore;

/// User record as the store persists it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt output, never exposed in JSON
    pub created_at: OffsetDateTime,
}

/// Failures surfaced by a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Persistence collaborator for user records.
///
/// Implementations enforce the one-record-per-email invariant themselves:
/// `create` returns [`StoreError::DuplicateEmail`] for an email that already
/// exists, even when the caller raced past its own `find_by_email` check.
/// Emails are expected in normalized form (trimmed, lowercased).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new user; the store assigns `id` and `created_at`.
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;
}
