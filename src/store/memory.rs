use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, User, UserStore};

/// In-memory user store keyed by normalized email, used as the store double in
/// tests. The write lock is held across the contains-then-insert section, so
/// email uniqueness holds under concurrent creates.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            created_at: OffsetDateTime::now_utc(),
        };
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn create_then_find() {
        let store = InMemoryUserStore::new();
        let created = store.create("a@b.com", "hash").await.expect("create");
        let found = store
            .find_by_email("a@b.com")
            .await
            .expect("find")
            .expect("user exists");
        assert_eq!(found.id, created.id);
        assert_eq!(found.password_hash, "hash");
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let store = InMemoryUserStore::new();
        let found = store.find_by_email("nobody@b.com").await.expect("find");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let store = InMemoryUserStore::new();
        store.create("a@b.com", "hash").await.expect("first create");
        let err = store.create("a@b.com", "other").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
    }

    #[tokio::test]
    async fn concurrent_creates_yield_one_winner() {
        let store = Arc::new(InMemoryUserStore::new());
        let (a, b) = tokio::join!(
            {
                let store = store.clone();
                async move { store.create("a@b.com", "h1").await }
            },
            {
                let store = store.clone();
                async move { store.create("a@b.com", "h2").await }
            },
        );
        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        let loser = if a.is_err() { a } else { b };
        assert!(matches!(loser.unwrap_err(), StoreError::DuplicateEmail));
    }
}
