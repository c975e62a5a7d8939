//! In-memory user repository (for development and tests).

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{User, MSG_EMAIL_TAKEN, MSG_ID_NOT_FOUND, MSG_ID_TAKEN};

use super::UserRepository;

/// In-memory implementation of UserRepository.
///
/// Keeps insertion order and enforces the same uniqueness rules as the
/// table's primary key and email index.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `users`.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn search_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|u| u.name.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.id == user.id) {
            return Err(AppError::conflict(MSG_ID_TAKEN));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::conflict(MSG_EMAIL_TAKEN));
        }

        users.push(user.clone());

        tracing::info!(user_id = %user.id, "Inserted user");
        Ok(user)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut users = self.users.write().await;

        let position = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::not_found(MSG_ID_NOT_FOUND))?;
        users.remove(position);

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}
