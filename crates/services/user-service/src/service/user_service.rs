//! User service - Handles user-related business logic.
//!
//! Field rules are enforced when the request schema is turned into a
//! [`User`]; this layer owns the rules that need the store.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{ensure_deletable_id, User, MSG_EMAIL_TAKEN, MSG_ID_NOT_FOUND, MSG_ID_TAKEN};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetch every user to prove the store is reachable
    async fn ping(&self) -> AppResult<Vec<User>>;

    /// List users, optionally only those whose name starts with `search`
    async fn list_users(&self, search: Option<&str>) -> AppResult<Vec<User>>;

    /// Create a user whose fields already passed validation
    async fn create_user(&self, user: User) -> AppResult<User>;

    /// Delete a user by ID
    async fn delete_user(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn ping(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn list_users(&self, search: Option<&str>) -> AppResult<Vec<User>> {
        match search {
            Some(prefix) => self.repo.search_by_name_prefix(prefix).await,
            None => self.repo.list().await,
        }
    }

    async fn create_user(&self, user: User) -> AppResult<User> {
        if self.repo.find_by_id(&user.id).await?.is_some() {
            return Err(AppError::conflict(MSG_ID_TAKEN));
        }

        if self.repo.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::conflict(MSG_EMAIL_TAKEN));
        }

        self.repo.insert(user).await
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        ensure_deletable_id(id)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_ID_NOT_FOUND)?;

        self.repo.delete(id).await
    }
}
