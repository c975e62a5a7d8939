//! User repository backed by the `users` table.

use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{User, MSG_EMAIL_TAKEN, MSG_ID_NOT_FOUND, MSG_ID_TAKEN};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user
    async fn list(&self) -> AppResult<Vec<User>>;

    /// List users whose name starts with `prefix` (case-sensitive)
    async fn search_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user as given.
    ///
    /// Fails with `AppError::Conflict` when the id or email is already taken.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Delete user by ID. Fails with `AppError::NotFound` when no row matched.
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Conflict message for a unique-constraint violation, keyed on the
/// constraint named in the driver's detail (`users_email_key` or `users_pkey`).
fn conflict_message(detail: &str) -> &'static str {
    if detail.contains("email") {
        MSG_EMAIL_TAKEN
    } else {
        MSG_ID_TAKEN
    }
}

/// Translate a unique-constraint violation into the matching conflict.
fn insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            AppError::conflict(conflict_message(&detail))
        }
        _ => AppError::from(err),
    }
}

/// `LIKE` pattern matching names that start with `prefix` taken literally.
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn search_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<User>> {
        let pattern = LikeExpr::new(like_prefix(prefix)).escape('\\');
        let models = UserEntity::find()
            .filter(user::Column::Name.like(pattern))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        let active_model = ActiveModel::from(user);
        let model = active_model.insert(&self.db).await.map_err(insert_error)?;

        tracing::info!(user_id = %model.id, "Inserted user");
        Ok(User::from(model))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_ID_NOT_FOUND));
        }

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}
