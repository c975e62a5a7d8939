//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::UserService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
