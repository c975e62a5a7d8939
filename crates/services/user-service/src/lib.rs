//! User Service Library
//!
//! HTTP service exposing create, read and delete operations over the
//! `users` table. Field rules run at the request boundary, uniqueness
//! checks run in [`service::UserManager`] against a [`repository::UserRepository`].

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{InMemoryUserStore, UserRepository, UserStore};
use crate::service::UserManager;

/// Where user records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// PostgreSQL `users` table
    Database,
    /// Process memory, lost on exit
    InMemory,
}

/// Run the HTTP server with configuration loaded from the environment.
pub async fn run(host: &str, port: u16, store: StoreKind) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    run_server_with_config(host, port, store, config).await
}

/// Build the repository selected by `store`.
async fn build_repository(
    store: StoreKind,
    config: &UserServiceConfig,
) -> Result<Arc<dyn UserRepository>, Box<dyn std::error::Error>> {
    let repo: Arc<dyn UserRepository> = match store {
        StoreKind::Database => {
            let db = Database::connect(&config.database).await?;
            Arc::new(UserStore::new(db.get_connection()))
        }
        StoreKind::InMemory => {
            tracing::warn!("Using in-memory user store, records are lost on exit");
            Arc::new(InMemoryUserStore::new())
        }
    };

    Ok(repo)
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    store: StoreKind,
    config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let user_repo = build_repository(store, &config).await?;
    let user_service = Arc::new(UserManager::new(user_repo));

    let app = create_router(AppState::new(user_service));

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("User service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
