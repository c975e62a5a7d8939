//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use common::AppResult;
use domain::{CreateUserRequest, User, MSG_USER_CREATED, MSG_USER_DELETED};

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;

/// Query string of the list endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Name prefix (case-sensitive)
    pub q: Option<String>,
}

/// Body returned after a successful create
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateUserResponse {
    #[schema(example = "Usuário criado com sucesso")]
    pub message: String,
    pub user: User,
}

/// Body carrying only a message
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Usuário deletado com sucesso")]
    pub message: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", delete(delete_user))
}

/// List users, optionally filtered by name prefix
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Matching users", body = Vec<User>),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users(query.q.as_deref()).await?;
    Ok(Json(users))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Invalid field or id/email already taken", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<User>,
) -> AppResult<(StatusCode, Json<CreateUserResponse>)> {
    let user = state.user_service.create_user(user).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: MSG_USER_CREATED.to_string(),
            user,
        }),
    ))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID, second character must be 'f'")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "Id not deletable or not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(&id).await?;

    Ok(Json(MessageResponse {
        message: MSG_USER_DELETED.to_string(),
    }))
}
