//! OpenAPI documentation.

use utoipa::OpenApi;

use super::handlers::ping_handler::PingResponse;
use super::handlers::user_handler::{CreateUserResponse, MessageResponse};
use domain::{CreateUserRequest, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::ping_handler::ping,
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            CreateUserRequest,
            PingResponse,
            CreateUserResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Health", description = "Store connectivity"),
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
