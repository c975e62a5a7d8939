//! Connectivity check handler.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppResult;
use domain::{User, MSG_PONG};

use crate::api::state::AppState;

/// Ping response carrying every stored user.
#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    #[schema(example = "Pong!")]
    pub message: String,
    pub result: Vec<User>,
}

/// Create ping routes
pub fn ping_routes() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}

/// Confirm the user store is reachable
#[utoipa::path(
    get,
    path = "/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable", body = PingResponse),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
pub async fn ping(State(state): State<AppState>) -> AppResult<Json<PingResponse>> {
    let result = state.user_service.ping().await?;

    Ok(Json(PingResponse {
        message: MSG_PONG.to_string(),
        result,
    }))
}
