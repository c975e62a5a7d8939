//! Integration tests for API endpoints.
//!
//! These tests drive the full router over the in-memory user store, without
//! requiring a database connection.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

use common::{AppError, AppResult};
use domain::User;
use user_service_lib::api::{create_router, AppState};
use user_service_lib::repository::{InMemoryUserStore, UserRepository};
use user_service_lib::service::UserManager;

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with(repo: Arc<dyn UserRepository>) -> Router {
    create_router(AppState::new(Arc::new(UserManager::new(repo))))
}

fn app() -> Router {
    app_with(Arc::new(InMemoryUserStore::new()))
}

fn seeded_app(users: Vec<User>) -> Router {
    app_with(Arc::new(InMemoryUserStore::with_users(users)))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text_body(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn new_user(id: &str, name: &str, email: &str, password: &str) -> Value {
    json!({ "id": id, "name": name, "email": email, "password": password })
}

fn ana() -> Value {
    new_user("af01", "Ana", "ana@x.com", "Ab1!23456")
}

/// Repository whose every call fails as an unreachable database would.
struct FailingRepository;

#[async_trait]
impl UserRepository for FailingRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        Err(AppError::internal("connection refused"))
    }

    async fn search_by_name_prefix(&self, _prefix: &str) -> AppResult<Vec<User>> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_id(&self, _id: &str) -> AppResult<Option<User>> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
        Err(AppError::internal("connection refused"))
    }

    async fn insert(&self, _user: User) -> AppResult<User> {
        Err(AppError::internal("connection refused"))
    }

    async fn delete(&self, _id: &str) -> AppResult<()> {
        Err(AppError::internal("connection refused"))
    }
}

// =============================================================================
// Ping
// =============================================================================

#[tokio::test]
async fn test_ping_returns_pong_and_all_users() {
    let app = seeded_app(vec![User::new("af01", "Ana", "ana@x.com", "Ab1!23456")]);

    let response = send(&app, get("/ping")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Pong!");
    assert_eq!(body["result"], json!([ana()]));
}

#[tokio::test]
async fn test_ping_store_failure_is_500_with_message() {
    let app = app_with(Arc::new(FailingRepository));

    let response = send(&app, get("/ping")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text_body(response).await, "connection refused");
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_users_returns_created_user_verbatim() {
    let app = app();

    let response = send(&app, post_json("/users", ana())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, get("/users")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([ana()]));
}

#[tokio::test]
async fn test_list_users_filters_by_name_prefix() {
    let app = seeded_app(vec![
        User::new("af01", "Alice", "alice@x.com", "Ab1!23456"),
        User::new("mf02", "Malia", "malia@x.com", "Ab1!23456"),
    ]);

    let response = send(&app, get("/users?q=Al")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alice"]);
}

#[tokio::test]
async fn test_list_users_store_failure() {
    let app = app_with(Arc::new(FailingRepository));

    let response = send(&app, get("/users?q=Al")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_201_with_user() {
    let app = app();

    let response = send(&app, post_json("/users", ana())).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Usuário criado com sucesso");
    assert_eq!(body["user"]["id"], "af01");
    assert_eq!(body["user"], ana());
}

#[tokio::test]
async fn test_create_user_duplicate_id() {
    let app = app();
    send(&app, post_json("/users", ana())).await;

    let duplicate = new_user("af01", "Bia", "bia@x.com", "Ab1!23456");
    let response = send(&app, post_json("/users", duplicate)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text_body(response).await, "id já existente");
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = app();
    send(&app, post_json("/users", ana())).await;

    let duplicate = new_user("bf02", "Bia", "ana@x.com", "Ab1!23456");
    let response = send(&app, post_json("/users", duplicate)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text_body(response).await, "email já existente");
}

#[tokio::test]
async fn test_create_user_password_length_boundaries() {
    let app = app();
    let cases = [
        ("af07", "Ab1!234", StatusCode::BAD_REQUEST),
        ("af08", "Ab1!2345", StatusCode::CREATED),
        ("af12", "Ab1!23456789", StatusCode::CREATED),
        ("af13", "Ab1!234567890", StatusCode::BAD_REQUEST),
    ];

    for (id, password, expected) in cases {
        let body = new_user(id, "Ana", &format!("{}@x.com", id), password);
        let response = send(&app, post_json("/users", body)).await;
        assert_eq!(response.status(), expected, "password {:?}", password);
    }
}

#[tokio::test]
async fn test_create_user_reports_first_failing_rule() {
    let app = app();

    let response = send(&app, post_json("/users", json!({ "id": 42, "name": 7 }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text_body(response).await, "id deve ser string");

    let response = send(&app, post_json("/users", json!({ "id": "af0" }))).await;
    assert_eq!(text_body(response).await, "id deve possuir pelo menos 4 caracteres");

    let response = send(&app, post_json("/users", json!({ "id": "af01", "name": "Ana", "email": 1 }))).await;
    assert_eq!(text_body(response).await, "email deve ser string");
}

#[tokio::test]
async fn test_create_user_missing_password_is_400() {
    let app = app();

    let body = json!({ "id": "af01", "name": "Ana", "email": "ana@x.com" });
    let response = send(&app, post_json("/users", body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(text_body(response).await.starts_with("'password' deve possuir"));
}

#[tokio::test]
async fn test_create_user_array_body_is_400() {
    let app = app();

    let body = json!(["af01", "Ana", "ana@x.com", "Ab1!23456"]);
    let response = send(&app, post_json("/users", body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, get("/users")).await;
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_create_user_without_content_type_reports_id_rule() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .body(Body::from(ana().to_string()))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text_body(response).await, "id deve ser string");
}

#[tokio::test]
async fn test_create_user_store_failure() {
    let app = app_with(Arc::new(FailingRepository));

    let response = send(&app, post_json("/users", ana())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text_body(response).await, "connection refused");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_rejects_id_without_f_even_if_present() {
    let app = seeded_app(vec![User::new("ab12", "Ana", "ana@x.com", "Ab1!23456")]);

    let response = send(&app, delete("/users/ab12")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text_body(response).await, "id deve iniciar com a letra f");
}

#[tokio::test]
async fn test_delete_missing_user() {
    let app = app();

    let response = send(&app, delete("/users/xfoo")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text_body(response).await, "id não encontrado");
}

#[tokio::test]
async fn test_create_then_delete_round_trip() {
    let app = app();
    send(&app, post_json("/users", ana())).await;

    let response = send(&app, delete("/users/af01")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "Usuário deletado com sucesso" })
    );

    let response = send(&app, get("/users")).await;
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_delete_store_failure() {
    let app = app_with(Arc::new(FailingRepository));

    let response = send(&app, delete("/users/xfoo")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text_body(response).await, "connection refused");
}

// =============================================================================
// Documentation
// =============================================================================

#[tokio::test]
async fn test_openapi_document_lists_user_paths() {
    let app = app();

    let response = send(&app, get("/api-docs/openapi.json")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["paths"]["/users"].is_object());
    assert!(body["paths"]["/users/{id}"].is_object());
    assert!(body["paths"]["/ping"].is_object());
}
