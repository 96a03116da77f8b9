//! HTTP API tests driving the full router.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use axum_extra::headers::{Authorization, HeaderMapExt};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use domain::Password;
use gateway_lib::{create_router, AppState};
use storage::{IndexedUserStore, NewUserRecord, UserStore};

struct TestApp {
    router: Router,
    store: Arc<IndexedUserStore>,
    regular_id: Uuid,
}

const ADMIN: (&str, &str) = ("admin", "admin");
const REGULAR: (&str, &str) = ("testuser", "password");

fn seed(store: &IndexedUserStore, (username, password): (&str, &str), admin: bool) -> Uuid {
    store
        .insert_user(NewUserRecord {
            email: format!("{}@example.com", username),
            username: username.to_string(),
            password: Password::new(password).unwrap().into_string(),
            admin,
        })
        .unwrap()
}

fn app() -> TestApp {
    let store = Arc::new(IndexedUserStore::new());
    seed(&store, ADMIN, true);
    let regular_id = seed(&store, REGULAR, false);

    TestApp {
        router: create_router(AppState::from_store(store.clone())),
        store,
        regular_id,
    }
}

fn request(method: Method, uri: &str, auth: Option<(&str, &str)>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let mut request = builder.body(body).unwrap();
    if let Some((username, password)) = auth {
        request
            .headers_mut()
            .typed_insert(Authorization::basic(username, password));
    }
    request
}

async fn send(app: &TestApp, request: Request<Body>) -> Response {
    app.router.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn user_body(username: &str) -> Value {
    json!({
        "email": format!("{}@example.com", username),
        "username": username,
        "password": "secret",
        "admin": false
    })
}

#[tokio::test]
async fn test_health_needs_no_credentials() {
    let app = app();

    let response = send(&app, request(Method::GET, "/health", None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["users"], 2);
}

#[tokio::test]
async fn test_missing_credentials_get_basic_challenge() {
    let app = app();

    let response = send(&app, request(Method::GET, "/api/v1/users", None, None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"users\""
    );
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let app = app();

    let response = send(
        &app,
        request(Method::GET, "/api/v1/users", Some(("admin", "wrong")), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_regular_user_can_read_without_passwords() {
    let app = app();

    let response = send(&app, request(Method::GET, "/api/v1/users", Some(REGULAR), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let users = body_json(response).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|user| user.get("password").is_none()));

    let uri = format!("/api/v1/users/{}", app.regular_id);
    let response = send(&app, request(Method::GET, &uri, Some(REGULAR), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["username"], "testuser");
    assert_eq!(user["admin"], false);
}

#[tokio::test]
async fn test_get_unknown_and_malformed_ids() {
    let app = app();

    let uri = format!("/api/v1/users/{}", Uuid::new_v4());
    let response = send(&app, request(Method::GET, &uri, Some(REGULAR), None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["message"], "user not found");

    let response = send(
        &app,
        request(Method::GET, "/api/v1/users/not-a-uuid", Some(REGULAR), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["message"], "invalid id");
}

#[tokio::test]
async fn test_regular_user_cannot_write() {
    let app = app();

    let response = send(
        &app,
        request(Method::POST, "/api/v1/users", Some(REGULAR), Some(user_body("newuser"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"admin\""
    );
    assert_eq!(app.store.len(), 2);
}

#[tokio::test]
async fn test_admin_creates_user_who_can_log_in() {
    let app = app();

    let response = send(
        &app,
        request(Method::POST, "/api/v1/users", Some(ADMIN), Some(user_body("newuser"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let id: Uuid = serde_json::from_value(body_json(response).await["id"].clone()).unwrap();

    let uri = format!("/api/v1/users/{}", id);
    let response = send(&app, request(Method::GET, &uri, Some(("newuser", "secret")), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "newuser@example.com");
}

#[tokio::test]
async fn test_create_duplicate_username_is_bad_request() {
    let app = app();

    let response = send(
        &app,
        request(Method::POST, "/api/v1/users", Some(ADMIN), Some(user_body("testuser"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "ALREADY_EXISTS");
    assert_eq!(body["error"]["message"], "user already exists");
}

#[tokio::test]
async fn test_create_requires_every_field() {
    let app = app();

    let response = send(
        &app,
        request(Method::POST, "/api/v1/users", Some(ADMIN), Some(json!({ "admin": true }))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"]["message"],
        "email must have a value!\npassword must have a value!\nusername must have a value!"
    );
    assert_eq!(app.store.len(), 2);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();

    let mut malformed = request(Method::POST, "/api/v1/users", Some(ADMIN), None);
    malformed.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    *malformed.body_mut() = Body::from("{\"email\":");

    let response = send(&app, malformed).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_replaces_user() {
    let app = app();
    let uri = format!("/api/v1/users/{}", app.regular_id);

    let response = send(
        &app,
        request(
            Method::PUT,
            &uri,
            Some(ADMIN),
            Some(json!({
                "email": "updateduser@example.com",
                "username": "updateduser",
                "password": "changed",
                "admin": true
            })),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    // New credentials carry admin rights, old ones are gone.
    let response = send(&app, request(Method::GET, &uri, Some(("updateduser", "changed")), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["admin"], true);

    let response = send(&app, request(Method::GET, &uri, Some(REGULAR), None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_errors() {
    let app = app();

    let uri = format!("/api/v1/users/{}", Uuid::new_v4());
    let response = send(&app, request(Method::PUT, &uri, Some(ADMIN), Some(user_body("ghost")))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let uri = format!("/api/v1/users/{}", app.regular_id);
    let response = send(&app, request(Method::PUT, &uri, Some(ADMIN), Some(user_body("admin")))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["message"], "user already exists");

    let response = send(
        &app,
        request(Method::PUT, "/api/v1/users/123", Some(ADMIN), Some(user_body("ghost"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = app();
    let uri = format!("/api/v1/users/{}", app.regular_id);

    for _ in 0..2 {
        let response = send(&app, request(Method::DELETE, &uri, Some(ADMIN), None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "success": true }));
    }

    assert_eq!(app.store.len(), 1);
    let response = send(&app, request(Method::GET, &uri, Some(ADMIN), None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app();

    let response = send(&app, request(Method::GET, "/api-docs/openapi.json", None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/api/v1/users/{id}"].is_object());
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let app = app();

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/users")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, preflight).await;
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
