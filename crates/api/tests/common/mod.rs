// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use clinboard_api::auth::jwt::{generate_access_token, JwtConfig};
use clinboard_api::auth::password::hash_password;
use clinboard_api::config::{Environment, ServerConfig};
use clinboard_api::routes;
use clinboard_api::state::AppState;
use clinboard_core::types::DbId;
use clinboard_db::models::user::CreateUser;
use clinboard_db::repositories::{SessionRepo, UserRepo};

/// Password every seeded test user gets.
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: Environment::Development,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        security_headers: false,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Create a user plus an active session and return `(user_id, access_token)`.
///
/// The token is signed with the same test secret `build_test_app` uses,
/// so it authenticates against the test router.
pub async fn seed_user(pool: &PgPool, username: &str, superuser: bool) -> (DbId, String) {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@clinic.test"),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password: TEST_PASSWORD.to_string(),
        is_superuser: superuser,
        is_active: true,
    };
    let hash = hash_password(TEST_PASSWORD).expect("hashing succeeds");
    let user = UserRepo::create(pool, &input, &hash)
        .await
        .expect("user insert succeeds");

    let expires_at = Utc::now() + chrono::Duration::days(7);
    let session = SessionRepo::create(pool, user.id, &format!("hash-{username}"), expires_at)
        .await
        .expect("session insert succeeds");

    let token = generate_access_token(user.id, session.id, superuser, &test_config().jwt)
        .expect("token generation succeeds");

    (user.id, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue an unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a GET with a Bearer token.
pub async fn auth_get(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue an unauthenticated POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST with a Bearer token and JSON body.
pub async fn auth_post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    auth_json(app, Method::POST, uri, token, body).await
}

/// Issue a PUT with a Bearer token and JSON body.
pub async fn auth_put_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    auth_json(app, Method::PUT, uri, token, body).await
}

/// Issue a DELETE with a Bearer token.
pub async fn auth_delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn auth_json(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Multipart helpers (spreadsheet import)
// ---------------------------------------------------------------------------

/// Multipart boundary used by [`multipart_upload`].
pub const BOUNDARY: &str = "clinboard-test-boundary";

/// Build a multipart body carrying a workbook `file` field and a
/// `replace` flag field.
pub fn multipart_upload(file_bytes: &[u8], replace: bool) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"replace\"\r\n\r\n\
             {replace}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"placements.xlsx\"\r\n\
             Content-Type: application/vnd.openxmlformats-officedocument.spreadsheetml.sheet\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Issue the multipart import POST.
pub async fn post_import(app: Router, token: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/placements/import")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Build an in-memory workbook from string rows (first row = header).
pub fn build_workbook(rows: &[Vec<&str>]) -> Vec<u8> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet
                .write_string(r as u32, c as u16, *cell)
                .expect("cell writes");
        }
    }
    workbook.save_to_buffer().expect("workbook serializes")
}
