//! Integration tests for placement CRUD, listing, and the page-size
//! session persistence rules.

mod common;

use axum::http::StatusCode;
use common::{auth_delete, auth_get, auth_post_json, auth_put_json, body_json, seed_user};
use serde_json::json;
use sqlx::PgPool;

async fn create_placement(
    app: axum::Router,
    token: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let response = auth_post_json(app, "/api/v1/placements", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../migrations")]
async fn crud_round_trip(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);

    let created = create_placement(
        app.clone(),
        &token,
        json!({
            "date": "2025-01-15",
            "shift": "AM",
            "physician_name": "John Doe",
            "physician_id": 12345,
            "department": "Internal Medicine",
            "specialty": "Cardiology",
            "status": "Full Time",
            "area": "East Wing",
            "room_number": "204"
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["shift"], "AM");

    // Read it back.
    let fetched = auth_get(app.clone(), &format!("/api/v1/placements/{id}"), &token).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched = body_json(fetched).await;
    assert_eq!(fetched["physician_name"], "John Doe");

    // PUT is a full replace: omitted fields become null.
    let updated = auth_put_json(
        app.clone(),
        &format!("/api/v1/placements/{id}"),
        &token,
        json!({
            "date": "2025-01-16",
            "shift": "PM",
            "physician_name": "John Doe"
        }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = body_json(updated).await;
    assert_eq!(updated["shift"], "PM");
    assert!(updated["department"].is_null());
    assert!(updated["room_number"].is_null());

    // Delete, then 404.
    let deleted = auth_delete(app.clone(), &format!("/api/v1/placements/{id}"), &token).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = auth_get(app, &format!("/api/v1/placements/{id}"), &token).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_shift_code_is_rejected_on_the_form_path(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);

    let response = auth_post_json(
        app,
        "/api/v1/placements",
        &token,
        json!({ "shift": "NIGHT", "physician_name": "John Doe" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn search_matches_across_text_columns(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);

    for (name, dept) in [
        ("John Doe", "Internal Medicine"),
        ("Jane Smith", "Pediatrics"),
        ("Mary Doerr", "Surgery"),
    ] {
        create_placement(
            app.clone(),
            &token,
            json!({ "physician_name": name, "department": dept }),
        )
        .await;
    }

    // Case-insensitive substring over physician_name.
    let response = auth_get(app.clone(), "/api/v1/placements?search=doe", &token).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // Also matches department.
    let response = auth_get(app, "/api/v1/placements?search=pediat", &token).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn malformed_filter_date_is_400(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);

    let response = auth_get(
        app,
        "/api/v1/placements?start_date=15%2F01%2F2025",
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn empty_filter_params_impose_no_constraint(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);

    create_placement(app.clone(), &token, json!({ "physician_name": "John Doe" })).await;

    let response = auth_get(
        app,
        "/api/v1/placements?start_date=&end_date=&department=",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 1);
}

// ---------------------------------------------------------------------------
// Page-size allow-list and session persistence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn unsupported_page_size_falls_back_to_ten_and_persists(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);

    // rows=37 is not in {10, 25, 50, 100}: effective size is 10.
    let response = auth_get(app.clone(), "/api/v1/placements?rows=37", &token).await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["rows"], 10);

    // The fallback persisted on the session: the next request without an
    // explicit rows still gets 10.
    let response = auth_get(app.clone(), "/api/v1/placements", &token).await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["rows"], 10);

    // A supported value sticks the same way.
    let response = auth_get(app.clone(), "/api/v1/placements?rows=25", &token).await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["rows"], 25);

    let response = auth_get(app, "/api/v1/placements", &token).await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["rows"], 25);
}

#[sqlx::test(migrations = "../../migrations")]
async fn pagination_slices_by_page(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);

    for i in 0..12 {
        create_placement(
            app.clone(),
            &token,
            json!({ "physician_name": format!("Physician {i}") }),
        )
        .await;
    }

    let response = auth_get(app.clone(), "/api/v1/placements?rows=10&page=2", &token).await;
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 12);
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn listing_orders_by_date_desc_then_shift(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice", false).await;
    let app = common::build_test_app(pool);

    for (date, shift) in [
        ("2025-01-10", "PM"),
        ("2025-01-12", "AM"),
        ("2025-01-12", "MD"),
        ("2025-01-11", "AM"),
    ] {
        create_placement(
            app.clone(),
            &token,
            json!({ "date": date, "shift": shift, "physician_name": "X" }),
        )
        .await;
    }

    let response = auth_get(app, "/api/v1/placements", &token).await;
    let body = body_json(response).await;
    let rows: Vec<(String, String)> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["date"].as_str().unwrap().to_string(),
                p["shift"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("2025-01-12".into(), "AM".into()),
            ("2025-01-12".into(), "MD".into()),
            ("2025-01-11".into(), "AM".into()),
            ("2025-01-10".into(), "PM".into()),
        ]
    );
}
