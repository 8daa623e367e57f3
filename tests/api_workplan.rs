//! Integration tests for the workplan endpoints

mod common;

use fwfps_server::entities::Workplan;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn update_is_a_full_replacement(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool).await);

    let created: Workplan = server
        .post("/api/workplan")
        .json(&json!({"title": "Q1 sampling", "details": "draft"}))
        .await
        .json();

    // Omitted fields are replaced with null, not kept
    let updated: Workplan = server
        .put(&format!("/api/workplan/{}", created.id))
        .json(&json!({"title": "Q1 sampling"}))
        .await
        .json();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.details, None);

    let found: Option<Workplan> = server
        .get(&format!("/api/workplan/{}", created.id))
        .await
        .json();
    assert_eq!(found, Some(updated));
}

#[sqlx::test]
async fn put_on_a_never_created_id_creates_the_row(pool: SqlitePool) {
    let server = common::create_test_server(common::create_test_state(pool).await);

    let response = server
        .put("/api/workplan/7")
        .json(&json!({"title": "recovered plan", "details": "restored from paper"}))
        .await;
    response.assert_status_ok();
    let upserted: Workplan = response.json();
    assert_eq!(upserted.id, 7);

    let found: Option<Workplan> = server.get("/api/workplan/7").await.json();
    assert_eq!(found, Some(upserted));

    let listed: Vec<Workplan> = server.get("/api/workplan").await.json();
    assert_eq!(listed.len(), 1);
}
