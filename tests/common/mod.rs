use axum_test::TestServer;
use fwfps_server::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Creates an AppState for the tests, with the schema already applied
///
/// # Arguments
/// * `pool` - SQLite connection pool (in-memory under `#[sqlx::test]`)
pub async fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    let state = Arc::new(AppState::new(pool));
    state
        .init_schema()
        .await
        .expect("Failed to initialize schema");
    state
}

/// Creates a TestServer over the full application router
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = fwfps_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
