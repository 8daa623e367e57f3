//! Server library - exposes the main modules so integration tests can
//! build the application router without binding a socket.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export of the main types to simplify imports
pub use crate::core::{AppError, AppState, Config};
pub use crate::services::root;

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Builds the main application router.
///
/// Every resource family lives under `/api/<entity>` and exposes the same
/// five routes; the frontend is served from another origin, so a permissive
/// CORS layer is applied router-wide.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/operation", configure_operation_routes())
        .nest("/api/pac", configure_pac_routes())
        .nest("/api/pps", configure_pps_routes())
        .nest("/api/workplan", configure_workplan_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Routes for the operation resource
fn configure_operation_routes() -> Router<Arc<AppState>> {
    use crate::services::*;
    Router::new()
        .route("/", get(list_operations).post(create_operation))
        .route(
            "/{id}",
            get(get_operation_by_id)
                .put(update_operation)
                .delete(delete_operation),
        )
}

/// Routes for the PAC resource
fn configure_pac_routes() -> Router<Arc<AppState>> {
    use crate::services::*;
    Router::new()
        .route("/", get(list_pacs).post(create_pac))
        .route(
            "/{id}",
            get(get_pac_by_id).put(update_pac).delete(delete_pac),
        )
}

/// Routes for the PPS resource
fn configure_pps_routes() -> Router<Arc<AppState>> {
    use crate::services::*;
    Router::new()
        .route("/", get(list_pps).post(create_pps))
        .route(
            "/{id}",
            get(get_pps_by_id).put(update_pps).delete(delete_pps),
        )
}

/// Routes for the workplan resource
fn configure_workplan_routes() -> Router<Arc<AppState>> {
    use crate::services::*;
    Router::new()
        .route("/", get(list_workplans).post(create_workplan))
        .route(
            "/{id}",
            get(get_workplan_by_id)
                .put(update_workplan)
                .delete(delete_workplan),
        )
}
