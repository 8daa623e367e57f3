//! Services module - HTTP handlers
//!
//! One module per resource family; every module exposes the same five
//! handlers (list, create, get by id, update, delete) over its own entity.

pub mod operation;
pub mod pac;
pub mod pps;
pub mod workplan;

// Re-exports to simplify imports
pub use operation::{
    create_operation, delete_operation, get_operation_by_id, list_operations, update_operation,
};
pub use pac::{create_pac, delete_pac, get_pac_by_id, list_pacs, update_pac};
pub use pps::{create_pps, delete_pps, get_pps_by_id, list_pps, update_pps};
pub use workplan::{
    create_workplan, delete_workplan, get_workplan_by_id, list_workplans, update_workplan,
};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
