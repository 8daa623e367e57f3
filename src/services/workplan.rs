//! Workplan services - HTTP handlers for the workplan resource

use crate::core::{AppError, AppState};
use crate::dtos::WorkplanDTO;
use crate::entities::Workplan;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[instrument(skip(state))]
pub async fn list_workplans(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Workplan>>, AppError> {
    let records = state.workplan.list().await?;
    debug!("Found {} workplans", records.len());
    Ok(Json(records))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn create_workplan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<WorkplanDTO>,
) -> Result<Json<Workplan>, AppError> {
    let created = state.workplan.create(&body).await?;
    info!("Created workplan {}", created.id);
    Ok(Json(created))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_workplan_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Workplan>>, AppError> {
    let record = state.workplan.read(&id).await?;
    Ok(Json(record))
}

#[debug_handler]
#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_workplan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<WorkplanDTO>,
) -> Result<Json<Workplan>, AppError> {
    let updated = state.workplan.update(&id, &body).await?;
    info!("Updated workplan {}", updated.id);
    Ok(Json(updated))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_workplan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.workplan.delete(&id).await?;
    info!("Deleted workplan {}", id);
    Ok(StatusCode::OK)
}
