//! Operation services - HTTP handlers for the operation resource

use crate::core::{AppError, AppState};
use crate::dtos::OperationDTO;
use crate::entities::Operation;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[instrument(skip(state))]
pub async fn list_operations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Operation>>, AppError> {
    let records = state.operation.list().await?;
    debug!("Found {} operations", records.len());
    Ok(Json(records))
}

#[instrument(skip(state, body))]
pub async fn create_operation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OperationDTO>,
) -> Result<Json<Operation>, AppError> {
    let created = state.operation.create(&body).await?;
    info!("Created operation {}", created.id);
    Ok(Json(created))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_operation_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Operation>>, AppError> {
    let record = state.operation.read(&id).await?;
    Ok(Json(record))
}

#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_operation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<OperationDTO>,
) -> Result<Json<Operation>, AppError> {
    let updated = state.operation.update(&id, &body).await?;
    info!("Updated operation {}", updated.id);
    Ok(Json(updated))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_operation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.operation.delete(&id).await?;
    info!("Deleted operation {}", id);
    Ok(StatusCode::OK)
}
