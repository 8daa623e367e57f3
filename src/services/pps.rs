//! PPS services - HTTP handlers for the PPS resource

use crate::core::{AppError, AppState};
use crate::dtos::PpsDTO;
use crate::entities::Pps;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state))]
pub async fn list_pps(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Pps>>, AppError> {
    debug!("Listing all PPS records");
    let records = state.pps.list().await?;
    info!("Found {} PPS records", records.len());
    Ok(Json(records))
}

#[instrument(skip(state, body))]
pub async fn create_pps(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PpsDTO>,
) -> Result<Json<Pps>, AppError> {
    // The body carries no id; the store assigns one
    let created = state.pps.create(&body).await?;
    info!("Created PPS {}", created.id);
    Ok(Json(created))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_pps_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Pps>>, AppError> {
    debug!("Fetching PPS by id");
    let record = state.pps.read(&id).await?;
    if record.is_none() {
        warn!("PPS not found");
    }
    Ok(Json(record))
}

#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_pps(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<PpsDTO>,
) -> Result<Json<Pps>, AppError> {
    // The path id wins over anything the client sent in the body
    let updated = state.pps.update(&id, &body).await?;
    info!("Updated PPS {}", updated.id);
    Ok(Json(updated))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_pps(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.pps.delete(&id).await?;
    info!("Deleted PPS {}", id);
    Ok(StatusCode::OK)
}
