//! PAC services - HTTP handlers for the PAC resource

use crate::core::{AppError, AppState};
use crate::dtos::PacDTO;
use crate::entities::Pac;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[instrument(skip(state))]
pub async fn list_pacs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Pac>>, AppError> {
    let records = state.pac.list().await?;
    debug!("Found {} PAC records", records.len());
    Ok(Json(records))
}

#[instrument(skip(state, body))]
pub async fn create_pac(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PacDTO>,
) -> Result<Json<Pac>, AppError> {
    let created = state.pac.create(&body).await?;
    info!("Created PAC {}", created.id);
    Ok(Json(created))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_pac_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Pac>>, AppError> {
    let record = state.pac.read(&id).await?;
    Ok(Json(record))
}

#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_pac(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<PacDTO>,
) -> Result<Json<Pac>, AppError> {
    let updated = state.pac.update(&id, &body).await?;
    info!("Updated PAC {}", updated.id);
    Ok(Json(updated))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_pac(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.pac.delete(&id).await?;
    info!("Deleted PAC {}", id);
    Ok(StatusCode::OK)
}
