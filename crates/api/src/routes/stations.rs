//! Station Route

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{ApiError, AppState};

/// Identifiers of every station in the dataset
pub async fn get_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let ids = state.repository.station_ids().await?;
    Ok(Json(ids))
}
