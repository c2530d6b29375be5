//! Temperature Observations Route

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{ApiError, AppState};

/// Temperature observations for the most active station over the most
/// recent year of data. Values only, no dates attached.
pub async fn get_tobs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<f64>>, ApiError> {
    let cutoff = state.analysis.cutoff_date.to_string();
    let rows = state
        .repository
        .temps_for_station_since(&state.analysis.most_active_station, &cutoff)
        .await?;

    let temps = rows.into_iter().map(|r| r.tobs).collect();
    Ok(Json(temps))
}
