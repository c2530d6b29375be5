//! Precipitation Route

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{ApiError, AppState};

/// Precipitation for the most recent year of data, keyed by date.
///
/// Rows sharing a date (several stations reporting the same day) collapse
/// to one entry; the last row returned by the store wins. The map is
/// ordered so repeated requests serialize identically.
pub async fn get_precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    let cutoff = state.analysis.cutoff_date.to_string();
    let rows = state.repository.precipitation_since(&cutoff).await?;

    let mut by_date = BTreeMap::new();
    for row in rows {
        by_date.insert(row.date, row.prcp);
    }

    Ok(Json(by_date))
}
