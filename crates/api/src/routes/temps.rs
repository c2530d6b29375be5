//! Temperature Range Routes

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::{ApiError, AppState};
use storage::DailyAggregate;

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ApiError::InvalidDate(raw.to_string()))
}

/// Daily min/max/avg temperatures from `start` to the end of the dataset
pub async fn get_range_from_start(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<DailyAggregate>>, ApiError> {
    let start = parse_date(&start)?;
    fetch_range(&state, start, state.analysis.dataset_end).await
}

/// Daily min/max/avg temperatures over `[start, end)`
pub async fn get_range(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<DailyAggregate>>, ApiError> {
    let start = parse_date(&start)?;
    let end = parse_date(&end)?;
    fetch_range(&state, start, end).await
}

// The day named by `end` is never included. An empty window is an empty
// list, not an error.
async fn fetch_range(
    state: &AppState,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Json<Vec<DailyAggregate>>, ApiError> {
    if start >= end {
        return Ok(Json(Vec::new()));
    }

    let rows = state
        .repository
        .daily_aggregates(&start.to_string(), &end.to_string())
        .await?;
    Ok(Json(rows))
}
