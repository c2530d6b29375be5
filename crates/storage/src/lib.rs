//! Storage Layer
//!
//! Read-only SQLite access to the climate observations dataset with
//! repository pattern. The dataset is externally populated; nothing in
//! this crate writes to it.

mod repository;

pub use repository::{DailyAggregate, PrecipitationRow, Repository, TempRow};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
