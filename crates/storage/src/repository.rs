//! Repository Implementation

use crate::StorageError;
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;
use tracing::{debug, info};

/// One precipitation reading
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    /// Missing readings are stored as NULL in the dataset
    pub prcp: Option<f64>,
}

/// One temperature observation
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TempRow {
    pub date: String,
    pub tobs: f64,
}

/// Min, max and mean temperature for a single calendar day
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyAggregate {
    pub date: String,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Repository for read access to the `measurement` and `station` tables.
///
/// Holds a connection pool; each query checks a connection out and returns
/// it when the query future completes, on error paths included.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Open a pool against the dataset at `url`
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        info!("Connecting to dataset at {}", url);
        let pool = SqlitePool::connect(url).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by tests)
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Precipitation readings strictly after `cutoff` (`YYYY-MM-DD`)
    pub async fn precipitation_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<PrecipitationRow>, StorageError> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            "SELECT date, prcp FROM measurement WHERE date > ?",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} precipitation rows since {}", rows.len(), cutoff);
        Ok(rows)
    }

    /// Identifiers of every station in the dataset
    pub async fn station_ids(&self) -> Result<Vec<String>, StorageError> {
        let ids = sqlx::query_scalar::<_, String>("SELECT station FROM station")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    /// Temperature observations for one station, strictly after `cutoff`
    pub async fn temps_for_station_since(
        &self,
        station: &str,
        cutoff: &str,
    ) -> Result<Vec<TempRow>, StorageError> {
        let rows = sqlx::query_as::<_, TempRow>(
            "SELECT date, tobs FROM measurement WHERE station = ? AND date > ?",
        )
        .bind(station)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            "Fetched {} temperature rows for {} since {}",
            rows.len(),
            station,
            cutoff
        );
        Ok(rows)
    }

    /// Temperature aggregate for one exact date.
    ///
    /// Returns `None` when the dataset has no observations for that date;
    /// callers must handle absence rather than assume a row.
    pub async fn aggregate_for_date(
        &self,
        date: &str,
    ) -> Result<Option<DailyAggregate>, StorageError> {
        let row = sqlx::query_as::<_, DailyAggregate>(
            "SELECT date, MIN(tobs) AS min, MAX(tobs) AS max, AVG(tobs) AS avg \
             FROM measurement WHERE date = ? GROUP BY date",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Per-day temperature aggregates over `[start, end)`, ordered by date.
    ///
    /// One grouped query for the whole range; `end` itself is never
    /// included, and days with no observations produce no row.
    pub async fn daily_aggregates(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<DailyAggregate>, StorageError> {
        let rows = sqlx::query_as::<_, DailyAggregate>(
            "SELECT date, MIN(tobs) AS min, MAX(tobs) AS max, AVG(tobs) AS avg \
             FROM measurement WHERE date >= ? AND date < ? \
             GROUP BY date ORDER BY date",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            "Aggregated {} days in [{}, {})",
            rows.len(),
            start,
            end
        );
        Ok(rows)
    }
}
