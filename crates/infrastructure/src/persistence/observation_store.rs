//! SQLite-backed observation queries

use std::sync::Arc;

use application::{error::ApplicationError, ports::ObservationStore};
use async_trait::async_trait;
use domain::{DailyPrecipitation, Station, TemperatureObservation, TemperatureSummary};
use rusqlite::Row;
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// Read-only SQLite implementation of the observation store
#[derive(Debug, Clone)]
pub struct SqliteObservationStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteObservationStore {
    /// Create a new store over an already-validated pool
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ObservationStore for SqliteObservationStore {
    #[instrument(skip(self))]
    async fn list_stations(&self) -> Result<Vec<Station>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let mut stmt = conn
                .prepare(
                    "SELECT station, name, latitude, longitude, elevation
                     FROM station
                     ORDER BY station",
                )
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let stations: Vec<Station> = stmt
                .query_map([], row_to_station)
                .map_err(|e| ApplicationError::Storage(e.to_string()))?
                .filter_map(Result::ok)
                .collect();

            debug!(count = stations.len(), "Fetched stations");
            Ok(stations)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn precipitation_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<DailyPrecipitation>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let cutoff = cutoff.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let mut stmt = conn
                .prepare(
                    "SELECT date, prcp FROM measurement
                     WHERE date > ?1
                     ORDER BY date, station",
                )
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let readings: Vec<DailyPrecipitation> = stmt
                .query_map([&cutoff], |row| {
                    Ok(DailyPrecipitation {
                        date: row.get(0)?,
                        prcp: row.get(1)?,
                    })
                })
                .map_err(|e| ApplicationError::Storage(e.to_string()))?
                .filter_map(Result::ok)
                .collect();

            debug!(count = readings.len(), "Fetched precipitation readings");
            Ok(readings)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn observations_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<TemperatureObservation>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let cutoff = cutoff.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let mut stmt = conn
                .prepare(
                    "SELECT date, tobs FROM measurement
                     WHERE date > ?1
                     ORDER BY date, station",
                )
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let observations: Vec<TemperatureObservation> = stmt
                .query_map([&cutoff], |row| {
                    Ok(TemperatureObservation {
                        date: row.get(0)?,
                        tobs: row.get(1)?,
                    })
                })
                .map_err(|e| ApplicationError::Storage(e.to_string()))?
                .filter_map(Result::ok)
                .collect();

            debug!(count = observations.len(), "Fetched temperature observations");
            Ok(observations)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn temperature_summary(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Option<TemperatureSummary>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let start = start.to_string();
        let end = end.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            // Aggregates over an empty range come back as a single row of
            // NULLs, which maps onto the no-data variant here.
            let (minimum, average, maximum) = conn
                .query_row(
                    "SELECT MIN(tobs), AVG(tobs), MAX(tobs)
                     FROM measurement
                     WHERE date >= ?1 AND date <= ?2",
                    [&start, &end],
                    |row| {
                        Ok((
                            row.get::<_, Option<f64>>(0)?,
                            row.get::<_, Option<f64>>(1)?,
                            row.get::<_, Option<f64>>(2)?,
                        ))
                    },
                )
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            match (minimum, average, maximum) {
                (Some(minimum), Some(average), Some(maximum)) => Ok(Some(TemperatureSummary {
                    minimum,
                    average,
                    maximum,
                })),
                _ => Ok(None),
            }
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

/// Convert a database row to a Station entity
fn row_to_station(row: &Row<'_>) -> rusqlite::Result<Station> {
    Ok(Station {
        code: row.get(0)?,
        name: row.get(1)?,
        latitude: row.get(2)?,
        longitude: row.get(3)?,
        elevation: row.get(4)?,
    })
}
