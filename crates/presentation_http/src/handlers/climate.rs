//! Climate data handlers
//!
//! The precipitation and tobs endpoints serve a date-keyed JSON object.
//! Multiple stations report on the same date, so collapsing the rows into
//! one map loses all but one value per date; rows arrive ordered by
//! (date, station) and the last write wins, keeping the documented
//! original contract deterministic instead of quietly changing it to a
//! list of records.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
};
use domain::TemperatureSummary;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

/// MIN/AVG/MAX response body, keyed the way the original API spelled it
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureRangeResponse {
    #[serde(rename = "minimum temperature")]
    pub minimum: f64,
    #[serde(rename = "average temperature")]
    pub average: f64,
    #[serde(rename = "maximum temperature")]
    pub maximum: f64,
}

impl From<TemperatureSummary> for TemperatureRangeResponse {
    fn from(summary: TemperatureSummary) -> Self {
        Self {
            minimum: summary.minimum,
            average: summary.average,
            maximum: summary.maximum,
        }
    }
}

/// Collapse (date, value) rows into a date-keyed map, last write wins
fn collapse_latest<T>(rows: impl IntoIterator<Item = (String, T)>) -> BTreeMap<String, T> {
    let mut map = BTreeMap::new();
    for (date, value) in rows {
        map.insert(date, value);
    }
    map
}

/// `GET /api/v1.0/precipitation` — last year's precipitation by date
pub async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    let readings = state.climate_service.precipitation_last_year().await?;
    Ok(Json(collapse_latest(
        readings.into_iter().map(|r| (r.date, r.prcp)),
    )))
}

/// `GET /api/v1.0/stations` — every station as a `[code, name]` pair
pub async fn stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<(String, String)>>, ApiError> {
    let stations = state.climate_service.stations().await?;
    Ok(Json(
        stations.into_iter().map(|s| (s.code, s.name)).collect(),
    ))
}

/// `GET /api/v1.0/tobs` — last year's observed temperatures by date
pub async fn tobs(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, f64>>, ApiError> {
    let observations = state.climate_service.observations_last_year().await?;
    Ok(Json(collapse_latest(
        observations.into_iter().map(|o| (o.date, o.tobs)),
    )))
}

/// `GET /api/v1.0/{start}` — temperature summary from a start date
/// through today
pub async fn temperature_range_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureRangeResponse>, ApiError> {
    let summary = state
        .climate_service
        .temperature_summary(&start, None)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("no temperature observations on or after {start}"))
        })?;
    Ok(Json(summary.into()))
}

/// `GET /api/v1.0/{start}/{end}` — temperature summary over an inclusive
/// date range
pub async fn temperature_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureRangeResponse>, ApiError> {
    let summary = state
        .climate_service
        .temperature_summary(&start, Some(&end))
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "no temperature observations between {start} and {end}"
            ))
        })?;
    Ok(Json(summary.into()))
}
