//! Observation store port
//!
//! Read-only interface over the climate dataset. Date parameters are
//! `YYYY-MM-DD` strings compared lexicographically, exactly as stored;
//! malformed input is not rejected here, it simply matches nothing.

use async_trait::async_trait;
use domain::{DailyPrecipitation, Station, TemperatureObservation, TemperatureSummary};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for read-only queries against the climate dataset
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObservationStore: Send + Sync {
    /// All stations in the dataset, ordered by code
    async fn list_stations(&self) -> Result<Vec<Station>, ApplicationError>;

    /// Precipitation readings with `date > cutoff`, ordered by date then
    /// station
    async fn precipitation_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<DailyPrecipitation>, ApplicationError>;

    /// Temperature observations with `date > cutoff`, ordered by date then
    /// station
    async fn observations_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<TemperatureObservation>, ApplicationError>;

    /// MIN/AVG/MAX observed temperature over `start..=end`.
    ///
    /// `None` when no rows fall in the range — including when
    /// `start > end`, which matches nothing rather than being an error.
    async fn temperature_summary(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Option<TemperatureSummary>, ApplicationError>;

    /// Cheap reachability probe for readiness checks
    async fn ping(&self) -> Result<(), ApplicationError>;
}
