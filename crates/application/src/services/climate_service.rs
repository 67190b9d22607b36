//! Climate query service
//!
//! One method per read the HTTP surface exposes. The service owns the
//! date arithmetic: the rolling last-year window and the default end of a
//! temperature range are derived from the injected clock on every call.

use std::sync::Arc;

use chrono::Duration;
use domain::{DailyPrecipitation, Station, TemperatureObservation, TemperatureSummary};
use tracing::instrument;

use crate::{
    error::ApplicationError,
    ports::{Clock, ObservationStore},
};

/// Length of the rolling observation window in days
const LOOKBACK_DAYS: i64 = 365;

/// Date format used throughout the dataset
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only query service over the climate dataset
pub struct ClimateService {
    store: Arc<dyn ObservationStore>,
    clock: Arc<dyn Clock>,
}

impl ClimateService {
    /// Create a new climate service
    #[must_use]
    pub fn new(store: Arc<dyn ObservationStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// All stations in the dataset
    #[instrument(skip(self))]
    pub async fn stations(&self) -> Result<Vec<Station>, ApplicationError> {
        self.store.list_stations().await
    }

    /// Precipitation readings from the last year, strictly after
    /// `today - 365 days`
    #[instrument(skip(self))]
    pub async fn precipitation_last_year(
        &self,
    ) -> Result<Vec<DailyPrecipitation>, ApplicationError> {
        self.store.precipitation_since(&self.year_ago()).await
    }

    /// Temperature observations from the last year, strictly after
    /// `today - 365 days`
    #[instrument(skip(self))]
    pub async fn observations_last_year(
        &self,
    ) -> Result<Vec<TemperatureObservation>, ApplicationError> {
        self.store.observations_since(&self.year_ago()).await
    }

    /// MIN/AVG/MAX observed temperature over `start..=end`, inclusive both
    /// ends. With no `end`, the range runs through today.
    ///
    /// Dates are passed through uninterpreted; an unparseable or inverted
    /// range matches nothing and yields `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<Option<TemperatureSummary>, ApplicationError> {
        let end = end.map_or_else(|| self.today(), str::to_owned);
        self.store.temperature_summary(start, &end).await
    }

    /// Whether the underlying store is reachable
    pub async fn is_healthy(&self) -> bool {
        self.store.ping().await.is_ok()
    }

    fn today(&self) -> String {
        self.clock.today().format(DATE_FORMAT).to_string()
    }

    fn year_ago(&self) -> String {
        (self.clock.today() - Duration::days(LOOKBACK_DAYS))
            .format(DATE_FORMAT)
            .to_string()
    }
}
