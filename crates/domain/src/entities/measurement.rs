//! Daily measurement readings
//!
//! Observation dates are carried as `YYYY-MM-DD` strings, matching the
//! stored representation. That format compares lexicographically in
//! calendar order, which every date filter in the system relies on.

use serde::{Deserialize, Serialize};

/// One daily precipitation reading at a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrecipitation {
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation in inches; missing when the gauge reported nothing
    pub prcp: Option<f64>,
}

/// One daily observed-temperature reading at a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Observed temperature in degrees Fahrenheit
    pub tobs: f64,
}

/// Minimum, average, and maximum observed temperature over a date range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    /// TMIN over the range
    pub minimum: f64,
    /// TAVG over the range
    pub average: f64,
    /// TMAX over the range
    pub maximum: f64,
}

impl TemperatureSummary {
    /// A summary is consistent when minimum ≤ average ≤ maximum
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.minimum <= self.average && self.average <= self.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_compare_in_calendar_order() {
        // The lexicographic invariant the query layer depends on
        assert!("2017-01-02" > "2017-01-01");
        assert!("2017-02-01" > "2017-01-31");
        assert!("2016-12-31" < "2017-01-01");
    }

    #[test]
    fn precipitation_serializes_null_for_missing_reading() {
        let reading = DailyPrecipitation {
            date: "2017-01-01".to_string(),
            prcp: None,
        };
        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("\"prcp\":null"));
    }

    #[test]
    fn observation_roundtrips_through_json() {
        let obs = TemperatureObservation {
            date: "2017-01-01".to_string(),
            tobs: 72.0,
        };
        let json = serde_json::to_string(&obs).unwrap();
        let parsed: TemperatureObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, obs);
    }

    #[test]
    fn summary_consistency() {
        let summary = TemperatureSummary {
            minimum: 60.0,
            average: 65.0,
            maximum: 70.0,
        };
        assert!(summary.is_consistent());

        let broken = TemperatureSummary {
            minimum: 70.0,
            average: 65.0,
            maximum: 60.0,
        };
        assert!(!broken.is_consistent());
    }

    #[test]
    fn summary_allows_single_observation() {
        let summary = TemperatureSummary {
            minimum: 65.0,
            average: 65.0,
            maximum: 65.0,
        };
        assert!(summary.is_consistent());
    }
}
