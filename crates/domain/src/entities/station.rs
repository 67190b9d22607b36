//! Weather station entity

use serde::{Deserialize, Serialize};

/// A fixed weather-observation site.
///
/// The geocoordinates and elevation are part of the stored record and are
/// carried on the entity, but the HTTP surface only exposes code and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station code (e.g. "USC00519397")
    pub code: String,
    /// Human-readable station name
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Elevation in meters
    pub elevation: Option<f64>,
}

impl Station {
    /// Create a station with only the fields the API surface uses
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            latitude: None,
            longitude: None,
            elevation: None,
        }
    }
}
