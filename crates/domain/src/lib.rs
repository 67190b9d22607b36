//! Domain layer for the climate observation API
//!
//! Plain data types describing the climate dataset. No I/O, no framework
//! dependencies; everything here is shared by the application and
//! infrastructure layers.

pub mod entities;

pub use entities::{DailyPrecipitation, Station, TemperatureObservation, TemperatureSummary};
