//! Application layer for the climate observation API
//!
//! Holds the ports the infrastructure implements and the `ClimateService`
//! that answers every read the HTTP surface exposes.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::ClimateService;
