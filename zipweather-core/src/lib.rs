//! Core library for the `zipweather` CLI.
//!
//! This crate defines:
//! - The postal code → coordinate table loaded from CSV
//! - Station lookup against api.weather.gov
//! - "City, State" validation and the wunderground conditions client
//! - The decoded weather record and its text summary
//! - Configuration & error types
//!
//! It is used by `zipweather-cli`, but can also be reused by other binaries or services.

pub mod conditions;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod flexible;
mod http;
pub mod model;
pub mod query;
pub mod station;
pub mod summary;

pub use conditions::ConditionsClient;
pub use config::Config;
pub use coordinates::{CoordinatePair, CoordinateTable};
pub use error::{Result, WeatherError};
pub use flexible::FlexibleNumber;
pub use model::{CurrentObservation, ResponseMetadata, Station, StationCollection, WeatherRecord};
pub use query::LocationQuery;
pub use station::StationClient;
pub use summary::render_summary;
