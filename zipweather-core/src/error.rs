use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while resolving locations and fetching observations.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// The coordinate file could not be opened.
    #[error("Coordinate data unavailable at {}: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row of the coordinate file could not be parsed.
    #[error("Malformed coordinate data at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// The postal code is absent from the coordinate table.
    #[error("Postal code '{0}' not found")]
    NotFound(String),

    /// A free-text location query was rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    #[error("HTTP request error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The stations endpoint answered with an empty feature list.
    #[error("No stations found near {latitude},{longitude}")]
    NoStations { latitude: String, longitude: String },
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;

impl From<csv::Error> for WeatherError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or_default();
        WeatherError::Parse { line, message: err.to_string() }
    }
}
