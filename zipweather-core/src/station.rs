use reqwest::Client;
use tracing::info;

use crate::{
    config::Config,
    coordinates::{CoordinatePair, CoordinateTable},
    error::{Result, WeatherError},
    http,
    model::{Station, StationCollection},
};

pub const DEFAULT_STATIONS_URL: &str = "https://api.weather.gov";

/// Client for the `points/{lat},{lon}/stations` endpoint.
#[derive(Debug, Clone)]
pub struct StationClient {
    base_url: String,
    http: Client,
}

impl StationClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_STATIONS_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self { base_url: http::trim_base_url(base_url), http: http::build_client()? })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(config.stations_url.as_str())
    }

    /// Stations near a point, nearest first.
    pub async fn stations_near(&self, coords: &CoordinatePair) -> Result<StationCollection> {
        let url =
            format!("{}/points/{},{}/stations", self.base_url, coords.latitude, coords.longitude);
        http::get_json(&self.http, &url).await
    }

    /// Resolve a postal code to the nearest observation station.
    pub async fn station_for_zip(&self, table: &CoordinateTable, zip: &str) -> Result<Station> {
        let coords = table.resolve(zip)?;

        let station = self.stations_near(coords).await?.first_station().ok_or_else(|| {
            WeatherError::NoStations {
                latitude: coords.latitude.clone(),
                longitude: coords.longitude.clone(),
            }
        })?;

        info!("Postal code {zip} resolved to station {}", station.identifier);
        Ok(station)
    }
}
