use reqwest::Client;
use tracing::debug;

use crate::{config::Config, error::Result, http, model::WeatherRecord, query::LocationQuery};

pub const DEFAULT_CONDITIONS_URL: &str = "https://api.wunderground.com";

/// Client for the wunderground `conditions` endpoint.
#[derive(Debug, Clone)]
pub struct ConditionsClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl ConditionsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_CONDITIONS_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api_key: api_key.into(),
            base_url: http::trim_base_url(base_url),
            http: http::build_client()?,
        })
    }

    /// Build a client from the resolved configuration (API key and endpoint).
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(config.api_key(), config.conditions_url.as_str())
    }

    /// Validate a "City, State" query and fetch its current conditions.
    pub async fn current_conditions(&self, query: &str) -> Result<WeatherRecord> {
        let location = LocationQuery::parse(query)?;
        self.conditions_for(&location).await
    }

    pub async fn conditions_for(&self, location: &LocationQuery) -> Result<WeatherRecord> {
        let url = format!(
            "{}/api/{}/conditions/q/{}/{}.json",
            self.base_url, self.api_key, location.state, location.city
        );

        let record: WeatherRecord = http::get_json(&self.http, &url).await?;
        debug!(
            "Decoded conditions for {location} from station '{}'",
            record.current_observation.station_id
        );
        Ok(record)
    }
}
