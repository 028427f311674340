use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::flexible::FlexibleNumber;

/// Decode an explicit `null` as the type's default, the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of the stations-near-point endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationCollection {
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<StationFeature>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationFeature {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: StationProperties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationProperties {
    #[serde(rename = "stationIdentifier", deserialize_with = "null_as_default")]
    pub station_identifier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// A resolved observation station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub identifier: String,
    pub name: String,
}

impl StationCollection {
    /// The first listed station, which the API orders by proximity.
    pub fn first_station(&self) -> Option<Station> {
        self.features.first().map(|f| Station {
            identifier: f.properties.station_identifier.clone(),
            name: f.properties.name.clone(),
        })
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// Decoded body of the conditions endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub response: ResponseMetadata,
    #[serde(deserialize_with = "null_as_default")]
    pub current_observation: CurrentObservation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(rename = "termsofService", deserialize_with = "null_as_default")]
    pub terms_of_service: String,
    pub features: Option<ResponseFeatures>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseFeatures {
    #[serde(deserialize_with = "null_as_default")]
    pub conditions: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentObservation {
    pub image: Option<Image>,
    pub display_location: Option<DisplayLocation>,
    pub observation_location: Option<ObservationLocation>,
    #[serde(deserialize_with = "null_as_default")]
    pub station_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub observation_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub observation_time_rfc822: String,
    #[serde(deserialize_with = "null_as_default")]
    pub observation_epoch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_time_rfc822: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_epoch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_tz_short: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_tz_long: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_tz_offset: String,
    #[serde(deserialize_with = "null_as_default")]
    pub weather: String,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_string: String,
    #[serde(deserialize_with = "null_as_default")]
    pub temp_f: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temp_c: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub relative_humidity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_string: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_dir: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_degrees: f64,
    pub wind_mph: FlexibleNumber,
    pub wind_gust_mph: FlexibleNumber,
    pub wind_kph: FlexibleNumber,
    pub wind_gust_kph: FlexibleNumber,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure_mb: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure_in: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure_trend: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dewpoint_string: String,
    pub dewpoint_f: FlexibleNumber,
    pub dewpoint_c: FlexibleNumber,
    pub heat_index_string: FlexibleNumber,
    pub heat_index_f: FlexibleNumber,
    pub heat_index_c: FlexibleNumber,
    #[serde(deserialize_with = "null_as_default")]
    pub windchill_string: String,
    pub windchill_f: FlexibleNumber,
    pub windchill_c: FlexibleNumber,
    #[serde(deserialize_with = "null_as_default")]
    pub feelslike_string: String,
    pub feelslike_f: FlexibleNumber,
    pub feelslike_c: FlexibleNumber,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility_mi: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility_km: String,
    #[serde(deserialize_with = "null_as_default")]
    pub solarradiation: String,
    #[serde(rename = "UV", deserialize_with = "null_as_default")]
    pub uv: String,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_1hr_in: String,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_1hr_metric: String,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_1hr_string: String,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_today_string: String,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_today_in: String,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_today_metric: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub forecast_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub history_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ob_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nowcast: String,
}

impl CurrentObservation {
    /// Observation time from `observation_epoch` (unix seconds).
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        let ts: i64 = self.observation_epoch.trim().parse().ok()?;
        DateTime::<Utc>::from_timestamp(ts, 0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayLocation {
    #[serde(deserialize_with = "null_as_default")]
    pub full: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_iso3166: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub magic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wmo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: String,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: String,
    #[serde(deserialize_with = "null_as_default")]
    pub elevation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationLocation {
    #[serde(deserialize_with = "null_as_default")]
    pub full: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_iso3166: String,
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: String,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: String,
    #[serde(deserialize_with = "null_as_default")]
    pub elevation: String,
}
