use std::fmt;

use crate::model::WeatherRecord;

/// Fixed multi-line, human-readable summary of a record.
pub fn render_summary(record: &WeatherRecord) -> String {
    record.to_string()
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obs = &self.current_observation;
        let location = obs.display_location.as_ref().map(|l| l.full.as_str()).unwrap_or_default();
        let observatory =
            obs.observation_location.as_ref().map(|l| l.full.as_str()).unwrap_or_default();

        writeln!(f, "Current Weather For {location}")?;
        writeln!(f, "Observatory: {observatory}")?;
        writeln!(f, "{}", obs.observation_time)?;
        writeln!(f, "Conditions: {}", obs.weather)?;
        writeln!(f, "Temperature: {}", obs.temperature_string)?;
        writeln!(f, "Relative humidity: {}", obs.relative_humidity)?;
        writeln!(f, "Heat index: {}", obs.heat_index_string)?;
        writeln!(f, "Wind speed: {}", obs.wind_string)?;
        writeln!(f, "Wind chill: {}", obs.windchill_string)?;
        writeln!(f, "Precipitation in the last hour: {} in", obs.precip_1hr_in)?;
        writeln!(f, "Dewpoint: {}", obs.dewpoint_string)
    }
}
