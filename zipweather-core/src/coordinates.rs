//! Postal code → coordinate lookup table, loaded from a CSV resource.
//!
//! Expected layout: `ZIP,LAT,LON,...` with the postal code in column 0 and
//! decimal latitude/longitude in columns 1 and 2.

use std::{collections::HashMap, fmt, fs::File, io::Read, path::Path};

use tracing::{debug, info, warn};

use crate::error::{Result, WeatherError};

/// Number of fractional digits kept for each coordinate.
const FRACTION_DIGITS: usize = 2;

/// Latitude/longitude kept as decimal strings so they can be placed in a URL verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatePair {
    pub latitude: String,
    pub longitude: String,
}

impl CoordinatePair {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self { latitude: latitude.into(), longitude: longitude.into() }
    }
}

impl fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Read-only mapping from postal code to coordinates.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    entries: HashMap<String, CoordinatePair>,
}

impl CoordinateTable {
    /// Load the table from `path`.
    ///
    /// A file that cannot be opened is logged and yields an empty table, so
    /// every later lookup fails with [`WeatherError::NotFound`]. Malformed rows
    /// still abort the load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        match Self::from_path(path) {
            Err(err @ WeatherError::ResourceUnavailable { .. }) => {
                warn!("{err}; continuing with an empty coordinate table");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Load the table from `path`, failing if the file cannot be opened.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WeatherError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(file)?;
        info!("Loaded {} postal codes from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse CSV rows from any reader. Rows whose first field is `ZIP` are headers and skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(false).from_reader(reader);

        let mut entries = HashMap::new();
        for result in rdr.records() {
            let record = result?;

            if record.get(0) == Some("ZIP") {
                continue;
            }

            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let (Some(zip), Some(lat), Some(lon)) = (record.get(0), record.get(1), record.get(2))
            else {
                return Err(WeatherError::Parse {
                    line,
                    message: format!("expected at least 3 fields, found {}", record.len()),
                });
            };

            entries.insert(
                zip.trim().to_string(),
                CoordinatePair::new(truncate_coordinate(lat), truncate_coordinate(lon)),
            );
        }

        debug!("Parsed {} coordinate rows", entries.len());
        Ok(Self { entries })
    }

    /// Look up the coordinates for a postal code.
    pub fn resolve(&self, zip: &str) -> Result<&CoordinatePair> {
        self.entries.get(zip).ok_or_else(|| WeatherError::NotFound(zip.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CoordinatePair)> for CoordinateTable {
    fn from_iter<I: IntoIterator<Item = (K, CoordinatePair)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}

/// Trim whitespace and cut the fractional part to two digits. No rounding.
fn truncate_coordinate(raw: &str) -> String {
    let raw = raw.trim();
    match raw.split_once('.') {
        Some((whole, fraction)) => {
            let cut = fraction
                .char_indices()
                .nth(FRACTION_DIGITS)
                .map(|(idx, _)| idx)
                .unwrap_or(fraction.len());
            format!("{whole}.{}", &fraction[..cut])
        }
        None => raw.to_string(),
    }
}
