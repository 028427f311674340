use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::error::{Result, WeatherError};

const MAX_CITY_LEN: usize = 32;
const STATE_LEN: usize = 2;

static VALID_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z a-z]+$").expect("static pattern"));

/// A validated "City, State" location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub state: String,
}

impl LocationQuery {
    /// Parse and validate a query of the form `City, ST`.
    ///
    /// The city may hold letters and spaces only, up to 32 characters; the
    /// state must be exactly two letters.
    pub fn parse(query: &str) -> Result<Self> {
        let invalid = || {
            WeatherError::Validation(format!(
                "Query \"{query}\" should be in form City, State e.g. Austin, TX"
            ))
        };

        let (city, state) = query.split_once(',').ok_or_else(invalid)?;
        let (city, state) = (city.trim(), state.trim());

        if state.chars().count() != STATE_LEN
            || city.chars().count() > MAX_CITY_LEN
            || !VALID_PART.is_match(city)
            || !VALID_PART.is_match(state)
        {
            return Err(invalid());
        }

        Ok(Self { city: city.to_string(), state: state.to_string() })
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}
