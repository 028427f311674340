use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, WeatherError};

/// Sent with every request; api.weather.gov rejects anonymous clients.
pub const USER_AGENT: &str = concat!("zipweather/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET `url` and decode the fully-read body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(http: &Client, url: &str) -> Result<T> {
    debug!("GET {url}");

    let res = http.get(url).header(reqwest::header::ACCEPT, "*/*").send().await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(WeatherError::Status { status, body: truncate_body(&body) });
    }

    debug!("Received {} bytes with status {status}", body.len());
    Ok(serde_json::from_str(&body)?)
}

pub(crate) fn trim_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX).rev().find(|&i| body.is_char_boundary(i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
