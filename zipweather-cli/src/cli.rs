use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use tracing::{debug, warn};
use zipweather_core::{ConditionsClient, Config, CoordinateTable, StationClient, render_summary};

/// Postal code used when `station` is run without an argument.
const REFERENCE_ZIP: &str = "78704";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "zipweather", version, about = "Current weather by postal code or city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the wunderground API key.
    Configure,

    /// Resolve a postal code to its nearest observation station.
    Station {
        /// Postal code to look up.
        #[arg(default_value = REFERENCE_ZIP)]
        zip: String,

        /// CSV file mapping postal codes to coordinates; overrides the configured path.
        #[arg(long)]
        zip_data: Option<PathBuf>,
    },

    /// Show current conditions for a "City, State" query.
    Show {
        /// Location, e.g. "Austin, TX".
        query: String,

        /// Print the decoded record as JSON instead of the summary.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => {
                let mut config = config_or_default(Config::load());
                let api_key = Password::new("Wunderground API key:")
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read API key")?;

                config.set_api_key(api_key.trim().to_string());
                config.save()?;
                println!("Saved configuration to {}", Config::config_file_path()?.display());
            }
            Command::Station { zip, zip_data } => {
                let config = Config::load()?;
                let path = zip_data.unwrap_or_else(|| config.zip_data.clone());
                let table = CoordinateTable::load(&path)?;

                let client = StationClient::from_config(&config)?;
                let station = client
                    .station_for_zip(&table, &zip)
                    .await
                    .with_context(|| format!("Station lookup for {zip} failed"))?;

                println!("{station} ({})", station.name);
            }
            Command::Show { query, json } => {
                let config = Config::load()?;
                let client = ConditionsClient::from_config(&config)?;
                let record = client.current_conditions(&query).await?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                } else {
                    print!("{}", render_summary(&record));
                    if let Some(at) = record.current_observation.observed_at() {
                        debug!("Observation taken at {}", at.to_rfc3339());
                    }
                }
            }
        }

        Ok(())
    }
}

/// Loaded config, or defaults when the stored file cannot be read or parsed.
fn config_or_default(loaded: anyhow::Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        warn!("{err:#}; starting from default configuration");
        Config::default()
    })
}
