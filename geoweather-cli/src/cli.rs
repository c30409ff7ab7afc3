use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Text;
use log::warn;

use geoweather_core::{
    Config, LookupError, Units,
    pipeline::{CITY_LABEL, COUNTRY_LABEL, LookupForm, Pipeline, STATE_LABEL},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "geoweather", version, about = "City weather lookup")]
pub struct Cli {
    /// Path to the JSON configuration file holding API_KEY.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key used for geocoding and weather requests.
    Configure,

    /// Resolve a place and show its current weather.
    Lookup {
        /// City name; prompted for when omitted.
        city: Option<String>,

        /// State or region; prompted for when omitted.
        state: Option<String>,

        /// Country code; prompted for when omitted.
        country: Option<String>,

        /// Unit system: "imperial" or "metric".
        #[arg(long, default_value = "imperial")]
        units: String,

        /// Maximum geocode matches requested; the first one is used.
        #[arg(long, default_value_t = 1)]
        limit: u32,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(self.config.as_deref()),
            Command::Lookup { city, state, country, units, limit } => {
                lookup(self.config.as_deref(), city, state, country, &units, limit).await
            }
        }
    }
}

fn configure(path: Option<&Path>) -> anyhow::Result<()> {
    let api_key =
        Text::new("OpenWeather API key:").prompt().context("Failed to read the API key")?;

    let config = Config::new(api_key);
    config.save(path)?;

    println!("Configuration saved to {}.", config_display_path(path)?);
    Ok(())
}

async fn lookup(
    path: Option<&Path>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    units: &str,
    limit: u32,
) -> anyhow::Result<()> {
    let units = Units::try_from(units)?;

    let config = Config::load(path).unwrap_or_else(|err| {
        warn!("{err:#}");
        Config::default()
    });

    // Shown once; the lookup still runs and sends an empty key, so the
    // endpoint's own rejection is what the user sees next.
    if let Err(problem) = config.check_api_key() {
        eprintln!("warning: {problem}");
    }

    let form = LookupForm {
        city: field_value(city, CITY_LABEL)?,
        state: field_value(state, STATE_LABEL)?,
        country: field_value(country, COUNTRY_LABEL)?,
    };

    let pipeline = Pipeline::openweather(&config, limit, units);

    match pipeline.run(&form).await {
        Ok(outcome) => {
            println!("{}", outcome.location.summary());
            println!("Temperature: {}", outcome.weather.temperature_text());
            println!("Feels like:  {}", outcome.weather.feels_like_text());
            println!("Wind speed:  {}", outcome.weather.wind_speed_text());
            println!("Retrieved at {}", outcome.retrieved_at.format("%Y-%m-%d %H:%M:%S UTC"));
            Ok(())
        }
        Err(LookupError::Validation(missing)) => {
            for label in &missing {
                eprintln!("{label} is required.");
            }
            Err(anyhow::anyhow!("Lookup aborted: required fields are missing"))
        }
        Err(err) => Err(err.into()),
    }
}

/// Use the argument when given, otherwise prompt with the same label the
/// validator reports.
fn field_value(arg: Option<String>, label: &str) -> anyhow::Result<String> {
    match arg {
        Some(value) => Ok(value),
        None => Text::new(&format!("{label}:"))
            .prompt()
            .with_context(|| format!("Failed to read the {label} field")),
    }
}

fn config_display_path(path: Option<&Path>) -> anyhow::Result<String> {
    Ok(match path {
        Some(p) => p.display().to_string(),
        None => Config::config_file_path()?.display().to_string(),
    })
}
