//! The lookup pipeline: validate → geocode → fetch-weather, in that order,
//! once per user action. The first failing stage aborts the rest and is
//! reported once; there are no retries.

use chrono::{DateTime, Utc};
use log::debug;

use crate::{
    config::Config,
    error::LookupError,
    model::{GeoLocation, LookupRequest, Units, WeatherReading},
    provider::{GeocodeResolve, WeatherFetch, openweather::OpenWeatherApi},
    validate::{FieldInput, missing_fields},
};

/// Field labels, in the order validation errors are reported.
pub const CITY_LABEL: &str = "City";
pub const STATE_LABEL: &str = "State";
pub const COUNTRY_LABEL: &str = "Country";

/// The lookup form as submitted: raw text per field.
#[derive(Debug, Clone, Default)]
pub struct LookupForm {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Everything one successful run produces.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub location: GeoLocation,
    pub weather: WeatherReading,
    pub retrieved_at: DateTime<Utc>,
}

/// Chains the three stages over injected providers. Nothing is kept between
/// runs except the startup configuration.
pub struct Pipeline {
    api_key: String,
    limit: u32,
    units: Units,
    geocoder: Box<dyn GeocodeResolve>,
    fetcher: Box<dyn WeatherFetch>,
}

impl Pipeline {
    pub fn new(
        api_key: impl Into<String>,
        limit: u32,
        units: Units,
        geocoder: Box<dyn GeocodeResolve>,
        fetcher: Box<dyn WeatherFetch>,
    ) -> Self {
        Self { api_key: api_key.into(), limit, units, geocoder, fetcher }
    }

    /// Pipeline backed by the OpenWeather endpoints.
    pub fn openweather(config: &Config, limit: u32, units: Units) -> Self {
        let api = OpenWeatherApi::new();
        Self::new(config.api_key(), limit, units, Box::new(api.clone()), Box::new(api))
    }

    /// Run the full pipeline for one submitted form. No network request is
    /// issued while any required field is blank.
    pub async fn run(&self, form: &LookupForm) -> Result<LookupOutcome, LookupError> {
        let fields = [
            FieldInput::new(&form.city, CITY_LABEL),
            FieldInput::new(&form.state, STATE_LABEL),
            FieldInput::new(&form.country, COUNTRY_LABEL),
        ];

        let missing = missing_fields(&fields);
        if !missing.is_empty() {
            return Err(LookupError::Validation(missing));
        }

        // Field values go out as entered; only blankness is validated.
        let request = LookupRequest::new(
            form.city.as_str(),
            form.state.as_str(),
            form.country.as_str(),
            self.limit,
            self.api_key.as_str(),
        );

        let location = self.geocoder.resolve(&request).await?;
        debug!("resolved '{}' to {}", request.place_query(), location.summary());

        let weather = self.fetcher.fetch(&location, self.units, &self.api_key).await?;

        Ok(LookupOutcome { location, weather, retrieved_at: Utc::now() })
    }
}
