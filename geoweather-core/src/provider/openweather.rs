use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::{
    error::{LookupError, Stage},
    model::{GeoLocation, LookupRequest, Units, WeatherReading},
};

use super::{GeocodeResolve, WeatherFetch};

const GEOCODE_URL: &str = "http://api.openweathermap.org/geo/1.0/direct";
const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

// Bounds each call so an abandoned lookup cannot hang forever. Applied per
// request so `Client::new()` stays infallible.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeather geocoding and current-weather endpoints.
#[derive(Debug, Clone, Default)]
pub struct OpenWeatherApi {
    http: Client,
}

impl OpenWeatherApi {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl GeocodeResolve for OpenWeatherApi {
    async fn resolve(&self, request: &LookupRequest) -> Result<GeoLocation, LookupError> {
        let place = request.place_query();
        let limit = request.limit.to_string();
        debug!("geocoding '{place}' (limit {limit})");

        let res = self
            .http
            .get(GEOCODE_URL)
            .timeout(HTTP_TIMEOUT)
            .query(&[
                ("q", place.as_str()),
                ("limit", limit.as_str()),
                ("appid", request.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|source| LookupError::transport(Stage::Geocode, source))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LookupError::bad_status(Stage::Geocode, status));
        }

        let matches: Vec<GeoMatch> = res
            .json()
            .await
            .map_err(|source| LookupError::transport(Stage::Geocode, source))?;

        let first = matches.into_iter().next().ok_or(LookupError::NoResults)?;
        Ok(first.into_location())
    }
}

#[async_trait]
impl WeatherFetch for OpenWeatherApi {
    async fn fetch(
        &self,
        location: &GeoLocation,
        units: Units,
        api_key: &str,
    ) -> Result<WeatherReading, LookupError> {
        let lat = coordinate_param(location.latitude);
        let lon = coordinate_param(location.longitude);
        debug!("fetching weather for '{}' at ({lat}, {lon})", location.display_name);

        let res = self
            .http
            .get(WEATHER_URL)
            .timeout(HTTP_TIMEOUT)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("units", units.as_str()),
                ("appid", api_key),
            ])
            .send()
            .await
            .map_err(|source| LookupError::transport(Stage::Weather, source))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LookupError::bad_status(Stage::Weather, status));
        }

        let body: WeatherBody = res
            .json()
            .await
            .map_err(|source| LookupError::transport(Stage::Weather, source))?;

        Ok(body.into_reading())
    }
}

/// An unresolved coordinate goes out as an empty parameter; the endpoint
/// answers with a client error that surfaces as `RemoteService`.
fn coordinate_param(coord: Option<f64>) -> String {
    coord.map(|c| c.to_string()).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
struct GeoMatch {
    #[serde(default, deserialize_with = "lenient_f64")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    lon: Option<f64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    country: String,
}

impl GeoMatch {
    fn into_location(self) -> GeoLocation {
        if self.lat.is_none() || self.lon.is_none() {
            warn!("geocode match '{}' has unparseable coordinates", self.name);
        }

        GeoLocation {
            latitude: self.lat,
            longitude: self.lon,
            display_name: self.name,
            state: self.state,
            country: self.country,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherBody {
    #[serde(default)]
    main: WeatherMain,
    #[serde(default)]
    wind: WeatherWind,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherMain {
    #[serde(default, deserialize_with = "lenient_f64")]
    temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    feels_like: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherWind {
    #[serde(default, deserialize_with = "lenient_f64")]
    speed: Option<f64>,
}

impl WeatherBody {
    fn into_reading(self) -> WeatherReading {
        WeatherReading {
            // Whole degrees, truncated toward zero.
            temperature: self.main.temp.map(|t| t as i64),
            feels_like: self.main.feels_like.map(|t| t as i64),
            wind_speed: self.wind.speed,
        }
    }
}

/// Accepts a JSON number or a numeric string; anything else becomes `None`.
/// The geocode endpoint is known to serve coordinates as strings.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
