use std::fmt;

/// Rendered in place of any numeric field the upstream payload did not carry.
pub const UNAVAILABLE: &str = "unavailable";

/// One lookup as entered by the user. Built fresh per invocation and not
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub city: String,
    pub state: String,
    pub country: String,
    pub limit: u32,
    pub api_key: String,
}

impl LookupRequest {
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        limit: u32,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            country: country.into(),
            limit: limit.max(1),
            api_key: api_key.into(),
        }
    }

    /// Query value for the geocode endpoint: `city,state,country`.
    pub fn place_query(&self) -> String {
        format!("{},{},{}", self.city, self.state, self.country)
    }
}

/// Unit system forwarded to the weather endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Imperial,
    Metric,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Imperial => "imperial",
            Units::Metric => "metric",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "imperial" => Ok(Units::Imperial),
            "metric" => Ok(Units::Metric),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported unit systems: imperial, metric."
            )),
        }
    }
}

/// A resolved place. `latitude`/`longitude` are `None` when the upstream
/// value was missing or unparseable; that is tolerated, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub display_name: String,
    pub state: String,
    pub country: String,
}

impl GeoLocation {
    /// One-line rendering, e.g. `New York, NY, US (40.71, -74)`.
    pub fn summary(&self) -> String {
        format!(
            "{}, {}, {} ({}, {})",
            self.display_name,
            self.state,
            self.country,
            text_or_unavailable(self.latitude),
            text_or_unavailable(self.longitude),
        )
    }
}

/// Current conditions for a resolved place. Temperatures are whole degrees,
/// truncated toward zero. Each field is independently optional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeatherReading {
    pub temperature: Option<i64>,
    pub feels_like: Option<i64>,
    pub wind_speed: Option<f64>,
}

impl WeatherReading {
    pub fn temperature_text(&self) -> String {
        text_or_unavailable(self.temperature)
    }

    pub fn feels_like_text(&self) -> String {
        text_or_unavailable(self.feels_like)
    }

    pub fn wind_speed_text(&self) -> String {
        text_or_unavailable(self.wind_speed)
    }
}

fn text_or_unavailable<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_query_joins_fields_with_commas() {
        let request = LookupRequest::new("New York", "NY", "US", 1, "KEY");
        assert_eq!(request.place_query(), "New York,NY,US");
    }

    #[test]
    fn limit_is_clamped_to_at_least_one() {
        let request = LookupRequest::new("a", "b", "c", 0, "");
        assert_eq!(request.limit, 1);
    }

    #[test]
    fn units_as_str_roundtrip() {
        for units in [Units::Imperial, Units::Metric] {
            let parsed = Units::try_from(units.as_str()).expect("roundtrip should succeed");
            assert_eq!(units, parsed);
        }
    }

    #[test]
    fn unknown_units_error() {
        let err = Units::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown unit system"));
    }

    #[test]
    fn summary_renders_coordinates() {
        let location = GeoLocation {
            latitude: Some(40.71),
            longitude: Some(-74.0),
            display_name: "New York".to_string(),
            state: "NY".to_string(),
            country: "US".to_string(),
        };
        assert_eq!(location.summary(), "New York, NY, US (40.71, -74)");
    }

    #[test]
    fn summary_marks_absent_coordinates() {
        let location = GeoLocation {
            latitude: None,
            longitude: Some(13.4),
            display_name: "Berlin".to_string(),
            state: String::new(),
            country: "DE".to_string(),
        };
        assert_eq!(location.summary(), "Berlin, , DE (unavailable, 13.4)");
    }

    #[test]
    fn reading_renders_sentinel_for_missing_fields() {
        let reading = WeatherReading { temperature: Some(72), feels_like: None, wind_speed: None };
        assert_eq!(reading.temperature_text(), "72");
        assert_eq!(reading.feels_like_text(), UNAVAILABLE);
        assert_eq!(reading.wind_speed_text(), UNAVAILABLE);
    }
}
