use crate::{
    error::LookupError,
    model::{GeoLocation, LookupRequest, Units, WeatherReading},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Resolves a place name to coordinates. First stage of the network half of
/// the pipeline.
#[async_trait]
pub trait GeocodeResolve: Send + Sync + Debug {
    async fn resolve(&self, request: &LookupRequest) -> Result<GeoLocation, LookupError>;
}

/// Fetches current conditions for a resolved place. Second stage.
#[async_trait]
pub trait WeatherFetch: Send + Sync + Debug {
    async fn fetch(
        &self,
        location: &GeoLocation,
        units: Units,
        api_key: &str,
    ) -> Result<WeatherReading, LookupError>;
}
