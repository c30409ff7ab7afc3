//! Core library for the `geoweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Input validation for the lookup fields
//! - Geocoding and current-weather providers
//! - The lookup pipeline that chains them
//!
//! It is used by `geoweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod validate;

pub use config::Config;
pub use error::{LookupError, Stage};
pub use model::{GeoLocation, LookupRequest, Units, WeatherReading};
pub use pipeline::{LookupForm, LookupOutcome, Pipeline};
pub use provider::{GeocodeResolve, WeatherFetch};
