//! Core library for the city weather service.
//!
//! This crate defines:
//! - Configuration handling (TOML file + environment overrides)
//! - The lookup service querying the upstream weather provider
//! - The condition-code-to-icon-asset table
//! - Shared domain models and the domain error taxonomy
//!
//! It is used by `weather-server`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;

pub use config::{Config, ProviderConfig};
pub use error::WeatherError;
pub use model::{Condition, MainInfo, WeatherReport};
pub use provider::{OpenWeatherProvider, WeatherProvider};
