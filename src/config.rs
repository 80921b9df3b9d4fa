use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::model::Location;

/// Client configuration, usually loaded from `fifteen-all.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub geocoder: GeocoderConfig,
    pub location: LocationConfig,
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

/// Remote backend the RPC calls go to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:54321".to_string(),
            anon_key: String::new(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub country: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.zippopotam.us".to_string(),
            country: "us".to_string(),
        }
    }
}

/// Last-resort location and the club search radius.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub default_zip: String,
    pub default_latitude: f64,
    pub default_longitude: f64,
    /// Radius for the nearby-clubs lookup, in kilometers.
    pub search_radius_km: f64,
}

impl LocationConfig {
    pub fn default_location(&self) -> Location {
        Location::new(self.default_latitude, self.default_longitude)
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_zip: "10001".to_string(),
            default_latitude: 40.7128,
            default_longitude: -74.0060,
            search_radius_km: 50.0,
        }
    }
}
