use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::GeocoderConfig;
use crate::error::{FifteenAllError, Result};
use crate::location::Geocoder;
use crate::model::Location;

/// Zip-code geocoder backed by a zippopotam-style HTTP service.
pub struct ZipGeocoder {
    http: reqwest::Client,
    base_url: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct ZipResponse {
    #[serde(default)]
    places: Vec<ZipPlace>,
}

#[derive(Debug, Deserialize)]
struct ZipPlace {
    latitude: String,
    longitude: String,
}

impl ZipGeocoder {
    pub fn new(http: reqwest::Client, config: &GeocoderConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country: config.country.clone(),
        }
    }
}

#[async_trait]
impl Geocoder for ZipGeocoder {
    #[instrument(skip(self))]
    async fn geocode_zip(&self, zip: &str) -> Result<Option<Location>> {
        let url = format!("{}/{}/{}", self.base_url, self.country, zip.trim());
        debug!(%url, "geocoding zip code");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FifteenAllError::Http {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FifteenAllError::UnexpectedStatus { url, status });
        }

        let body: ZipResponse = response
            .json()
            .await
            .map_err(|e| FifteenAllError::ResponseBody {
                url: url.clone(),
                source: e,
            })?;

        body.places
            .first()
            .map(|place| -> Result<Location> {
                Ok(Location::new(
                    place.latitude.trim().parse()?,
                    place.longitude.trim().parse()?,
                ))
            })
            .transpose()
    }
}
