use std::sync::Arc;

use tracing::{debug, instrument};

use crate::backend::BackendClient;
use crate::config::{Config, LocationConfig};
use crate::error::Result;
use crate::geocode::ZipGeocoder;
use crate::location::{DeviceLocation, Geocoder, LocationChain};
use crate::model::*;
use crate::recording::MatchForm;

/// The main entry point for club discovery and match recording.
///
/// `FifteenAllClient` is built explicitly from a [`Config`] and passed to
/// whatever needs it; there is no process-wide instance. Scoring itself is
/// pure and lives in [`crate::scoring`].
///
/// # Examples
///
/// ```no_run
/// # async fn example(
/// #     device: std::sync::Arc<dyn fifteen_all::location::DeviceLocation>,
/// # ) -> fifteen_all::Result<()> {
/// use fifteen_all::{Config, FifteenAllClient, UserProfile};
///
/// let client = FifteenAllClient::new(&Config::default());
/// let profile = UserProfile {
///     zip_code: Some("94102".to_string()),
///     phone: None,
/// };
/// let found = client.discover_nearby_clubs(device, Some(profile)).await?;
/// println!("{} clubs near {:?}", found.clubs.len(), found.location.source);
/// # Ok(())
/// # }
/// ```
pub struct FifteenAllClient {
    backend: BackendClient,
    geocoder: Arc<dyn Geocoder>,
    location: LocationConfig,
}

impl FifteenAllClient {
    /// Create a new client with a default HTTP client.
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            backend: BackendClient::new(client.clone(), &config.backend),
            geocoder: Arc::new(ZipGeocoder::new(client, &config.geocoder)),
            location: config.location.clone(),
        }
    }

    /// Replace the zip-code geocoder.
    pub fn with_geocoder(mut self, geocoder: Arc<dyn Geocoder>) -> Self {
        self.geocoder = geocoder;
        self
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    /// The standard GPS → zip → phone → default chain for this user.
    pub fn location_chain(
        &self,
        device: Arc<dyn DeviceLocation>,
        profile: Option<UserProfile>,
    ) -> LocationChain {
        LocationChain::standard(device, Arc::clone(&self.geocoder), profile, &self.location)
    }

    /// Resolve a location, then look up clubs within the configured radius.
    ///
    /// Retrying after an error is simply calling this again.
    #[instrument(skip(self, device))]
    pub async fn discover_nearby_clubs(
        &self,
        device: Arc<dyn DeviceLocation>,
        profile: Option<UserProfile>,
    ) -> Result<ClubDiscovery> {
        let location = self.location_chain(device, profile).resolve().await?;
        let clubs = self
            .backend
            .get_clubs_near_location(&location.location, self.location.search_radius_km)
            .await?;
        debug!(
            source = %location.source,
            count = clubs.len(),
            "discovered nearby clubs"
        );
        Ok(ClubDiscovery { location, clubs })
    }

    /// Validate a filled-in match form and send it to the backend.
    #[instrument(skip(self, form))]
    pub async fn record_match(&self, form: &MatchForm) -> Result<String> {
        let request = form.to_request()?;
        self.backend.record_match(&request).await
    }
}
