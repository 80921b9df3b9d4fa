use std::sync::Arc;

use tracing::{debug, error, instrument, warn};

use super::strategy::{DefaultStrategy, GpsStrategy, LocationStrategy, PhoneStrategy, ZipStrategy};
use super::{DeviceLocation, Geocoder};
use crate::config::LocationConfig;
use crate::error::{FifteenAllError, Result};
use crate::model::{ResolvedLocation, UserProfile};

/// Ordered location strategies; the first success wins.
pub struct LocationChain {
    strategies: Vec<Box<dyn LocationStrategy>>,
}

impl LocationChain {
    pub fn new(strategies: Vec<Box<dyn LocationStrategy>>) -> Self {
        Self { strategies }
    }

    /// GPS, then profile zip, then phone area code, then the configured default.
    pub fn standard(
        device: Arc<dyn DeviceLocation>,
        geocoder: Arc<dyn Geocoder>,
        profile: Option<UserProfile>,
        config: &LocationConfig,
    ) -> Self {
        let mut strategies: Vec<Box<dyn LocationStrategy>> =
            vec![Box::new(GpsStrategy::new(device))];
        if let Some(profile) = profile {
            strategies.push(Box::new(ZipStrategy::new(
                Arc::clone(&geocoder),
                profile.clone(),
            )));
            strategies.push(Box::new(PhoneStrategy::new(Arc::clone(&geocoder), profile)));
        }
        strategies.push(Box::new(DefaultStrategy::new(
            geocoder,
            config.default_zip.clone(),
            config.default_location(),
        )));
        Self::new(strategies)
    }

    /// Run every strategy in order until one produces a location.
    ///
    /// Stage failures are logged and skipped. Calling this again restarts
    /// from the first stage.
    #[instrument(skip(self), fields(stages = self.strategies.len()))]
    pub async fn resolve(&self) -> Result<ResolvedLocation> {
        for strategy in &self.strategies {
            let source = strategy.source();
            match strategy.locate().await {
                Ok(location) => {
                    debug!(
                        %source,
                        latitude = location.latitude,
                        longitude = location.longitude,
                        "resolved location"
                    );
                    return Ok(ResolvedLocation { location, source });
                }
                Err(error) => warn!(%source, %error, "location stage failed"),
            }
        }
        error!("all location stages failed");
        Err(FifteenAllError::LocationUnavailable)
    }
}
