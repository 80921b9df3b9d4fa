use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::area_code::zip_for_phone;
use super::{Accuracy, DeviceLocation, Geocoder, PermissionStatus};
use crate::error::{FifteenAllError, Result};
use crate::model::{Location, LocationSource, UserProfile};

/// One stage of the location fallback chain.
#[async_trait]
pub trait LocationStrategy: Send + Sync {
    fn source(&self) -> LocationSource;

    async fn locate(&self) -> Result<Location>;
}

async fn geocode_required(geocoder: &dyn Geocoder, zip: &str) -> Result<Location> {
    geocoder
        .geocode_zip(zip)
        .await?
        .ok_or_else(|| FifteenAllError::GeocodeNotFound {
            zip: zip.to_string(),
        })
}

/// Device position, after asking for foreground permission.
pub struct GpsStrategy {
    device: Arc<dyn DeviceLocation>,
}

impl GpsStrategy {
    pub fn new(device: Arc<dyn DeviceLocation>) -> Self {
        Self { device }
    }
}

#[async_trait]
impl LocationStrategy for GpsStrategy {
    fn source(&self) -> LocationSource {
        LocationSource::Gps
    }

    async fn locate(&self) -> Result<Location> {
        match self.device.request_foreground_permission().await? {
            PermissionStatus::Granted => self.device.current_position(Accuracy::Balanced).await,
            status => {
                debug!(?status, "location permission not granted");
                Err(FifteenAllError::PermissionDenied)
            }
        }
    }
}

/// Geocoded zip code from the user's profile.
pub struct ZipStrategy {
    geocoder: Arc<dyn Geocoder>,
    profile: UserProfile,
}

impl ZipStrategy {
    pub fn new(geocoder: Arc<dyn Geocoder>, profile: UserProfile) -> Self {
        Self { geocoder, profile }
    }
}

#[async_trait]
impl LocationStrategy for ZipStrategy {
    fn source(&self) -> LocationSource {
        LocationSource::Zip
    }

    async fn locate(&self) -> Result<Location> {
        let zip = non_blank(self.profile.zip_code.as_deref())
            .ok_or(FifteenAllError::MissingProfileField { field: "zip code" })?;
        geocode_required(self.geocoder.as_ref(), zip).await
    }
}

/// Zip code inferred from the area code of the profile's phone number.
pub struct PhoneStrategy {
    geocoder: Arc<dyn Geocoder>,
    profile: UserProfile,
}

impl PhoneStrategy {
    pub fn new(geocoder: Arc<dyn Geocoder>, profile: UserProfile) -> Self {
        Self { geocoder, profile }
    }
}

#[async_trait]
impl LocationStrategy for PhoneStrategy {
    fn source(&self) -> LocationSource {
        LocationSource::Phone
    }

    async fn locate(&self) -> Result<Location> {
        let phone = non_blank(self.profile.phone.as_deref())
            .ok_or(FifteenAllError::MissingProfileField { field: "phone" })?;
        let zip = zip_for_phone(phone)?;
        geocode_required(self.geocoder.as_ref(), zip).await
    }
}

/// Last resort: a fixed zip code, then a literal coordinate. Never fails.
pub struct DefaultStrategy {
    geocoder: Arc<dyn Geocoder>,
    zip: String,
    fallback: Location,
}

impl DefaultStrategy {
    pub fn new(geocoder: Arc<dyn Geocoder>, zip: impl Into<String>, fallback: Location) -> Self {
        Self {
            geocoder,
            zip: zip.into(),
            fallback,
        }
    }
}

#[async_trait]
impl LocationStrategy for DefaultStrategy {
    fn source(&self) -> LocationSource {
        LocationSource::Default
    }

    async fn locate(&self) -> Result<Location> {
        match geocode_required(self.geocoder.as_ref(), &self.zip).await {
            Ok(location) => Ok(location),
            Err(error) => {
                warn!(zip = %self.zip, %error, "default zip geocoding failed, using fixed coordinate");
                Ok(self.fallback)
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
