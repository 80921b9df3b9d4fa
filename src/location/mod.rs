//! Best-effort resolution of the user's position for club discovery.

pub mod area_code;
mod chain;
mod strategy;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Location;

pub use chain::LocationChain;
pub use strategy::{DefaultStrategy, GpsStrategy, LocationStrategy, PhoneStrategy, ZipStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// Requested precision of a device position fix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Lowest,
    Low,
    #[default]
    Balanced,
    High,
    Highest,
}

/// The platform's location service.
#[async_trait]
pub trait DeviceLocation: Send + Sync {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus>;

    async fn current_position(&self, accuracy: Accuracy) -> Result<Location>;
}

/// Turns a zip code into a coordinate. `Ok(None)` means the lookup found nothing.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode_zip(&self, zip: &str) -> Result<Option<Location>>;
}
