use serde::{Deserialize, Serialize};

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }
}

/// Which stage of the fallback chain produced a location.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LocationSource {
    Gps,
    Zip,
    Phone,
    Default,
}

/// A location together with the stage that resolved it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub location: Location,
    pub source: LocationSource,
}

/// The profile fields the location chain consults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub zip_code: Option<String>,
    pub phone: Option<String>,
}
