/// All errors surfaced by the scoring, location and backend layers.
#[derive(thiserror::Error, Debug)]
pub enum FifteenAllError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A point score outside `0`, `15`, `30`, `40`, `AD`.
    #[error("invalid score state: {0:?}")]
    InvalidScoreState(String),

    /// Foreground location permission was not granted.
    #[error("location permission denied")]
    PermissionDenied,

    /// The user profile has no value for a field a location stage needs.
    #[error("profile has no {field}")]
    MissingProfileField { field: &'static str },

    /// The geocoder returned no coordinate for a zip code.
    #[error("no coordinates found for zip code {zip}")]
    GeocodeNotFound { zip: String },

    /// A coordinate string in a geocoder response could not be parsed.
    #[error("failed to parse coordinate: {0}")]
    CoordinateParse(#[from] std::num::ParseFloatError),

    /// The phone number contained no digits to derive an area code from.
    #[error("no area code in phone number {phone:?}")]
    InvalidAreaCode { phone: String },

    /// Every location strategy failed.
    #[error("unable to determine location")]
    LocationUnavailable,

    /// A match form failed validation while building a request.
    #[error("invalid match: {0}")]
    InvalidMatch(String),

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FifteenAllError>;
