//! Match scoring and club discovery for recreational tennis clubs.

pub use client::FifteenAllClient;
pub use config::Config;
pub use error::{FifteenAllError, Result};
pub use model::*;
pub use recording::MatchForm;
pub use scoring::TennisScoring;

pub mod backend;
mod client;
pub mod config;
mod error;
pub mod geocode;
pub mod location;
mod model;
pub mod recording;
pub mod scoring;
pub mod stats;
