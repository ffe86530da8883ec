//! Weather service client for Skycast
//!
//! Provides place search, joined current-conditions + forecast fetches,
//! a session suggestion cache and display unit conversion.

pub mod cache;
pub mod client;
pub mod suggest;
pub mod types;
pub mod units;

pub use cache::SuggestionCache;
pub use client::WeatherClient;
pub use suggest::decode_suggestions;
pub use types::*;
pub use units::UnitLabels;
