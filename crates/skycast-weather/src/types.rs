use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Display unit system chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    #[default]
    Metric,
    Imperial,
}

impl UnitPreference {
    pub fn is_imperial(self) -> bool {
        matches!(self, Self::Imperial)
    }

    pub fn from_imperial(imperial: bool) -> Self {
        if imperial {
            Self::Imperial
        } else {
            Self::Metric
        }
    }
}

/// Wind speed unit the service reports in. Fixed per deployment, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindUnit {
    #[default]
    MetersPerSecond,
    KilometersPerHour,
}

/// Weather condition categories mapped from service icon codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Snow,
    Sleet,
    Thunderstorm,
    Wind,
}

impl WeatherCondition {
    /// Classify an icon code. Accepts both named codes ("partly-cloudy-day",
    /// "thunder-rain") and two-digit codes with a day/night suffix ("10d").
    pub fn from_icon_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        if code.is_empty() {
            return None;
        }

        let numeric = code.trim_end_matches(['d', 'n']);
        if let Ok(n) = numeric.parse::<u8>() {
            return Some(match n {
                1 => Self::Clear,
                2 => Self::PartlyCloudy,
                3 | 4 => Self::Cloudy,
                9 => Self::Drizzle,
                10 => Self::Rain,
                11 => Self::Thunderstorm,
                13 => Self::Snow,
                50 => Self::Fog,
                _ => return None,
            });
        }

        let condition = if code.starts_with("thunder") {
            Self::Thunderstorm
        } else if code.starts_with("partly-cloudy") {
            Self::PartlyCloudy
        } else if code.starts_with("clear") {
            Self::Clear
        } else if code.starts_with("showers") {
            Self::Drizzle
        } else {
            match code.as_str() {
                "cloudy" => Self::Cloudy,
                "fog" => Self::Fog,
                "wind" => Self::Wind,
                "rain" => Self::Rain,
                "snow" | "snow-showers-day" | "snow-showers-night" => Self::Snow,
                "sleet" | "hail" => Self::Sleet,
                _ => return None,
            }
        };
        Some(condition)
    }

    /// Classify free-form condition text such as "Rain, Partially cloudy".
    pub fn from_description(description: &str) -> Self {
        let d = description.to_lowercase();
        if d.contains("thunder") {
            Self::Thunderstorm
        } else if d.contains("sleet") || d.contains("freezing") || d.contains("hail") {
            Self::Sleet
        } else if d.contains("snow") {
            Self::Snow
        } else if d.contains("heavy rain") {
            Self::HeavyRain
        } else if d.contains("drizzle") || d.contains("shower") {
            Self::Drizzle
        } else if d.contains("rain") {
            Self::Rain
        } else if d.contains("fog") || d.contains("mist") || d.contains("haze") {
            Self::Fog
        } else if d.contains("partly") || d.contains("partially") || d.contains("few clouds") {
            Self::PartlyCloudy
        } else if d.contains("cloud") || d.contains("overcast") {
            Self::Cloudy
        } else if d.contains("wind") {
            Self::Wind
        } else {
            Self::Clear
        }
    }

    /// Icon code first, description as the fallback.
    pub fn classify(icon: Option<&str>, description: &str) -> Self {
        icon.and_then(Self::from_icon_code)
            .unwrap_or_else(|| Self::from_description(description))
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Snow => "Snow",
            Self::Sleet => "Sleet",
            Self::Thunderstorm => "Thunderstorm",
            Self::Wind => "Wind",
        }
    }

    /// Overlay effect name for the map collaborator
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "sun",
            Self::PartlyCloudy => "cloud_sun",
            Self::Cloudy => "cloud",
            Self::Fog => "cloud_fog",
            Self::Drizzle | Self::Rain | Self::HeavyRain => "cloud_rain",
            Self::Snow | Self::Sleet => "cloud_snow",
            Self::Thunderstorm => "cloud_lightning",
            Self::Wind => "wind",
        }
    }
}

/// Geographic coordinates of a resolved place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A place candidate. Resolved when coordinates are known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub label: String,
    pub coordinates: Option<Coordinates>,
}

impl Place {
    pub fn resolved(label: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            label: label.into(),
            coordinates: Some(Coordinates { lat, lon }),
        }
    }

    pub fn unresolved(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            coordinates: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Request body for this place: coordinates when known, otherwise the label as a city name.
    pub fn to_query(&self) -> LocationQuery {
        match self.coordinates {
            Some(Coordinates { lat, lon }) => LocationQuery::Coordinates {
                lat,
                lon,
                label: self.label.clone(),
            },
            None => LocationQuery::City {
                city: self.label.clone(),
            },
        }
    }
}

/// Candidates returned for one query, in server order. Never mutated once built.
pub type SuggestionList = Arc<[Place]>;

/// Body of a weather or forecast request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocationQuery {
    Coordinates { lat: f64, lon: f64, label: String },
    City { city: String },
}

impl LocationQuery {
    pub fn label(&self) -> &str {
        match self {
            Self::Coordinates { label, .. } => label,
            Self::City { city } => city,
        }
    }
}

/// Current conditions, always in source (metric) units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub description: String,
    pub icon: Option<String>,
    pub temp: f64,
    pub feels_like: f64,
    pub daily_low: f64,
    pub daily_high: f64,
    /// Missing when the service sends no reading
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Epoch seconds
    pub sunrise: Option<i64>,
    /// Epoch seconds
    pub sunset: Option<i64>,
    pub map_url: Option<String>,
}

/// One forecast day, temperatures in Celsius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub day: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub min_temp: f64,
    pub max_temp: f64,
}

/// Chronological, one entry per day
pub type Forecast = Vec<ForecastEntry>;

/// Result of a joined weather + forecast fetch
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherBundle {
    pub weather: WeatherSnapshot,
    pub forecast: Forecast,
}

/// Error classes surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Service,
}

/// Weather client errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Service(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Http { .. } | Self::Network(_) => ErrorKind::Network,
            Self::Service(_) | Self::Parse(_) => ErrorKind::Service,
        }
    }
}
