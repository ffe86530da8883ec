//! Unit conversion for display. Stored data is always metric; these helpers
//! convert at render time only.

use crate::types::{UnitPreference, WindUnit};

/// Metres per second to miles per hour
pub const MPS_TO_MPH: f64 = 2.237;
/// Kilometres per hour to miles per hour
pub const KPH_TO_MPH: f64 = 0.621371;

/// Display suffixes, paired with the conversion applied to the numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub temp: &'static str,
    pub wind: &'static str,
}

pub fn to_display_temp(celsius: f64, pref: UnitPreference) -> f64 {
    match pref {
        UnitPreference::Metric => celsius,
        UnitPreference::Imperial => celsius * 9.0 / 5.0 + 32.0,
    }
}

/// Inverse of [`to_display_temp`].
pub fn from_display_temp(value: f64, pref: UnitPreference) -> f64 {
    match pref {
        UnitPreference::Metric => value,
        UnitPreference::Imperial => (value - 32.0) * 5.0 / 9.0,
    }
}

/// Metric display keeps the declared source unit; imperial is always mph.
pub fn to_display_wind(speed: f64, pref: UnitPreference, source: WindUnit) -> f64 {
    match (pref, source) {
        (UnitPreference::Metric, _) => speed,
        (UnitPreference::Imperial, WindUnit::MetersPerSecond) => speed * MPS_TO_MPH,
        (UnitPreference::Imperial, WindUnit::KilometersPerHour) => speed * KPH_TO_MPH,
    }
}

/// Inverse of [`to_display_wind`].
pub fn from_display_wind(speed: f64, pref: UnitPreference, source: WindUnit) -> f64 {
    match (pref, source) {
        (UnitPreference::Metric, _) => speed,
        (UnitPreference::Imperial, WindUnit::MetersPerSecond) => speed / MPS_TO_MPH,
        (UnitPreference::Imperial, WindUnit::KilometersPerHour) => speed / KPH_TO_MPH,
    }
}

pub fn unit_labels(pref: UnitPreference, source: WindUnit) -> UnitLabels {
    match (pref, source) {
        (UnitPreference::Imperial, _) => UnitLabels {
            temp: "°F",
            wind: "mph",
        },
        (UnitPreference::Metric, WindUnit::MetersPerSecond) => UnitLabels {
            temp: "°C",
            wind: "m/s",
        },
        (UnitPreference::Metric, WindUnit::KilometersPerHour) => UnitLabels {
            temp: "°C",
            wind: "km/h",
        },
    }
}
