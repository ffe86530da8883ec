//! Builds the shared services for one session from configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use skycast_core::{Config, UnitSystem, WindSpeedUnit};
use skycast_weather::{UnitPreference, WeatherClient, WindUnit};

use crate::autocomplete::AutocompleteSettings;
use crate::input::InputController;
use crate::presenter::Presenter;

/// Session services derived from [`Config`].
#[derive(Debug, Clone)]
pub struct AppServices {
    client: WeatherClient,
    settings: AutocompleteSettings,
    units: UnitPreference,
    wind_source: WindUnit,
}

impl AppServices {
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.service.request_timeout_secs);
        let client = WeatherClient::new(&config.service.base_url, timeout)
            .context("Failed to build weather client")?;

        tracing::info!(
            "Weather client initialized with base_url: {}",
            client.base_url()
        );

        Ok(Self {
            client,
            settings: AutocompleteSettings {
                debounce: Duration::from_millis(config.autocomplete.debounce_ms),
                min_query_len: config.autocomplete.min_query_len,
                require_resolved_place: config.autocomplete.require_resolved_place,
            },
            units: unit_preference(config.display.units),
            wind_source: wind_unit(config.service.wind_source_unit),
        })
    }

    pub fn client(&self) -> &WeatherClient {
        &self.client
    }

    pub fn settings(&self) -> &AutocompleteSettings {
        &self.settings
    }

    pub fn units(&self) -> UnitPreference {
        self.units
    }

    pub fn wind_source(&self) -> WindUnit {
        self.wind_source
    }

    pub fn into_controller<P: Presenter>(self, presenter: P) -> InputController<P> {
        InputController::new(
            self.client,
            self.settings,
            self.units,
            self.wind_source,
            presenter,
        )
    }
}

pub fn unit_preference(units: UnitSystem) -> UnitPreference {
    match units {
        UnitSystem::Metric => UnitPreference::Metric,
        UnitSystem::Imperial => UnitPreference::Imperial,
    }
}

pub fn wind_unit(unit: WindSpeedUnit) -> WindUnit {
    match unit {
        WindSpeedUnit::MetersPerSecond => WindUnit::MetersPerSecond,
        WindSpeedUnit::KilometersPerHour => WindUnit::KilometersPerHour,
    }
}
