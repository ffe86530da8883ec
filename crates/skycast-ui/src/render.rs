//! Owns the last fetched weather data and the active unit preference.
//!
//! Data is stored in metric and only converted while building the view
//! model, so a unit toggle is a re-render and never a re-fetch.

use skycast_core::{AppError, NetworkError, WeatherError};
use skycast_weather::{UnitPreference, WeatherBundle, WeatherError as ClientError, WindUnit};

use crate::error_mapping::IntoAppError;
use crate::presenter::Presenter;
use crate::view::WeatherViewModel;

#[derive(Debug)]
pub struct RenderCoordinator {
    units: UnitPreference,
    wind_source: WindUnit,
    data: Option<WeatherBundle>,
}

impl RenderCoordinator {
    pub fn new(units: UnitPreference, wind_source: WindUnit) -> Self {
        Self {
            units,
            wind_source,
            data: None,
        }
    }

    pub fn units(&self) -> UnitPreference {
        self.units
    }

    pub fn wind_source(&self) -> WindUnit {
        self.wind_source
    }

    pub fn data(&self) -> Option<&WeatherBundle> {
        self.data.as_ref()
    }

    pub fn on_fetch_started(&mut self, presenter: &mut dyn Presenter) {
        presenter.clear_results();
        presenter.set_loading(true);
    }

    pub fn on_weather_loaded(&mut self, bundle: WeatherBundle, presenter: &mut dyn Presenter) {
        tracing::info!(
            "Weather loaded for {} ({} forecast days)",
            bundle.weather.city,
            bundle.forecast.len()
        );
        self.data = Some(bundle);
        presenter.set_loading(false);
        presenter.clear_results();
        self.render(presenter);
    }

    /// Store the preference and re-render stored data. Nothing is drawn
    /// before the first successful fetch.
    pub fn on_unit_preference_changed(&mut self, units: UnitPreference, presenter: &mut dyn Presenter) {
        self.units = units;
        if self.data.is_none() {
            tracing::debug!("Unit preference {:?} stored, nothing to render", units);
            return;
        }
        self.render(presenter);
    }

    /// Drop stored data and replace whatever was shown with the error.
    pub fn on_fetch_failed(&mut self, err: ClientError, presenter: &mut dyn Presenter) {
        let err = err.into_app_error();
        tracing::error!("Weather fetch failed: {}", err);
        self.data = None;
        presenter.set_loading(false);
        presenter.clear_results();
        presenter.show_error(&failure_message(&err));
    }

    pub fn view_model(&self) -> Option<WeatherViewModel> {
        self.data
            .as_ref()
            .map(|bundle| WeatherViewModel::build(bundle, self.units, self.wind_source))
    }

    /// Full render pass over the stored data.
    pub fn render(&self, presenter: &mut dyn Presenter) {
        let Some(vm) = self.view_model() else {
            return;
        };

        presenter.render_current(&vm.current);
        presenter.render_forecast(&vm.forecast);
        presenter.render_chart(&vm.chart);
        presenter.apply_map_overlay(&vm.overlay);
        presenter.show_map(vm.map_url.as_deref());
        presenter.set_unit_label(vm.current.units.temp);
    }
}

/// Message shown for a failed weather request. Input problems are shown as
/// is; server-provided text is preferred over generic descriptions.
pub fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Weather(WeatherError::InvalidInput(message)) => message.clone(),
        AppError::Weather(
            WeatherError::LocationNotFound(message)
            | WeatherError::ServiceUnavailable(message)
            | WeatherError::ApiError(message),
        )
        | AppError::Network(NetworkError::ServerError { message, .. }) => {
            format!("Failed to fetch weather: {}", message)
        }
        other => format!("Failed to fetch weather: {}", other.user_message()),
    }
}
