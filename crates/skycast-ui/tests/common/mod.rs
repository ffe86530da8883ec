//! Shared helpers for skycast-ui integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use skycast_ui::view::{ChartSeries, CurrentWeatherView, ForecastView, MapOverlay, SuggestionView};
use skycast_ui::{AutocompleteSettings, InputController, Presenter};
use skycast_weather::{UnitPreference, WeatherClient, WindUnit};
use wiremock::MockServer;

/// Presenter that keeps every call for later inspection
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub suggestions: Vec<SuggestionView>,
    pub input_text: Vec<String>,
    pub currents: Vec<CurrentWeatherView>,
    pub forecasts: Vec<ForecastView>,
    pub charts: Vec<ChartSeries>,
    pub overlays: Vec<MapOverlay>,
    pub errors: Vec<String>,
    pub autocomplete_errors: Vec<String>,
    pub clears: usize,
}

impl RecordingPresenter {
    /// Labels of the list currently on screen, empty when closed
    pub fn visible_suggestions(&self) -> Vec<String> {
        self.suggestions
            .last()
            .map(|view| view.items.clone())
            .unwrap_or_default()
    }
}

impl Presenter for RecordingPresenter {
    fn show_suggestions(&mut self, view: &SuggestionView) {
        self.suggestions.push(view.clone());
    }

    fn set_input_text(&mut self, text: &str) {
        self.input_text.push(text.to_string());
    }

    fn set_loading(&mut self, _loading: bool) {}

    fn clear_results(&mut self) {
        self.clears += 1;
    }

    fn render_current(&mut self, view: &CurrentWeatherView) {
        self.currents.push(view.clone());
    }

    fn render_forecast(&mut self, view: &ForecastView) {
        self.forecasts.push(view.clone());
    }

    fn render_chart(&mut self, series: &ChartSeries) {
        self.charts.push(series.clone());
    }

    fn apply_map_overlay(&mut self, overlay: &MapOverlay) {
        self.overlays.push(overlay.clone());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_autocomplete_error(&mut self, message: &str) {
        self.autocomplete_errors.push(message.to_string());
    }
}

pub const TEST_DEBOUNCE: Duration = Duration::from_millis(20);

pub fn controller_for(server: &MockServer) -> InputController<RecordingPresenter> {
    controller_with(server, AutocompleteSettings {
        debounce: TEST_DEBOUNCE,
        ..Default::default()
    })
}

pub fn controller_with(
    server: &MockServer,
    settings: AutocompleteSettings,
) -> InputController<RecordingPresenter> {
    let client = WeatherClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    InputController::new(
        client,
        settings,
        UnitPreference::Metric,
        WindUnit::MetersPerSecond,
        RecordingPresenter::default(),
    )
}

/// Handle the next completion message, failing the test if none arrives.
pub async fn next_message(controller: &mut InputController<RecordingPresenter>) {
    tokio::time::timeout(Duration::from_secs(3), controller.process_next_message())
        .await
        .expect("timed out waiting for a completion message");
}

/// True if no completion message arrives within `window`.
pub async fn stays_quiet(controller: &mut InputController<RecordingPresenter>, window: Duration) -> bool {
    tokio::time::timeout(window, controller.process_next_message())
        .await
        .is_err()
}

pub fn weather_json(city: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "city": city,
        "description": "scattered clouds",
        "icon": "03d",
        "temp": temp,
        "feels_like": temp,
        "daily_low": temp - 3.0,
        "daily_high": temp + 3.0,
        "humidity": 60,
        "pressure": 1015,
        "wind_speed": 5.0
    })
}

pub fn forecast_json() -> serde_json::Value {
    serde_json::json!({
        "forecast": [
            { "day": "Monday", "description": "clouds", "min_temp": 10.0, "max_temp": 20.0 },
            { "day": "Tuesday", "description": "rain", "min_temp": 11.0, "max_temp": 18.0 },
            { "day": "Wednesday", "description": "sun", "min_temp": 12.0, "max_temp": 22.0 }
        ]
    })
}

pub fn paris_suggestions() -> serde_json::Value {
    serde_json::json!([
        { "display_name": "Paris, France", "lat": 48.85, "lon": 2.35 },
        { "display_name": "Paris, Texas", "lat": "33.66", "lon": "-95.55" }
    ])
}
