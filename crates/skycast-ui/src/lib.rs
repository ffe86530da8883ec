//! Event-driven controllers for Skycast: autocomplete, weather rendering and
//! the input loop tying them together.

pub mod app_services;
pub mod autocomplete;
pub mod debounce;
pub mod error_mapping;
pub mod input;
pub mod presenter;
pub mod render;
pub mod services;
pub mod terminal;
pub mod view;

pub use app_services::AppServices;
pub use autocomplete::{AutocompleteController, AutocompleteSettings, Key, KeyOutcome};
pub use debounce::Debouncer;
pub use input::{InputController, InputEvent};
pub use presenter::Presenter;
pub use render::RenderCoordinator;
pub use terminal::TerminalPresenter;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::presenter::Presenter;
    use crate::view::{
        ChartSeries, CurrentWeatherView, ForecastView, MapOverlay, SuggestionView,
    };

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Suggestions(SuggestionView),
        InputText(String),
        Loading(bool),
        Clear,
        Current(CurrentWeatherView),
        Forecast(ForecastView),
        Chart(ChartSeries),
        Overlay(MapOverlay),
        Map(Option<String>),
        UnitLabel(String),
        Error(String),
        AutocompleteError(String),
    }

    #[derive(Debug, Default)]
    pub struct RecordingPresenter {
        pub calls: Vec<Call>,
    }

    impl RecordingPresenter {
        pub fn last_current(&self) -> Option<&CurrentWeatherView> {
            self.calls.iter().rev().find_map(|c| match c {
                Call::Current(view) => Some(view),
                _ => None,
            })
        }

        pub fn errors(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Error(message) => Some(message.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Presenter for RecordingPresenter {
        fn show_suggestions(&mut self, view: &SuggestionView) {
            self.calls.push(Call::Suggestions(view.clone()));
        }
        fn set_input_text(&mut self, text: &str) {
            self.calls.push(Call::InputText(text.to_string()));
        }
        fn set_loading(&mut self, loading: bool) {
            self.calls.push(Call::Loading(loading));
        }
        fn clear_results(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn render_current(&mut self, view: &CurrentWeatherView) {
            self.calls.push(Call::Current(view.clone()));
        }
        fn render_forecast(&mut self, view: &ForecastView) {
            self.calls.push(Call::Forecast(view.clone()));
        }
        fn render_chart(&mut self, series: &ChartSeries) {
            self.calls.push(Call::Chart(series.clone()));
        }
        fn apply_map_overlay(&mut self, overlay: &MapOverlay) {
            self.calls.push(Call::Overlay(overlay.clone()));
        }
        fn show_map(&mut self, url: Option<&str>) {
            self.calls.push(Call::Map(url.map(str::to_string)));
        }
        fn set_unit_label(&mut self, temp_unit: &str) {
            self.calls.push(Call::UnitLabel(temp_unit.to_string()));
        }
        fn show_error(&mut self, message: &str) {
            self.calls.push(Call::Error(message.to_string()));
        }
        fn show_autocomplete_error(&mut self, message: &str) {
            self.calls.push(Call::AutocompleteError(message.to_string()));
        }
    }
}
