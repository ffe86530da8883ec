//! Presentation collaborator seam.
//!
//! Controllers never draw anything themselves. Every visible change goes
//! through a [`Presenter`], which receives fully converted view models.

use crate::view::{
    ChartSeries, CurrentWeatherView, ForecastView, MapOverlay, SuggestionView,
};

pub trait Presenter {
    /// Replace the suggestion list. A closed view hides it.
    fn show_suggestions(&mut self, view: &SuggestionView);

    /// Mirror text into the input field
    fn set_input_text(&mut self, text: &str);

    fn set_loading(&mut self, loading: bool);

    /// Remove every rendered result and any error message
    fn clear_results(&mut self);

    fn render_current(&mut self, view: &CurrentWeatherView);

    fn render_forecast(&mut self, view: &ForecastView);

    fn render_chart(&mut self, _series: &ChartSeries) {}

    fn apply_map_overlay(&mut self, _overlay: &MapOverlay) {}

    fn show_map(&mut self, _url: Option<&str>) {}

    /// Current unit suffix, e.g. for the toggle label
    fn set_unit_label(&mut self, _temp_unit: &str) {}

    /// Fatal error for the current weather fetch
    fn show_error(&mut self, message: &str);

    /// Non-fatal autocomplete problem; typing stays possible
    fn show_autocomplete_error(&mut self, message: &str) {
        tracing::debug!("Autocomplete error not shown: {}", message);
    }
}
