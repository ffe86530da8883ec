//! Plain-text presenter for the terminal front end.

use std::io::Write;

use crate::presenter::Presenter;
use crate::view::{ChartSeries, CurrentWeatherView, ForecastView, MapOverlay, SuggestionView};

/// Writes every visible change as lines of text
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl TerminalPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl AsRef<str>) {
        if let Err(e) = writeln!(self.out, "{}", text.as_ref()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_suggestions(&mut self, view: &SuggestionView) {
        if !view.is_open() {
            return;
        }
        self.line("Suggestions:");
        for (i, label) in view.items.iter().enumerate() {
            let marker = if view.active == Some(i) { '>' } else { ' ' };
            self.line(format!(" {} {}. {}", marker, i + 1, label));
        }
    }

    fn set_input_text(&mut self, text: &str) {
        self.line(format!("Location: {}", text));
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.line("Loading...");
        }
    }

    fn clear_results(&mut self) {}

    fn render_current(&mut self, view: &CurrentWeatherView) {
        self.line(format!("== {} ==", view.city));
        self.line(format!("{}  {}", view.temperature_text(), view.description));
        self.line(format!("Feels like {}", view.feels_like_text()));
        self.line(format!("Low/high   {}", view.daily_range_text()));
        self.line(format!("Humidity   {}", view.humidity_text()));
        self.line(format!("Pressure   {}", view.pressure_text()));
        self.line(format!("Wind       {}", view.wind_text()));
        self.line(format!("Sunrise {}  Sunset {}", view.sunrise, view.sunset));
    }

    fn render_forecast(&mut self, view: &ForecastView) {
        for day in &view.days {
            let range = view.range_text(day);
            self.line(format!("{:<10} {:<16} {}", day.day, range, day.description));
        }
    }

    fn render_chart(&mut self, series: &ChartSeries) {
        tracing::debug!(
            "Chart: {} days in {}",
            series.labels.len(),
            series.unit_label
        );
    }

    fn apply_map_overlay(&mut self, overlay: &MapOverlay) {
        tracing::debug!("Map overlay: {}", overlay.condition.description());
    }

    fn show_map(&mut self, url: Option<&str>) {
        if let Some(url) = url {
            self.line(format!("Map: {}", url));
        }
    }

    fn show_error(&mut self, message: &str) {
        self.line(format!("Error: {}", message));
    }

    fn show_autocomplete_error(&mut self, message: &str) {
        self.line(message);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    fn output(p: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(p.into_inner()).unwrap()
    }

    #[test]
    fn test_suggestions_mark_active_row() {
        let mut p = TerminalPresenter::new(Vec::new());
        p.show_suggestions(&SuggestionView {
            items: vec!["Kyiv, Ukraine".to_string(), "Kyoto, Japan".to_string()],
            active: Some(1),
        });
        let text = output(p);
        assert!(text.contains("   1. Kyiv, Ukraine"));
        assert!(text.contains(" > 2. Kyoto, Japan"));
    }

    #[test]
    fn test_closed_list_prints_nothing() {
        let mut p = TerminalPresenter::new(Vec::new());
        p.show_suggestions(&SuggestionView::closed());
        assert!(output(p).is_empty());
    }

    #[test]
    fn test_error_line() {
        let mut p = TerminalPresenter::new(Vec::new());
        p.show_error("Please enter a city name");
        assert_eq!(output(p), "Error: Please enter a city name\n");
    }
}
