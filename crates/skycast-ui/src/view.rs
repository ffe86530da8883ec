//! Fully converted view models handed to presentation collaborators.

use chrono::{DateTime, Local};
use skycast_weather::units::{self, UnitLabels};
use skycast_weather::{
    ForecastEntry, UnitPreference, WeatherBundle, WeatherCondition, WeatherSnapshot, WindUnit,
};

/// Placeholder for readings and times the service left out
pub const MISSING: &str = "--";

/// Open suggestion list as shown under the input. Empty means closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionView {
    pub items: Vec<String>,
    pub active: Option<usize>,
}

impl SuggestionView {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeatherView {
    pub city: String,
    pub description: String,
    pub icon: Option<String>,
    pub temperature: f64,
    pub feels_like: f64,
    pub daily_low: f64,
    pub daily_high: f64,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub sunrise: String,
    pub sunset: String,
    pub units: UnitLabels,
}

impl CurrentWeatherView {
    pub fn temperature_text(&self) -> String {
        format!("{:.1} {}", self.temperature, self.units.temp)
    }

    pub fn feels_like_text(&self) -> String {
        format!("{:.1} {}", self.feels_like, self.units.temp)
    }

    pub fn daily_range_text(&self) -> String {
        format!(
            "{:.1}–{:.1} {}",
            self.daily_low, self.daily_high, self.units.temp
        )
    }

    pub fn wind_text(&self) -> String {
        match self.wind_speed {
            Some(speed) => format!("{:.1} {}", speed, self.units.wind),
            None => MISSING.to_string(),
        }
    }

    pub fn humidity_text(&self) -> String {
        self.humidity
            .map_or_else(|| MISSING.to_string(), |h| format!("{}%", h))
    }

    pub fn pressure_text(&self) -> String {
        self.pressure
            .map_or_else(|| MISSING.to_string(), |p| format!("{} hPa", p))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDayView {
    pub day: String,
    pub date: Option<String>,
    pub description: String,
    pub icon: Option<String>,
    pub min_temp: f64,
    pub max_temp: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub days: Vec<ForecastDayView>,
    pub temp_unit: &'static str,
}

impl ForecastView {
    pub fn range_text(&self, day: &ForecastDayView) -> String {
        format!("{:.1}–{:.1} {}", day.min_temp, day.max_temp, self.temp_unit)
    }
}

/// Input for the chart collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub min_series: Vec<f64>,
    pub max_series: Vec<f64>,
    pub unit_label: &'static str,
}

/// Input for the map overlay effect collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct MapOverlay {
    pub description: String,
    pub icon_code: Option<String>,
    pub condition: WeatherCondition,
}

/// Everything one render pass produces
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherViewModel {
    pub current: CurrentWeatherView,
    pub forecast: ForecastView,
    pub chart: ChartSeries,
    pub overlay: MapOverlay,
    pub map_url: Option<String>,
}

impl WeatherViewModel {
    /// Convert stored metric data for display. Pure: same input, same output.
    pub fn build(bundle: &WeatherBundle, pref: UnitPreference, wind_source: WindUnit) -> Self {
        let labels = units::unit_labels(pref, wind_source);
        let current = current_view(&bundle.weather, pref, wind_source, labels);
        let days: Vec<ForecastDayView> = bundle
            .forecast
            .iter()
            .map(|entry| forecast_day(entry, pref))
            .collect();

        let chart = ChartSeries {
            labels: days.iter().map(|d| d.day.clone()).collect(),
            min_series: days.iter().map(|d| round1(d.min_temp)).collect(),
            max_series: days.iter().map(|d| round1(d.max_temp)).collect(),
            unit_label: labels.temp,
        };

        let overlay = MapOverlay {
            description: current.description.clone(),
            icon_code: bundle.weather.icon.clone(),
            condition: WeatherCondition::classify(
                bundle.weather.icon.as_deref(),
                &bundle.weather.description,
            ),
        };

        Self {
            current,
            forecast: ForecastView {
                days,
                temp_unit: labels.temp,
            },
            chart,
            overlay,
            map_url: bundle.weather.map_url.clone(),
        }
    }
}

fn current_view(
    w: &WeatherSnapshot,
    pref: UnitPreference,
    wind_source: WindUnit,
    labels: UnitLabels,
) -> CurrentWeatherView {
    CurrentWeatherView {
        city: w.city.clone(),
        description: clean_description(&w.description),
        icon: w.icon.clone(),
        temperature: units::to_display_temp(w.temp, pref),
        feels_like: units::to_display_temp(w.feels_like, pref),
        daily_low: units::to_display_temp(w.daily_low, pref),
        daily_high: units::to_display_temp(w.daily_high, pref),
        humidity: w.humidity,
        pressure: w.pressure,
        wind_speed: w
            .wind_speed
            .map(|speed| units::to_display_wind(speed, pref, wind_source)),
        sunrise: clock_time(w.sunrise),
        sunset: clock_time(w.sunset),
        units: labels,
    }
}

fn forecast_day(entry: &ForecastEntry, pref: UnitPreference) -> ForecastDayView {
    ForecastDayView {
        day: entry.day.clone(),
        date: entry.date.clone(),
        description: clean_description(&entry.description),
        icon: entry.icon.clone(),
        min_temp: units::to_display_temp(entry.min_temp, pref),
        max_temp: units::to_display_temp(entry.max_temp, pref),
    }
}

/// Keep word characters, whitespace, commas and periods; capitalize the first letter.
pub fn clean_description(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | ',' | '.'))
        .collect();

    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Local wall-clock `HH:MM` for an epoch timestamp
pub fn clock_time(epoch_secs: Option<i64>) -> String {
    epoch_secs
        .filter(|secs| *secs > 0)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    fn bundle(temp: f64) -> WeatherBundle {
        WeatherBundle {
            weather: WeatherSnapshot {
                city: "Lyon".to_string(),
                description: "light rain!!".to_string(),
                icon: Some("10d".to_string()),
                temp,
                feels_like: temp - 2.0,
                daily_low: temp - 5.0,
                daily_high: temp + 5.0,
                humidity: Some(80.0),
                pressure: Some(1012.0),
                wind_speed: Some(5.0),
                sunrise: None,
                sunset: Some(1_700_000_000),
                map_url: Some("https://maps.example/lyon.png".to_string()),
            },
            forecast: vec![
                ForecastEntry {
                    day: "Friday".to_string(),
                    date: Some("2026-10-16".to_string()),
                    description: "rain".to_string(),
                    icon: Some("rain".to_string()),
                    min_temp: 10.04,
                    max_temp: 15.0,
                },
                ForecastEntry {
                    day: "Saturday".to_string(),
                    date: None,
                    description: "clear".to_string(),
                    icon: None,
                    min_temp: 0.0,
                    max_temp: 20.0,
                },
            ],
        }
    }

    #[test]
    fn test_metric_view_keeps_source_values() {
        let vm = WeatherViewModel::build(&bundle(20.0), UnitPreference::Metric, WindUnit::MetersPerSecond);

        assert_eq!(vm.current.temperature, 20.0);
        assert_eq!(vm.current.temperature_text(), "20.0 °C");
        assert_eq!(vm.current.wind_text(), "5.0 m/s");
        assert_eq!(vm.current.humidity_text(), "80%");
        assert_eq!(vm.current.pressure_text(), "1012 hPa");
        assert_eq!(vm.forecast.range_text(&vm.forecast.days[1]), "0.0–20.0 °C");
    }

    #[test]
    fn test_imperial_view_converts_every_field() {
        let vm = WeatherViewModel::build(&bundle(20.0), UnitPreference::Imperial, WindUnit::MetersPerSecond);

        assert!((vm.current.temperature - 68.0).abs() < 0.05);
        assert_eq!(vm.current.temperature_text(), "68.0 °F");
        assert_eq!(vm.current.feels_like_text(), "64.4 °F");
        assert_eq!(vm.current.daily_range_text(), "59.0–77.0 °F");
        assert_eq!(vm.current.wind_text(), "11.2 mph");
        assert_eq!(vm.forecast.range_text(&vm.forecast.days[1]), "32.0–68.0 °F");
        assert_eq!(vm.chart.unit_label, "°F");
    }

    #[test]
    fn test_chart_series_follow_forecast_order() {
        let vm = WeatherViewModel::build(&bundle(20.0), UnitPreference::Metric, WindUnit::MetersPerSecond);

        assert_eq!(vm.chart.labels, ["Friday", "Saturday"]);
        assert_eq!(vm.chart.min_series, [10.0, 0.0]);
        assert_eq!(vm.chart.max_series, [15.0, 20.0]);
    }

    #[test]
    fn test_overlay_and_map() {
        let vm = WeatherViewModel::build(&bundle(20.0), UnitPreference::Metric, WindUnit::MetersPerSecond);

        assert_eq!(vm.overlay.condition, WeatherCondition::Rain);
        assert_eq!(vm.overlay.icon_code.as_deref(), Some("10d"));
        assert_eq!(vm.overlay.description, "Light rain");
        assert_eq!(vm.map_url.as_deref(), Some("https://maps.example/lyon.png"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let data = bundle(13.3);
        let a = WeatherViewModel::build(&data, UnitPreference::Imperial, WindUnit::KilometersPerHour);
        let b = WeatherViewModel::build(&data, UnitPreference::Imperial, WindUnit::KilometersPerHour);
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_readings_render_placeholder() {
        let mut data = bundle(20.0);
        data.weather.humidity = None;
        data.weather.pressure = None;
        data.weather.wind_speed = None;

        let vm = WeatherViewModel::build(&data, UnitPreference::Imperial, WindUnit::MetersPerSecond);

        assert_eq!(vm.current.humidity_text(), "--");
        assert_eq!(vm.current.pressure_text(), "--");
        assert_eq!(vm.current.wind_text(), "--");
        assert_eq!(vm.current.temperature_text(), "68.0 °F");
    }

    #[test]
    fn test_clean_description() {
        assert_eq!(clean_description("light rain!!"), "Light rain");
        assert_eq!(clean_description("Rain, Partially cloudy."), "Rain, Partially cloudy.");
        assert_eq!(clean_description("☁ overcast"), " overcast");
        assert_eq!(clean_description(""), "");
    }

    #[test]
    fn test_missing_times_show_placeholder() {
        assert_eq!(clock_time(None), "--");
        assert_eq!(clock_time(Some(0)), "--");
        assert_eq!(clock_time(Some(-60)), "--");
        let formatted = clock_time(Some(1_700_000_000));
        assert_eq!(formatted.len(), 5);
        assert_eq!(&formatted[2..3], ":");
    }
}
