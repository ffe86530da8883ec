//! Weather backend: async place search and weather fetching.
//! All network work runs off the event loop; results are sent back over the
//! UI channel tagged with what they were requested for.

use skycast_weather::{
    LocationQuery, SuggestionList, WeatherBundle, WeatherClient, WeatherError,
};
use tokio::sync::mpsc::UnboundedSender;

/// Messages sent from timers and async operations back to the event loop
#[derive(Debug)]
pub enum UiMessage {
    /// The autocomplete quiet period elapsed for `query`
    DebounceElapsed { query: String },
    /// Place search finished for `query`
    SuggestionsLoaded {
        query: String,
        result: Result<SuggestionList, WeatherError>,
    },
    /// Joined weather + forecast fetch number `seq` finished
    WeatherLoaded {
        seq: u64,
        result: Result<WeatherBundle, WeatherError>,
    },
}

pub type UiSender = UnboundedSender<UiMessage>;

/// Search places for `query` and send `SuggestionsLoaded` when complete.
pub fn request_suggestions(tx: &UiSender, client: WeatherClient, query: String) {
    let tx = tx.clone();
    tokio::spawn(async move {
        tracing::debug!("Searching places for {:?}", query);
        let result = client.search_places(&query).await;
        if tx.send(UiMessage::SuggestionsLoaded { query, result }).is_err() {
            tracing::debug!("Event loop gone, dropping suggestions");
        }
    });
}

/// Fetch weather + forecast and send `WeatherLoaded` when both legs complete.
pub fn request_weather(tx: &UiSender, client: WeatherClient, query: LocationQuery, seq: u64) {
    let tx = tx.clone();
    tokio::spawn(async move {
        tracing::info!("Fetching weather for {} (request {})", query.label(), seq);
        let result = client.fetch_weather(&query).await;
        if tx.send(UiMessage::WeatherLoaded { seq, result }).is_err() {
            tracing::debug!("Event loop gone, dropping weather result");
        }
    });
}
