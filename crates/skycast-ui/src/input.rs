//! Top-level event wiring.
//!
//! The controller runs on a single task: input events and completion
//! messages are handled one at a time, each to completion, so none of the
//! session state needs locking. Network work happens on spawned tasks that
//! report back over the message channel.

use skycast_weather::{Place, UnitPreference, WeatherClient, WindUnit};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::autocomplete::{AutocompleteController, AutocompleteSettings, Key, KeyOutcome};
use crate::presenter::Presenter;
use crate::render::RenderCoordinator;
use crate::services::{request_weather, UiMessage, UiSender};

/// Keyboard and pointer input from the front end
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The input field now holds this text
    Text(String),
    Key(Key),
    ClickSuggestion(usize),
    ClickOutside,
    /// Search button
    Submit,
    ToggleUnits(UnitPreference),
}

pub struct InputController<P: Presenter> {
    autocomplete: AutocompleteController,
    render: RenderCoordinator,
    presenter: P,
    client: WeatherClient,
    tx: UiSender,
    rx: UnboundedReceiver<UiMessage>,
    weather_seq: u64,
}

impl<P: Presenter> InputController<P> {
    pub fn new(
        client: WeatherClient,
        settings: AutocompleteSettings,
        units: UnitPreference,
        wind_source: WindUnit,
        presenter: P,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            autocomplete: AutocompleteController::new(settings, client.clone(), tx.clone()),
            render: RenderCoordinator::new(units, wind_source),
            presenter,
            client,
            tx,
            rx,
            weather_seq: 0,
        }
    }

    pub fn autocomplete(&self) -> &AutocompleteController {
        &self.autocomplete
    }

    pub fn render(&self) -> &RenderCoordinator {
        &self.render
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Text(text) => self.autocomplete.on_input(&text, &mut self.presenter),
            InputEvent::Key(key) => match self.autocomplete.on_key(key, &mut self.presenter) {
                KeyOutcome::Commit(place) => self.commit(place),
                KeyOutcome::Submit => self.submit(),
                KeyOutcome::Handled | KeyOutcome::Ignored => {}
            },
            InputEvent::ClickSuggestion(index) => {
                if let Some(place) = self.autocomplete.click_suggestion(index, &mut self.presenter) {
                    self.commit(place);
                }
            }
            InputEvent::ClickOutside => self.autocomplete.click_outside(&mut self.presenter),
            InputEvent::Submit => {
                self.autocomplete.dismiss(&mut self.presenter);
                self.submit();
            }
            InputEvent::ToggleUnits(units) => {
                self.render.on_unit_preference_changed(units, &mut self.presenter)
            }
        }
    }

    pub fn handle_message(&mut self, message: UiMessage) {
        match message {
            UiMessage::DebounceElapsed { query } => {
                self.autocomplete.on_debounce_elapsed(query, &mut self.presenter)
            }
            UiMessage::SuggestionsLoaded { query, result } => {
                self.autocomplete
                    .on_suggestions_loaded(query, result, &mut self.presenter)
            }
            UiMessage::WeatherLoaded { seq, result } => {
                if seq != self.weather_seq {
                    tracing::debug!("Discarding weather result {} (current {})", seq, self.weather_seq);
                    return;
                }
                match result {
                    Ok(bundle) => self.render.on_weather_loaded(bundle, &mut self.presenter),
                    Err(e) => self.render.on_fetch_failed(e, &mut self.presenter),
                }
            }
        }
    }

    /// Wait for the next completion message and handle it.
    pub async fn process_next_message(&mut self) {
        // The controller holds a sender, so the channel never closes.
        if let Some(message) = self.rx.recv().await {
            self.handle_message(message);
        }
    }

    /// Event loop. Returns the presenter once the event source closes.
    pub async fn run(mut self, mut events: mpsc::Receiver<InputEvent>) -> P {
        tracing::info!("Event loop started");
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
                Some(message) = self.rx.recv() => self.handle_message(message),
            }
        }
        tracing::info!("Event loop stopped");
        self.presenter
    }

    fn commit(&mut self, place: Place) {
        tracing::info!("Place committed: {}", place.label);
        self.submit();
    }

    fn submit(&mut self) {
        self.weather_seq += 1;
        match self.autocomplete.resolve_submission() {
            Ok(query) => {
                self.render.on_fetch_started(&mut self.presenter);
                request_weather(&self.tx, self.client.clone(), query, self.weather_seq);
            }
            Err(e) => self.render.on_fetch_failed(e, &mut self.presenter),
        }
    }
}
