//! Place autocomplete: debounced search, session cache, keyboard navigation
//! and the currently selected place.
//!
//! Every search is tagged with the query it was issued for. A result whose
//! query no longer matches the trimmed input still lands in the cache but
//! never replaces the list the user is looking at.

use std::time::Duration;

use skycast_weather::{
    LocationQuery, Place, SuggestionCache, SuggestionList, WeatherClient, WeatherError,
};

use crate::debounce::Debouncer;
use crate::error_mapping::suggestions_error;
use crate::presenter::Presenter;
use crate::services::{request_suggestions, UiMessage, UiSender};
use crate::view::SuggestionView;

pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";
pub const PICK_SUGGESTION_MESSAGE: &str = "Please select a location from the suggestions";

#[derive(Debug, Clone)]
pub struct AutocompleteSettings {
    pub debounce: Duration,
    pub min_query_len: usize,
    /// Weather is only fetched for places with coordinates
    pub require_resolved_place: bool,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
            require_resolved_place: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// What a key press means for the caller
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Not consumed by the suggestion list
    Ignored,
    /// Consumed; only the list changed
    Handled,
    /// A suggestion was committed and should be fetched
    Commit(Place),
    /// Enter was released for a direct submission of the input
    Submit,
}

pub struct AutocompleteController {
    settings: AutocompleteSettings,
    client: WeatherClient,
    tx: UiSender,
    input: String,
    list: Option<SuggestionList>,
    active: Option<usize>,
    selected: Option<Place>,
    cache: SuggestionCache,
    debouncer: Debouncer,
}

impl AutocompleteController {
    pub fn new(settings: AutocompleteSettings, client: WeatherClient, tx: UiSender) -> Self {
        let debouncer = Debouncer::new(settings.debounce);
        Self {
            settings,
            client,
            tx,
            input: String::new(),
            list: None,
            active: None,
            selected: None,
            cache: SuggestionCache::new(),
            debouncer,
        }
    }

    pub fn settings(&self) -> &AutocompleteSettings {
        &self.settings
    }

    /// Raw input text as last typed or mirrored
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The query the current input stands for
    pub fn current_query(&self) -> &str {
        self.input.trim()
    }

    pub fn is_open(&self) -> bool {
        self.list.is_some()
    }

    pub fn suggestions(&self) -> Option<&SuggestionList> {
        self.list.as_ref()
    }

    /// Highlighted row, `-1` when none
    pub fn active_index(&self) -> isize {
        self.active.map_or(-1, |i| i as isize)
    }

    pub fn selected(&self) -> Option<&Place> {
        self.selected.as_ref()
    }

    pub fn cache(&self) -> &SuggestionCache {
        &self.cache
    }

    pub fn is_debounce_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Handle a change of the input text.
    pub fn on_input(&mut self, text: &str, presenter: &mut dyn Presenter) {
        self.input = text.to_string();
        if self
            .selected
            .as_ref()
            .is_some_and(|place| place.label != self.input.trim())
        {
            tracing::debug!("Input edited, dropping selected place");
            self.selected = None;
        }

        self.debouncer.cancel();
        self.close(presenter);

        let query = self.current_query().to_string();
        if query.chars().count() < self.settings.min_query_len {
            return;
        }

        let tx = self.tx.clone();
        self.debouncer.schedule(async move {
            let _ = tx.send(UiMessage::DebounceElapsed { query });
        });
    }

    /// The quiet period for `query` elapsed.
    pub fn on_debounce_elapsed(&mut self, query: String, presenter: &mut dyn Presenter) {
        if query != self.current_query() {
            tracing::debug!("Debounce for {:?} superseded", query);
            return;
        }
        self.fetch_suggestions(query, presenter);
    }

    /// Show cached suggestions for `query`, or start a search for them.
    pub fn fetch_suggestions(&mut self, query: String, presenter: &mut dyn Presenter) {
        match self.cache.get(&query) {
            Some(list) => {
                tracing::debug!("Suggestion cache hit for {:?}", query);
                self.open(list, presenter);
            }
            None => request_suggestions(&self.tx, self.client.clone(), query),
        }
    }

    pub fn on_suggestions_loaded(
        &mut self,
        query: String,
        result: Result<SuggestionList, WeatherError>,
        presenter: &mut dyn Presenter,
    ) {
        let current = query == self.current_query();
        match result {
            Ok(list) => {
                let list = self.cache.insert(query.clone(), list);
                if current {
                    self.open(list, presenter);
                } else {
                    tracing::debug!("Cached stale suggestions for {:?}", query);
                }
            }
            Err(e) => {
                tracing::warn!("Place search for {:?} failed: {}", query, e);
                if current {
                    presenter.show_autocomplete_error(suggestions_error(e).user_message());
                }
            }
        }
    }

    pub fn on_key(&mut self, key: Key, presenter: &mut dyn Presenter) -> KeyOutcome {
        let len = self.list.as_ref().map_or(0, |list| list.len());

        match key {
            Key::ArrowDown if len > 0 => {
                self.active = Some(match self.active {
                    Some(i) => (i + 1) % len,
                    None => 0,
                });
                self.show(presenter);
                KeyOutcome::Handled
            }
            Key::ArrowUp if len > 0 => {
                self.active = Some(match self.active {
                    Some(0) | None => len - 1,
                    Some(i) => i - 1,
                });
                self.show(presenter);
                KeyOutcome::Handled
            }
            Key::Enter => match self.active {
                Some(index) => match self.commit(index, presenter) {
                    Some(place) => KeyOutcome::Commit(place),
                    None => KeyOutcome::Handled,
                },
                None => {
                    self.dismiss(presenter);
                    KeyOutcome::Submit
                }
            },
            Key::Escape if len > 0 => {
                self.close(presenter);
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Pointer selection of row `index`. Returns the committed place.
    pub fn click_suggestion(&mut self, index: usize, presenter: &mut dyn Presenter) -> Option<Place> {
        self.commit(index, presenter)
    }

    pub fn click_outside(&mut self, presenter: &mut dyn Presenter) {
        self.close(presenter);
    }

    /// Close the list and forget the highlighted row.
    pub fn close(&mut self, presenter: &mut dyn Presenter) {
        self.active = None;
        if self.list.take().is_some() {
            presenter.show_suggestions(&SuggestionView::closed());
        }
    }

    /// Close the list and drop any search still waiting for its quiet period.
    pub fn dismiss(&mut self, presenter: &mut dyn Presenter) {
        self.debouncer.cancel();
        self.close(presenter);
    }

    /// Decide what a weather request should be issued for.
    pub fn resolve_submission(&self) -> Result<LocationQuery, WeatherError> {
        let require_resolved = self.settings.require_resolved_place;

        if let Some(place) = &self.selected {
            if place.is_resolved() || !require_resolved {
                return Ok(place.to_query());
            }
            return Err(WeatherError::Validation(PICK_SUGGESTION_MESSAGE.to_string()));
        }

        let city = self.current_query();
        if city.is_empty() {
            return Err(WeatherError::Validation(EMPTY_CITY_MESSAGE.to_string()));
        }
        if require_resolved {
            return Err(WeatherError::Validation(PICK_SUGGESTION_MESSAGE.to_string()));
        }

        Ok(LocationQuery::City {
            city: city.to_string(),
        })
    }

    fn commit(&mut self, index: usize, presenter: &mut dyn Presenter) -> Option<Place> {
        let place = self.list.as_ref()?.get(index)?.clone();
        tracing::debug!("Selected place {:?}", place.label);

        self.debouncer.cancel();
        self.input = place.label.clone();
        self.selected = Some(place.clone());
        presenter.set_input_text(&place.label);
        self.close(presenter);
        Some(place)
    }

    fn open(&mut self, list: SuggestionList, presenter: &mut dyn Presenter) {
        self.active = None;
        if list.is_empty() {
            self.close(presenter);
            return;
        }
        self.list = Some(list);
        self.show(presenter);
    }

    fn show(&self, presenter: &mut dyn Presenter) {
        let view = SuggestionView {
            items: self
                .list
                .iter()
                .flat_map(|list| list.iter().map(|p| p.label.clone()))
                .collect(),
            active: self.active,
        };
        presenter.show_suggestions(&view);
    }
}

impl std::fmt::Debug for AutocompleteController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteController")
            .field("input", &self.input)
            .field("open", &self.list.as_ref().map(|l| l.len()))
            .field("active", &self.active)
            .field("selected", &self.selected)
            .field("cached_queries", &self.cache.len())
            .finish()
    }
}
