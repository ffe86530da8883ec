pub mod weather_service;

pub use weather_service::{request_suggestions, request_weather, UiMessage, UiSender};
