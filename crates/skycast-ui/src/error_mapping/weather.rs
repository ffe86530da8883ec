use skycast_core::error::ReqwestErrorExt;
use skycast_core::{AppError, NetworkError, WeatherError};
use skycast_weather::WeatherError as ClientError;

/// Conversion of client errors into the application error hierarchy
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}

impl IntoAppError for ClientError {
    fn into_app_error(self) -> AppError {
        match self {
            ClientError::Validation(s) => AppError::Weather(WeatherError::InvalidInput(s)),
            ClientError::Http { status: 404, message } => {
                AppError::Weather(WeatherError::LocationNotFound(message))
            }
            ClientError::Http { status: 503, message } => {
                AppError::Weather(WeatherError::ServiceUnavailable(message))
            }
            ClientError::Http { status, message } => {
                AppError::Network(NetworkError::ServerError { status, message })
            }
            ClientError::Service(s) => AppError::Weather(WeatherError::ApiError(s)),
            ClientError::Network(e) => AppError::Network(e.into_network_error()),
            ClientError::Parse(s) => AppError::Network(NetworkError::InvalidResponse(s)),
        }
    }
}

/// Place search failures are never fatal; they all read the same to the user.
pub fn suggestions_error(e: ClientError) -> AppError {
    AppError::Weather(WeatherError::SuggestionsUnavailable(e.to_string()))
}
