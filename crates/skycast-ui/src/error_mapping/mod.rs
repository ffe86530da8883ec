//! Maps UI-side errors to skycast_core::AppError for consistent user-facing messages.

mod weather;

pub use weather::{suggestions_error, IntoAppError};
