use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while reading the server configuration from the environment.
///
/// Configuration is loaded before the listener binds, so these normally end the process from
/// `main`; the response impl only lets them travel through [`Error`](super::Error).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `DATABASE_URL` is unset or empty
    #[error("{0} is not set; add it to the environment or to .env")]
    MissingEnvVar(&'static str),
    /// `LISTEN_ADDR` or `SQLX_LOGGING` could not be parsed
    #[error("{var} has an invalid value: {reason}")]
    InvalidEnvValue { var: &'static str, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
