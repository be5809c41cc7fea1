//! Error types for the secrets server.
//!
//! Domain errors (authentication, configuration, Google login) live in their own submodules and
//! are aggregated into [`Error`]. Every error implements `IntoResponse`: authentication failures
//! become redirects back to the relevant form, everything else is logged and answered with a
//! generic 500 page.

pub mod auth;
pub mod config;
pub mod oauth;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{
    error::{auth::AuthError, config::ConfigError, oauth::OAuthError},
    view,
};

/// Main error type for the secrets server.
///
/// Library errors convert through `#[from]` so handlers and services can use `?` directly.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, credentials, registration).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Google login error (token exchange, profile lookup).
    #[error(transparent)]
    OAuthError(#[from] OAuthError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Password hashing failed or a stored hash could not be parsed.
    #[error("Password hash error: {0}")]
    PasswordHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// HTTP client error outside of a Google login (client construction).
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// IO error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 303 See Other - For authentication and Google login failures, back to the form they came from
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::OAuthError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged; the client only sees a generic error page.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(view::error::internal_error()),
        )
            .into_response()
    }
}
