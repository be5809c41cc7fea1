use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

/// Failures while completing a Google login.
///
/// None of these are the user's fault in a way we can explain to them, so every variant sends
/// the browser back to `/login` to try again.
#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("Google returned an error instead of an authorization code: {0}")]
    AuthorizationDenied(String),
    #[error("Google callback is missing the authorization code")]
    MissingCode,
    #[error("Failed to exchange authorization code with Google: {0}")]
    TokenExchange(String),
    #[error("Failed to fetch Google profile: {0}")]
    Profile(#[from] reqwest::Error),
}

impl IntoResponse for OAuthError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        Redirect::to("/login").into_response()
    }
}
