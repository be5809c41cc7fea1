use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state missing from session")]
    CsrfMissingValue,
    #[error("Username {0:?} is already registered")]
    UsernameTaken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Redirect::to("/login").into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Redirect::to("/login").into_response()
            }
            Self::CsrfValidationFailed | Self::CsrfMissingValue => {
                tracing::debug!("{}", self);

                Redirect::to("/login").into_response()
            }
            Self::UsernameTaken(_) => {
                tracing::debug!("{}", self);

                Redirect::to("/register").into_response()
            }
        }
    }
}
