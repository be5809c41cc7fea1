use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Validate that the session CSRF state exists and matches `csrf_state`.
///
/// The stored state is removed whether or not it matches, so each state is usable once. A
/// callback without a `state` parameter fails with `CsrfMissingValue`.
pub async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::remove(session).await?;

    let Some(csrf_state) = csrf_state else {
        return Err(Error::AuthError(AuthError::CsrfMissingValue));
    };

    if stored_state != csrf_state {
        return Err(Error::AuthError(AuthError::CsrfValidationFailed));
    }

    Ok(())
}
