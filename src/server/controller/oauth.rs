use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;

use crate::server::{
    controller::{auth::start_user_session, util::csrf::validate_csrf},
    error::{oauth::OAuthError, Error},
    model::{app::AppState, form::CallbackParams, session::auth::SessionAuthCsrf},
    service::auth::callback::CallbackService,
};

/// Login route to initiate login with Google
///
/// Stores a fresh CSRF state in the session and redirects the user to Google's consent page.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirect to Google to begin the login process
/// - 500 (Internal Server Error): The CSRF state could not be stored in the session
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = state.google.login_url();

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route Google redirects the user to after consent
///
/// Validates the CSRF state, exchanges the code for the user's Google profile and logs in the
/// local user linked to that account, creating it on first login.
///
/// # Responses
/// - 307 (Temporary Redirect): Successful login, redirect to `/secrets`
/// - 303 (See Other): State mismatch, consent denied or Google request failed, redirect to `/login`
/// - 500 (Internal Server Error): Database or session failure
pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, params.state.as_deref()).await?;

    if let Some(error) = params.error {
        return Err(OAuthError::AuthorizationDenied(error).into());
    }

    let Some(code) = params.code else {
        return Err(OAuthError::MissingCode.into());
    };

    let callback_service = CallbackService::new(&state.db, &state.google);
    let user_id = callback_service.handle_callback(&code).await?;

    start_user_session(&session, user_id).await?;

    Ok(Redirect::temporary("/secrets"))
}
