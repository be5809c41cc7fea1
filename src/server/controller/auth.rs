use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use tower_sessions::Session;

use crate::server::{
    error::Error,
    model::{app::AppState, form::CredentialsForm, session::user::SessionUserId},
    service::auth::credential::CredentialService,
    view,
};

pub async fn login_page() -> impl IntoResponse {
    Html(view::auth::login())
}

pub async fn register_page() -> impl IntoResponse {
    Html(view::auth::register())
}

/// Registers a password user and logs them in
///
/// # Responses
/// - 303 (See Other): Registered, redirect to `/secrets`
/// - 303 (See Other): Username already taken, redirect back to `/register`
/// - 500 (Internal Server Error): Database, hashing or session failure
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<impl IntoResponse, Error> {
    let credential_service = CredentialService::new(&state.db);

    let user_id = credential_service
        .register(&form.username, &form.password)
        .await?;

    start_user_session(&session, user_id).await?;

    Ok(Redirect::to("/secrets"))
}

/// Logs a password user in
///
/// # Responses
/// - 303 (See Other): Credentials matched, redirect to `/secrets`
/// - 303 (See Other): Unknown username or wrong password, redirect back to `/login`
/// - 500 (Internal Server Error): Database or session failure
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<impl IntoResponse, Error> {
    let credential_service = CredentialService::new(&state.db);

    let Some(user_id) = credential_service
        .authenticate(&form.username, &form.password)
        .await?
    else {
        tracing::debug!("Rejected login with invalid credentials");

        return Ok(Redirect::to("/login"));
    };

    start_user_session(&session, user_id).await?;

    Ok(Redirect::to("/secrets"))
}

/// Logs the user out by deleting their session from the store
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out (or was never logged in), redirect to `/`
/// - 500 (Internal Server Error): There was an issue reading the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Flushing a session that was never saved fails against the store
    if maybe_user_id.is_some() {
        session.flush().await?;
    }

    Ok(Redirect::temporary("/"))
}

/// Stores the user in a session with a fresh ID so a pre-login session ID can't be reused
pub(crate) async fn start_user_session(session: &Session, user_id: i32) -> Result<(), Error> {
    session.cycle_id().await?;

    SessionUserId::insert(session, user_id).await?;

    Ok(())
}
