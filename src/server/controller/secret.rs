use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use tower_sessions::Session;

use crate::server::{
    controller::util::get_user::get_user_from_session,
    error::{auth::AuthError, Error},
    model::{app::AppState, form::SecretForm},
    service::user::UserService,
    view,
};

/// Lists every submitted secret, anonymized
///
/// # Responses
/// - 200 (Success): Secrets page
/// - 303 (See Other): Not logged in, redirect to `/login`
/// - 500 (Internal Server Error): Database or session failure
pub async fn secrets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let secrets = UserService::new(&state.db).get_secrets().await?;

    Ok(Html(view::secret::secrets(&secrets)))
}

/// Form to submit a secret
///
/// # Responses
/// - 200 (Success): Submission page
/// - 303 (See Other): Not logged in, redirect to `/login`
pub async fn submit_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    Ok(Html(view::secret::submit()))
}

/// Stores the submitted secret on the logged in user, replacing any previous one
///
/// # Responses
/// - 303 (See Other): Secret stored, redirect to `/secrets`
/// - 303 (See Other): Not logged in, redirect to `/login`
/// - 500 (Internal Server Error): Database or session failure
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SecretForm>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user_service = UserService::new(&state.db);

    // The user may have been deleted between the lookup and the update
    if user_service
        .submit_secret(user.id, &form.secret)
        .await?
        .is_none()
    {
        session.clear().await;

        return Err(AuthError::UserNotInDatabase(user.id).into());
    }

    Ok(Redirect::to("/secrets"))
}
