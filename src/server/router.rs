//! HTTP routing configuration.
//!
//! Registers every page of the site on a single `Router<AppState>`. Static files and session
//! middleware are layered on by the caller so tests can build the same routes with their own
//! session store.

use axum::{routing::get, Router};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Landing page
/// - `GET, POST /login` - Password login form & submission
/// - `GET, POST /register` - Registration form & submission
/// - `GET /auth/google` - Begin Google login
/// - `GET /auth/google/secrets` - Google login callback
/// - `GET /secrets` - Every submitted secret (requires login)
/// - `GET, POST /submit` - Secret submission form & submission (requires login)
/// - `GET /logout` - Logout current user
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, google }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(controller::home::home))
        .route(
            "/login",
            get(controller::auth::login_page).post(controller::auth::login),
        )
        .route(
            "/register",
            get(controller::auth::register_page).post(controller::auth::register),
        )
        .route("/auth/google", get(controller::oauth::google_login))
        .route(
            "/auth/google/secrets",
            get(controller::oauth::google_callback),
        )
        .route("/secrets", get(controller::secret::secrets))
        .route(
            "/submit",
            get(controller::secret::submit_page).post(controller::secret::submit),
        )
        .route("/logout", get(controller::auth::logout))
}
