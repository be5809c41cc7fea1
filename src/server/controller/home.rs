use axum::response::{Html, IntoResponse};

use crate::server::view;

/// Landing page linking to registration and login
pub async fn home() -> impl IntoResponse {
    Html(view::home::home())
}
