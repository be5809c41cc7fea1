//! HTTP controller endpoints for the secrets site.
//!
//! Axum handlers for the public pages, password and Google authentication, and the protected
//! secret pages. Controllers call into services, update the tower-sessions session and answer
//! with rendered HTML or a redirect.

pub mod auth;
pub mod home;
pub mod oauth;
pub mod secret;
pub mod util;
