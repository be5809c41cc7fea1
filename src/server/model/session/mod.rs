//! Session data models and utilities.
//!
//! Typed wrappers for the values the application keeps in a tower-sessions session: the
//! authenticated user's ID and the CSRF state of an in-flight Google login. Each wrapper owns
//! its session key and exposes insert/get/remove helpers.

pub mod auth;
pub mod user;
