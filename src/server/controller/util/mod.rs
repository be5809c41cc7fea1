//! Utility functions for controller request handling.
//!
//! CSRF state validation for the Google login callback and user lookup for protected
//! endpoints.

pub mod csrf;
pub mod get_user;
