//! Server application models and type definitions.
//!
//! This module contains the application state shared by every handler, database model type
//! aliases, the form and query payloads accepted by the route layer, and the typed wrappers
//! around session data.

pub mod app;
pub mod db;
pub mod form;
pub mod session;
