//! Server application core modules.
//!
//! This module contains all server-side functionality for the secrets site: HTTP routing and
//! rendering, password and Google authentication, session management and database access.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod google;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;
