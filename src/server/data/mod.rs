//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries behind small, connection-generic structs so services can
//! run them against a pooled connection or a transaction alike.

pub mod user;
