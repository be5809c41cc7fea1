//! Shared helpers for the server's unit tests.
