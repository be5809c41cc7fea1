//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a test session and application state, and their
//! responses checked for status, redirect target and session changes.


use secrets_test_utils::prelude::*;

use crate::util::TestContextExt;
