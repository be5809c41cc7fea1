//! Test configuration constants.
//!
//! Placeholder credentials and identities shared by all tests. None of these are real.

/// Mock Google OAuth2 client ID for testing.
pub static TEST_GOOGLE_CLIENT_ID: &str = "google_client_id";

/// Mock Google OAuth2 client secret for testing.
pub static TEST_GOOGLE_CLIENT_SECRET: &str = "google_client_secret";

/// Mock OAuth2 callback URL for testing.
pub static TEST_CALLBACK_URL: &str = "http://localhost:3000/auth/google/secrets";

/// Google account `sub` returned by the mock userinfo endpoint by default.
pub static TEST_GOOGLE_ID: &str = "109876543210987654321";

/// Access token returned by the mock token endpoint.
pub static TEST_ACCESS_TOKEN: &str = "mock_access_token";

/// Username used by password login tests.
pub static TEST_USERNAME: &str = "user@example.com";

/// Password used by password login tests.
pub static TEST_PASSWORD: &str = "correct horse battery staple";
