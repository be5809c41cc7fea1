//! Google OAuth2 HTTP mock endpoint creation utilities.
//!
//! Mocks the two calls made after Google redirects back with an authorization code:
//! the token exchange and the userinfo lookup.

use mockito::Mock;
use serde_json::json;

use crate::{constant::TEST_ACCESS_TOKEN, TestContext};

impl TestContext {
    pub fn google(&mut self) -> GoogleFixtures<'_> {
        GoogleFixtures { setup: self }
    }
}

pub struct GoogleFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> GoogleFixtures<'a> {
    /// Create a mock `POST /token` returning a bearer access token.
    pub fn create_token_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = json!({
            "access_token": TEST_ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3599,
            "scope": "openid profile email"
        });

        self.setup
            .server
            .mock("POST", "/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /token` rejecting the authorization code.
    pub fn create_token_error_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = json!({
            "error": "invalid_grant",
            "error_description": "Bad Request"
        });

        self.setup
            .server
            .mock("POST", "/token")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /userinfo` returning a profile for `google_id`.
    ///
    /// Only matches requests carrying the access token from [`Self::create_token_endpoint`].
    pub fn create_userinfo_endpoint(&mut self, google_id: &str, expected_requests: usize) -> Mock {
        let body = json!({
            "sub": google_id,
            "name": "Test User",
            "email": "test.user@gmail.com",
            "email_verified": true
        });

        self.setup
            .server
            .mock("GET", "/userinfo")
            .match_header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create both endpoints needed for one successful Google login.
    pub fn create_login_endpoints(&mut self, google_id: &str, expected_logins: usize) -> Vec<Mock> {
        vec![
            self.create_token_endpoint(expected_logins),
            self.create_userinfo_endpoint(google_id, expected_logins),
        ]
    }
}
