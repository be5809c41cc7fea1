//! Google sign-in client.
//!
//! Wraps an `oauth2` client configured for Google's authorization code flow together with the
//! HTTP client used for the token exchange and the userinfo lookup. Endpoint URLs come from
//! [`GoogleConfig`] so tests can point them at a mock server.

use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::server::error::{config::ConfigError, oauth::OAuthError, Error};

pub static GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub static GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub static GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// Scopes requested at login, enough to receive the account's stable `sub` id.
pub static GOOGLE_SCOPES: [&str; 3] = ["openid", "profile", "email"];

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone, Debug)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

/// Login URL to redirect the user to, and the CSRF state that Google will echo back.
#[derive(Debug)]
pub struct AuthenticationData {
    pub login_url: String,
    pub state: String,
}

/// Subset of the Google userinfo response.
#[derive(Clone, Debug, Deserialize)]
pub struct GoogleProfile {
    /// Provider-assigned account id, stable across logins.
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone)]
pub struct GoogleClient {
    oauth: ConfiguredClient,
    http: reqwest::Client,
    userinfo_url: String,
}

impl GoogleClient {
    /// Builds the client, validating every configured URL.
    ///
    /// # Returns
    /// - `Ok(GoogleClient)` - Client ready to build login URLs and exchange codes
    /// - `Err(Error::ConfigError)` - One of the endpoint or callback URLs is not a valid URL
    /// - `Err(Error::HttpClientError)` - The HTTP client could not be initialized
    pub fn new(config: &GoogleConfig) -> Result<Self, Error> {
        let auth_url = AuthUrl::new(config.auth_url.clone())
            .map_err(|e| invalid_url("GOOGLE_AUTH_URL", e))?;
        let token_url = TokenUrl::new(config.token_url.clone())
            .map_err(|e| invalid_url("GOOGLE_TOKEN_URL", e))?;
        let redirect_url = RedirectUrl::new(config.callback_url.clone())
            .map_err(|e| invalid_url("GOOGLE_CALLBACK_URL", e))?;

        let oauth = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url);

        // The token endpoint must not be followed through redirects
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            oauth,
            http,
            userinfo_url: config.userinfo_url.clone(),
        })
    }

    /// Creates the Google authorization URL along with a fresh random CSRF state.
    pub fn login_url(&self) -> AuthenticationData {
        let (url, state) = GOOGLE_SCOPES
            .iter()
            .fold(
                self.oauth.authorize_url(CsrfToken::new_random),
                |request, scope| request.add_scope(Scope::new(scope.to_string())),
            )
            .url();

        AuthenticationData {
            login_url: url.to_string(),
            state: state.secret().clone(),
        }
    }

    /// Exchanges an authorization code for an access token and fetches the user's profile.
    ///
    /// # Returns
    /// - `Ok(GoogleProfile)` - Profile of the account that granted the code
    /// - `Err(OAuthError::TokenExchange)` - Google rejected the code or the token response was malformed
    /// - `Err(OAuthError::Profile)` - The userinfo request failed or returned an unexpected body
    pub async fn get_profile(&self, code: &str) -> Result<GoogleProfile, OAuthError> {
        let token = self
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| OAuthError::TokenExchange(e.to_string()))?;

        let profile = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleProfile>()
            .await?;

        Ok(profile)
    }
}

fn invalid_url(var: &str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: err.to_string(),
    }
}
