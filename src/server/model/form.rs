use serde::Deserialize;

/// Body of the login and registration forms.
#[derive(Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Body of the secret submission form.
#[derive(Deserialize)]
pub struct SecretForm {
    pub secret: String,
}

/// Query string Google appends when redirecting back after login.
///
/// On consent `code` is set; on refusal Google sends `error` (e.g. `access_denied`) instead.
/// Every field is optional so a malformed callback still reaches the handler and is answered
/// with a redirect to `/login`.
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
    pub error: Option<String>,
}
