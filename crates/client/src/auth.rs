//! Basic-auth credentials applied to harness requests.

use harness_config::Profile;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Username/password pair sent as HTTP Basic authentication.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Derive credentials from a profile.
    ///
    /// Returns `None` when the profile has no username or an empty one, so
    /// anonymous profiles send no `Authorization` header at all. A missing
    /// password on an authenticated profile is sent as empty; `Profile::validate`
    /// rejects that case before the harness is used.
    pub fn from_profile(profile: &Profile) -> Option<Self> {
        let username = profile.username()?;
        let password = profile
            .password
            .clone()
            .unwrap_or_else(|| SecretString::new(String::new().into()));
        Some(Self::new(username, password))
    }

    /// The username sent with each request.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Apply these credentials to a request, unconditionally.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}
