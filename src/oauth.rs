//! OAuth 2 authorization-code flow against the Facebook login dialog and
//! token endpoint.

use serde::Deserialize;

use crate::error::{FacebookError, Result};

const AUTHORIZE_URL: &str = "https://www.facebook.com/dialog/oauth";
const ACCESS_TOKEN_URL: &str = "https://graph.facebook.com/oauth/access_token";

/// A granted access token.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessGrant {
    pub access_token: String,
    /// Seconds until expiry; long-lived app tokens omit this.
    pub expires_in: Option<u64>,
}

/// Client for the OAuth 2 dance: build the login dialog URL, then exchange
/// the callback code for an access token.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    client: reqwest::Client,
    app_id: String,
    app_secret: String,
    access_token_url: String,
}

impl OAuthClient {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            access_token_url: ACCESS_TOKEN_URL.to_string(),
        }
    }

    /// Override the token endpoint, for tests.
    pub fn with_access_token_url(mut self, url: impl Into<String>) -> Self {
        self.access_token_url = url.into();
        self
    }

    /// The login dialog URL to send the user to.
    pub fn authorize_url(&self, redirect_uri: &str, scope: &[&str]) -> Result<String> {
        let mut url = url::Url::parse(AUTHORIZE_URL)
            .map_err(|err| FacebookError::OAuth(err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.app_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("response_type", "code");
        if !scope.is_empty() {
            url.query_pairs_mut()
                .append_pair("scope", &scope.join(","));
        }
        Ok(url.into())
    }

    /// Exchange an authorization code for an access grant.
    pub async fn exchange_for_access(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AccessGrant> {
        let form = [
            ("client_id", self.app_id.as_str()),
            ("client_secret", self.app_secret.as_str()),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ];
        let resp = self
            .client
            .post(&self.access_token_url)
            .form(&form)
            .send()
            .await?;
        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FacebookError::OAuth(body));
        }
        let body = resp.text().await?;
        parse_access_grant(&body)
    }
}

/// Older API versions answer the token endpoint with a form-encoded body
/// (`access_token=...&expires=...`) under a text/plain content type; newer
/// ones answer JSON with `expires_in`. Both shapes are accepted.
fn parse_access_grant(body: &str) -> Result<AccessGrant> {
    if let Ok(grant) = serde_json::from_str::<AccessGrant>(body) {
        return Ok(grant);
    }

    let mut access_token = None;
    let mut expires_in = None;
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "expires" | "expires_in" => expires_in = value.parse().ok(),
            _ => {}
        }
    }
    match access_token {
        Some(access_token) => Ok(AccessGrant {
            access_token,
            expires_in,
        }),
        None => Err(FacebookError::OAuth(format!(
            "token endpoint answer carries no access_token: {body}"
        ))),
    }
}
