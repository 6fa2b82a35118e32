/// Default Graph API base URL.
pub const GRAPH_API_URL: &str = "https://graph.facebook.com";

/// Configuration for the Facebook client.
#[derive(Debug, Clone)]
pub struct FacebookConfig {
    /// Base URL for the Graph API (e.g. `https://graph.facebook.com`).
    pub graph_api_url: String,
    /// OAuth access token. Without one the client can be constructed but
    /// every user-scoped operation fails with a missing-authorization error.
    pub access_token: Option<String>,
}

impl Default for FacebookConfig {
    fn default() -> Self {
        Self {
            graph_api_url: GRAPH_API_URL.to_string(),
            access_token: None,
        }
    }
}

impl FacebookConfig {
    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::default()
        }
    }
}
