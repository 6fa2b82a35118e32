pub mod endpoints;

use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FacebookError, Result};

/// Percentage of the app's rate-limit budget at which requests start failing.
const USAGE_THRESHOLD_PERCENT: i64 = 80;

/// HTTP client wrapper for the Graph API.
#[derive(Debug, Clone)]
pub struct GraphHttpClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl GraphHttpClient {
    pub fn new(base_url: &str, access_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let envelope = self.get_value(path, query).await?;
        serde_json::from_value(envelope).map_err(FacebookError::Json)
    }

    /// GET a resource as raw JSON, for envelopes that need custom decoding.
    pub async fn get_value(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.access_token {
            request = request.header("Authorization", format!("OAuth {token}"));
        }
        let resp = request.send().await?;
        self.handle_response(resp).await
    }

    /// POST a form-encoded body, returning the raw JSON answer.
    pub async fn post_form(&self, path: &str, form: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).form(form);
        if let Some(token) = &self.access_token {
            request = request.header("Authorization", format!("OAuth {token}"));
        }
        let resp = request.send().await?;
        self.handle_response(resp).await
    }

    /// DELETE a resource.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.delete(&url);
        if let Some(token) = &self.access_token {
            request = request.header("Authorization", format!("OAuth {token}"));
        }
        let resp = request.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response(&self, resp: Response) -> Result<Value> {
        check_app_usage(resp.headers())?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(map_api_error(status, &body));
        }

        resp.json::<Value>().await.map_err(FacebookError::Request)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authorized(&self) -> bool {
        self.access_token.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    code: Option<i64>,
    error_subcode: Option<i64>,
}

/// Map a non-2xx Graph API answer to the error taxonomy.
///
/// An unparseable body falls back to the plain transport error so the caller
/// still sees the status and raw text.
fn map_api_error(status: u16, body: &str) -> FacebookError {
    let parsed: Option<ErrorEnvelope> = serde_json::from_str(body).ok();
    let Some(ErrorEnvelope {
        error:
            ApiErrorBody {
                message,
                code: Some(code),
                error_subcode,
            },
    }) = parsed
    else {
        return FacebookError::Http {
            status,
            message: body.to_string(),
        };
    };

    let message = message.unwrap_or_default();
    match code {
        4 | 17 | 613 => FacebookError::RateLimitExceeded(message),
        102 | 104 | 190 => match error_subcode {
            Some(463) => FacebookError::ExpiredAuthorization(message),
            Some(458 | 459 | 460 | 464 | 467) => FacebookError::RevokedAuthorization(message),
            _ => FacebookError::InvalidAuthorization(message),
        },
        10 | 200..=299 => FacebookError::InsufficientPermission(message),
        803 | 2500 => FacebookError::ResourceNotFound(message),
        506 => FacebookError::DuplicatePost(message),
        _ => FacebookError::Api {
            code,
            subcode: error_subcode,
            message,
        },
    }
}

#[derive(Debug, Deserialize)]
struct AppUsage {
    #[serde(default)]
    call_count: i64,
    #[serde(default)]
    total_time: i64,
    #[serde(default)]
    total_cputime: i64,
}

/// Inspect the `X-App-Usage` header and fail once any budget dimension hits
/// the threshold, before the app gets hard-blocked server side.
fn check_app_usage(headers: &HeaderMap) -> Result<()> {
    let Some(raw) = headers.get("x-app-usage") else {
        return Ok(());
    };
    let Ok(raw) = raw.to_str() else {
        tracing::debug!("unreadable x-app-usage header");
        return Ok(());
    };
    let usage: AppUsage = match serde_json::from_str(raw) {
        Ok(usage) => usage,
        Err(err) => {
            tracing::debug!(%err, "unparseable x-app-usage header: {raw}");
            return Ok(());
        }
    };
    if usage.call_count >= USAGE_THRESHOLD_PERCENT
        || usage.total_time >= USAGE_THRESHOLD_PERCENT
        || usage.total_cputime >= USAGE_THRESHOLD_PERCENT
    {
        tracing::warn!(
            call_count = usage.call_count,
            total_time = usage.total_time,
            total_cputime = usage.total_cputime,
            "app usage threshold reached"
        );
        return Err(FacebookError::UsageThresholdReached);
    }
    Ok(())
}
