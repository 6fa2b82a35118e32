use thiserror::Error;

use crate::types::PostType;

#[derive(Error, Debug)]
pub enum FacebookError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed Graph API response: {0}")]
    Structural(String),

    #[error("error deserializing {post_type} post: {source}")]
    VariantDecode {
        post_type: PostType,
        record: Box<serde_json::Value>,
        source: serde_json::Error,
    },

    #[error("no access token configured")]
    MissingAuthorization,

    #[error("invalid authorization: {0}")]
    InvalidAuthorization(String),

    #[error("expired authorization: {0}")]
    ExpiredAuthorization(String),

    #[error("revoked authorization: {0}")]
    RevokedAuthorization(String),

    #[error("insufficient permission: {0}")]
    InsufficientPermission(String),

    #[error("rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("app usage threshold reached")]
    UsageThresholdReached,

    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("duplicate post: {0}")]
    DuplicatePost(String),

    #[error("Graph API error {code}: {message}")]
    Api {
        code: i64,
        subcode: Option<i64>,
        message: String,
    },

    #[error("OAuth error: {0}")]
    OAuth(String),
}

pub type Result<T> = std::result::Result<T, FacebookError>;
