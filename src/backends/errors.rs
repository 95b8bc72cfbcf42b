use thiserror::Error;

/// Why a category or search page could not be fetched.
///
/// Pages treat every variant alike and leave the row on its loading
/// placeholder; only the TMDB client's retry loop looks at the kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Missing or revoked `api_key` (TMDB status codes 3 and 7).
    #[error("Authentication failed: {message} (status: {status})")]
    Authentication { status: u16, message: String },

    /// TMDB request quota hit; `retry_after` is in seconds.
    #[error("Rate limited: {message} (retry after: {retry_after:?}s)")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
    },

    /// Upstream outage or maintenance.
    #[error("Server error: {message} (status: {status})")]
    ServerError { status: u16, message: String },

    /// Unknown endpoint or malformed query.
    #[error("Client error: {message} (status: {status})")]
    ClientError { status: u16, message: String },

    /// No HTTP response at all.
    #[error("Network error: {0}")]
    Network(String),

    /// A 200 whose body is not a paged result list.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Catalog error: {0}")]
    Other(String),
}

impl CatalogError {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CatalogError::Network(_)
                | CatalogError::ServerError { .. }
                | CatalogError::RateLimit { .. }
        )
    }

    pub fn retry_after(&self) -> Option<u64> {
        match self {
            CatalogError::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CatalogError::Network(format!("Request timeout: {}", error))
        } else if error.is_connect() {
            CatalogError::Network(format!("Connection failed: {}", error))
        } else if error.is_decode() {
            CatalogError::ParseError(error.to_string())
        } else if error.is_request() || error.is_body() {
            CatalogError::Network(format!("Request error: {}", error))
        } else {
            CatalogError::Other(error.to_string())
        }
    }

    pub fn from_status(status: u16, body: String, retry_after: Option<u64>) -> Self {
        match status {
            401 | 403 => CatalogError::Authentication {
                status,
                message: body,
            },
            429 => CatalogError::RateLimit {
                message: body,
                retry_after,
            },
            400..=499 => CatalogError::ClientError {
                status,
                message: body,
            },
            500..=599 => CatalogError::ServerError {
                status,
                message: body,
            },
            _ => CatalogError::Other(format!("HTTP {}: {}", status, body)),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        CatalogError::ParseError(error.to_string())
    }
}
