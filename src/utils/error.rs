use thiserror::Error;

/// Failures of a single upstream GET.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection refused, timeout, DNS, or the body could not be read
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned status {status}")]
    Status { status: u16 },

    /// Body did not match the expected shape
    #[error("Failed to decode upstream response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid upstream base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Failures surfaced by the user directory. The upstream cause stays attached as the source.
#[derive(Error, Debug)]
pub enum UserFetchError {
    #[error("Error fetching user {id}")]
    User {
        id: i64,
        #[source]
        source: UpstreamError,
    },

    #[error("Error fetching all users (page {page})")]
    AllUsers {
        page: i64,
        #[source]
        source: UpstreamError,
    },
}

impl UserFetchError {
    pub fn upstream(&self) -> &UpstreamError {
        match self {
            UserFetchError::User { source, .. } | UserFetchError::AllUsers { source, .. } => source,
        }
    }

    /// Status code reported by upstream, when the failure was a non-2xx answer.
    pub fn upstream_status(&self) -> Option<u16> {
        match self.upstream() {
            UpstreamError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
