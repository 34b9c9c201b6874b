use reqwest::StatusCode;
use thiserror::Error;

/// Failure to fetch or decode a page from the backend.
///
/// Every variant is treated the same way by the pagination controller: the
/// failure is logged and the list state is left untouched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The base address and endpoint path did not form a valid URL
    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, timeout, or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body was not the expected JSON shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The fetch task went away before reporting back
    #[error("fetch task ended before producing a result")]
    Interrupted,
}

impl FetchError {
    /// HTTP status for `Status` failures
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            body: "{\"detail\":\"Invalid page.\"}".to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Invalid page."));
    }

    #[test]
    fn test_decode_from_serde() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = FetchError::from(source);
        assert!(matches!(err, FetchError::Decode(_)));
        assert_eq!(err.status(), None);
    }
}
