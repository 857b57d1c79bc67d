use thiserror::Error;

/// Failure of a single backend call.
///
/// Every variant counts as a network failure for the section that issued the
/// call. Parse failures of the free-text payloads never show up here: the
/// parsers degrade to placeholder output instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("{endpoint} reported an error: {message}")]
    Backend {
        endpoint: &'static str,
        message: String,
    },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Status code of the failed call, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Human readable reason suitable for display next to a failed section.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Http(e) if e.status().is_none() => {
                "Could not reach the analysis service. Please check your connection."
            }
            ApiError::Backend { .. } | ApiError::Decode(_) => {
                "The analysis service returned an unexpected response. Please try again."
            }
            _ => status_message(self.status().unwrap_or(500)),
        }
    }
}

fn status_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid request. Please check your input.",
        401 => "Authentication failed. Please try again.",
        403 => "Access forbidden. The service may be temporarily unavailable.",
        404 => "Service not found. Please try again later.",
        429 => "Too many requests. Please wait a moment and try again.",
        500 => "Server error. Please try again later.",
        502 => "Service temporarily unavailable. Please try again later.",
        503 => "Service maintenance in progress. Please try again later.",
        _ => "An unexpected error occurred. Please try again.",
    }
}

/// Crate-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}
