use thiserror::Error;

/// Errors that can occur while asking the text generation API for a reply
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The HTTP request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The API answered with an error object
    #[error("API error ({code} {status}): {message}")]
    ApiError {
        code: i64,
        status: String,
        message: String,
        /// `reason` values from the error's `details` entries (e.g. "API_KEY_INVALID")
        reasons: Vec<String>,
    },

    /// The API answered with something that is not a generateContent response
    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Whether the failure was caused by a missing, invalid or unauthorized API key
    pub fn is_auth_failure(&self) -> bool {
        const AUTH_MARKERS: [&str; 3] = ["API_KEY_INVALID", "API_KEY_MISSING", "PERMISSION_DENIED"];

        match self {
            GenerationError::ApiError {
                status,
                message,
                reasons,
                ..
            } => AUTH_MARKERS.iter().any(|marker| {
                status == marker
                    || message.contains(marker)
                    || reasons.iter().any(|reason| reason == marker)
            }),
            _ => false,
        }
    }
}

/// Errors that abort startup
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// No API key in the configuration or the environment
    #[error("GOOGLE_API_KEY not found in config or environment")]
    MissingApiKey,

    /// A recipe or substitution data file could not be parsed
    #[error("Failed to load {name}: {source}")]
    DataError {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem or socket error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_from_status() {
        let err = GenerationError::ApiError {
            code: 403,
            status: "PERMISSION_DENIED".to_string(),
            message: "The caller does not have permission".to_string(),
            reasons: Vec::new(),
        };
        assert!(err.is_auth_failure());
    }

    #[test]
    fn test_auth_failure_from_detail_reason() {
        let err = GenerationError::ApiError {
            code: 400,
            status: "INVALID_ARGUMENT".to_string(),
            message: "API key not valid. Please pass a valid API key.".to_string(),
            reasons: vec!["API_KEY_INVALID".to_string()],
        };
        assert!(err.is_auth_failure());
    }

    #[test]
    fn test_invalid_argument_without_key_reason() {
        let err = GenerationError::ApiError {
            code: 400,
            status: "INVALID_ARGUMENT".to_string(),
            message: "Invalid JSON payload received.".to_string(),
            reasons: Vec::new(),
        };
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn test_other_api_errors_are_not_auth_failures() {
        let err = GenerationError::ApiError {
            code: 429,
            status: "RESOURCE_EXHAUSTED".to_string(),
            message: "Quota exceeded".to_string(),
            reasons: vec!["RATE_LIMIT_EXCEEDED".to_string()],
        };
        assert!(!err.is_auth_failure());
        assert_eq!(
            err.to_string(),
            "API error (429 RESOURCE_EXHAUSTED): Quota exceeded"
        );
    }

    #[test]
    fn test_malformed_response_message() {
        let err = GenerationError::MalformedResponse("missing candidates".to_string());
        assert_eq!(err.to_string(), "Unexpected response: missing candidates");
    }
}
