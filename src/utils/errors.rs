use thiserror::Error;

/// Every failure the UI can surface. The `Display` text is what ends up in the
/// status panels, so keep it human-readable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Please enter an API token.")]
    EmptyToken,

    /// Message taken verbatim from the API's `errors` array
    #[error("{0}")]
    Api(String),

    #[error("HTTP error! Status: {0}")]
    HttpStatus(u16),

    #[error("{0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Gemini API key is not configured. Set API_KEY in the environment or a .env file.")]
    MissingApiKey,

    #[error("{0}")]
    Generation(String),

    #[error("The model returned no text.")]
    EmptyGeneration,

    #[error("Failed to load image: {0}")]
    Image(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::InvalidResponse(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidResponse(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_message() {
        assert_eq!(AppError::EmptyToken.to_string(), "Please enter an API token.");
    }

    #[test]
    fn test_http_status_message() {
        assert_eq!(AppError::HttpStatus(401).to_string(), "HTTP error! Status: 401");
    }

    #[test]
    fn test_api_message_is_verbatim() {
        let err = AppError::Api("Invalid token".to_string());
        assert_eq!(err.to_string(), "Invalid token");
    }

    #[test]
    fn test_json_error_maps_to_invalid_response() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }
}
