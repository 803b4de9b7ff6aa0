use serde_json::Error as JsonError;
use std::fmt;

#[derive(Debug)]
pub enum RemoteError {
    NetworkError(String),
    ParseError(String),
    ValidationError(String),
    RateLimitError(String),
    APIError(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::RateLimitError(msg) => write!(f, "Rate limit error: {}", msg),
            Self::APIError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl std::error::Error for RemoteError {}

impl From<JsonError> for RemoteError {
    fn from(error: JsonError) -> Self {
        RemoteError::ParseError(format!("Malformed search response: {}", error))
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(error: reqwest::Error) -> Self {
        RemoteError::NetworkError(error.to_string())
    }
}
