use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiProviderError {
    ApiError(String),
    NetworkError(String),
    SerializationError(String),
    AuthenticationError(String),
}

impl AiProviderError {
    /// Bare message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::ApiError(msg)
            | Self::NetworkError(msg)
            | Self::SerializationError(msg)
            | Self::AuthenticationError(msg) => msg,
        }
    }
}

impl fmt::Display for AiProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ApiError(msg) => write!(f, "Gemini API Error: {msg}"),
            Self::NetworkError(msg) => write!(f, "Network Error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization Error: {msg}"),
            Self::AuthenticationError(msg) => write!(f, "Authentication Error: {msg}"),
        }
    }
}

impl Error for AiProviderError {}
