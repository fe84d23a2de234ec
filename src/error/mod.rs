// Error types for the SYSTRAN 8 translation provider
// Author: kelexine (https://github.com/kelexine)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Failed to load supported language pairs: {0}")]
    CatalogLoad(#[source] Box<ProviderError>),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No language pair selected: call initialize before translating")]
    NotInitialized,

    /// The service answered with a structured error.
    #[error("API error: {message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    /// The service answered with something that could not be interpreted.
    #[error("Bad response: {message}")]
    BadResponse {
        status: Option<u16>,
        message: String,
        body: String,
    },

    #[error("Language code '{code}' is not a valid locale: {source}")]
    InvalidLocale {
        code: String,
        #[source]
        source: language_tags::ParseError,
    },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ProviderError {
    /// HTTP status reported by the service, when the error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProviderError::Api { status, .. } | ProviderError::BadResponse { status, .. } => *status,
            ProviderError::Http(e) => e.status().map(|s| s.as_u16()),
            ProviderError::CatalogLoad(inner) => inner.status_code(),
            _ => None,
        }
    }

    /// Raw response body kept for diagnostics when the service returned garbage.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            ProviderError::BadResponse { body, .. } => Some(body),
            ProviderError::CatalogLoad(inner) => inner.raw_body(),
            _ => None,
        }
    }

    /// Whether the error was raised by the caller's input rather than the service.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            ProviderError::InvalidArgument(_) | ProviderError::NotInitialized
        )
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
