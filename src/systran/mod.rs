// SYSTRAN 8 REST API client module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::TranslationClient;

use crate::error::{ProviderError, Result};
use crate::language::LanguagePair;
use serde::Deserialize;

/// Response of `translation/supportedLanguages`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLanguagesResponse {
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub language_pairs: Option<Vec<LanguagePair>>,
}

impl SupportedLanguagesResponse {
    /// Fail if the service put an error in an otherwise successful response.
    pub fn ensure_no_error(&self) -> Result<()> {
        match self.error.as_deref() {
            Some(error) if !error.is_empty() => Err(ProviderError::Api {
                status: None,
                message: format!("Error received: \"{}\"", error),
            }),
            _ => Ok(()),
        }
    }
}
