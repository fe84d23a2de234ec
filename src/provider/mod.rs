//! Plugin contract expected by the localization host.
//!
//! The host hands locales over by name (`"en-US"`, `"zh-Hans"`), asks which
//! pairs are supported, selects one with `initialize`, then sends segments to
//! `translate` or `suggest`. Those two always answer with a result object:
//! service failures are reported inside it rather than as errors.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod systran8;

pub use systran8::{ProviderState, Systran8Provider};

use crate::error::{ProviderError, Result};
use crate::models::{ProjectInfo, SuggestionRequest, SuggestionResult, TranslationRequest, TranslationResult};
use language_tags::LanguageTag;

/// Operations a translation provider plugin must offer the host.
pub trait TranslationProvider {
    /// Name shown in the host's provider list.
    fn display_name(&self) -> &str;

    /// One-line description shown next to the name.
    fn description(&self) -> &str;

    /// Locales the provider can translate `source` into.
    fn get_targets(&self, source: &str) -> Result<Vec<LanguageTag>>;

    /// Whether `source` → `target` can be translated.
    fn is_supported(&self, source: &str, target: &str) -> Result<bool>;

    /// Select the pair used by subsequent `translate`/`suggest` calls.
    fn initialize(&mut self, source: &str, target: &str, project: Option<&ProjectInfo>) -> Result<()>;

    /// Translate one segment.
    ///
    /// Only precondition failures are returned as `Err`; service failures
    /// produce a failed result.
    fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult>;

    /// Suggest translations for one segment.
    fn suggest(&self, request: &SuggestionRequest) -> Result<Vec<SuggestionResult>>;
}

/// Parse a locale name handed over by the host.
pub(crate) fn parse_locale(name: &str, argument: &str) -> Result<LanguageTag> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProviderError::InvalidArgument(format!(
            "{} locale is required",
            argument
        )));
    }
    LanguageTag::parse(name).map_err(|e| {
        ProviderError::InvalidArgument(format!("{} locale '{}' is invalid: {}", argument, name, e))
    })
}
