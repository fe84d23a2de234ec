// Supported language pair catalog and compatibility matching
// Author: kelexine (https://github.com/kelexine)

use super::{to_service_code, LanguagePair};
use crate::error::{ProviderError, Result};
use language_tags::LanguageTag;

/// Whether the service still uses the two-letter `zh`/`zt` Chinese codes.
pub fn detect_legacy_chinese_mode(pairs: &[LanguagePair]) -> bool {
    let is_legacy = |code: &str| {
        let code = code.to_lowercase();
        code == "zh" || code == "zt"
    };
    pairs
        .iter()
        .any(|lp| is_legacy(lp.source()) || is_legacy(lp.target()))
}

/// Exact lookup on already-normalized codes.
pub fn find_pair<'a>(
    pairs: &'a [LanguagePair],
    source: &str,
    target: &str,
) -> Option<&'a LanguagePair> {
    if source.trim().is_empty() || target.trim().is_empty() {
        return None;
    }
    pairs
        .iter()
        .find(|lp| lp.source() == source && lp.target() == target)
}

/// Every target paired with `source`, in catalog order.
pub fn find_targets_for<'a, S>(
    pairs: &'a [LanguagePair],
    source: S,
) -> impl Iterator<Item = &'a str> + 'a
where
    S: AsRef<str> + 'a,
{
    pairs
        .iter()
        .filter(move |lp| lp.source() == source.as_ref())
        .map(|lp| lp.target())
}

/// Normalize both locales and look the pair up.
pub fn resolve_pair<'a>(
    pairs: &'a [LanguagePair],
    source: &LanguageTag,
    target: &LanguageTag,
    legacy_mode: bool,
) -> Option<&'a LanguagePair> {
    let source_code = to_service_code(source, legacy_mode);
    let target_code = to_service_code(target, legacy_mode);
    find_pair(pairs, &source_code, &target_code)
}

/// Targets reachable from `source`, turned back into locales.
///
/// A target code that is not a well-formed language tag yields an error
/// instead of being skipped.
pub fn resolve_targets<'a>(
    pairs: &'a [LanguagePair],
    source: &LanguageTag,
    legacy_mode: bool,
) -> impl Iterator<Item = Result<LanguageTag>> + 'a {
    find_targets_for(pairs, to_service_code(source, legacy_mode)).map(|code| {
        LanguageTag::parse(code).map_err(|e| ProviderError::InvalidLocale {
            code: code.to_string(),
            source: e,
        })
    })
}

/// The pairs returned by the service, with the Chinese naming scheme detected once.
#[derive(Debug, Clone, Default)]
pub struct LanguagePairCatalog {
    pairs: Vec<LanguagePair>,
    legacy_chinese_mode: bool,
}

impl LanguagePairCatalog {
    pub fn new(pairs: Vec<LanguagePair>) -> Self {
        let legacy_chinese_mode = detect_legacy_chinese_mode(&pairs);
        Self {
            pairs,
            legacy_chinese_mode,
        }
    }

    pub fn pairs(&self) -> &[LanguagePair] {
        &self.pairs
    }

    pub fn legacy_chinese_mode(&self) -> bool {
        self.legacy_chinese_mode
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn resolve_pair(&self, source: &LanguageTag, target: &LanguageTag) -> Option<&LanguagePair> {
        resolve_pair(&self.pairs, source, target, self.legacy_chinese_mode)
    }

    pub fn resolve_targets<'a>(
        &'a self,
        source: &LanguageTag,
    ) -> impl Iterator<Item = Result<LanguageTag>> + 'a {
        resolve_targets(&self.pairs, source, self.legacy_chinese_mode)
    }
}
