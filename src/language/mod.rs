// Language codes, pairs and the supported-pair catalog
// Author: kelexine (https://github.com/kelexine)

mod catalog;
mod normalize;

pub use catalog::{
    detect_legacy_chinese_mode, find_pair, find_targets_for, resolve_pair, resolve_targets,
    LanguagePairCatalog,
};
pub use normalize::to_service_code;

pub use language_tags::LanguageTag;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language code as understood by the translation service (e.g. "en", "zt").
pub type LanguageCode = String;

/// A source/target pair the service can translate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    source: LanguageCode,
    target: LanguageCode,
}

impl LanguagePair {
    /// Build a pair from codes, lowercasing both.
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_lowercase(),
            target: target.to_lowercase(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases_codes() {
        let lp = LanguagePair::new("EN", "Zh");
        assert_eq!(lp.source(), "en");
        assert_eq!(lp.target(), "zh");
        assert_eq!(lp.to_string(), "en>zh");
    }

    #[test]
    fn test_deserialized_pair_keeps_service_spelling() {
        let lp: LanguagePair = serde_json::from_str(r#"{"source":"en","target":"zh-Hans"}"#).unwrap();
        assert_eq!(lp.target(), "zh-Hans");
        assert_ne!(lp, LanguagePair::new("en", "zh-Hans"));
    }
}
