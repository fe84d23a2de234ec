// Locale → SYSTRAN language code normalization
// Author: kelexine (https://github.com/kelexine)

use super::LanguageCode;
use language_tags::LanguageTag;

const TRADITIONAL_CHINESE: &str = "zh-Hant";
const SIMPLIFIED_CHINESE: &str = "zh-Hans";

/// Map a locale to the code the service expects.
///
/// Older SYSTRAN servers name Chinese variants `zh` (simplified) and `zt`
/// (traditional); `legacy_mode` selects that scheme. Any other locale is
/// reduced to its primary language subtag ("en-US" → "en").
pub fn to_service_code(locale: &LanguageTag, legacy_mode: bool) -> LanguageCode {
    let name = locale.as_str();

    if name.eq_ignore_ascii_case(TRADITIONAL_CHINESE) {
        return if legacy_mode { "zt".to_string() } else { name.to_string() };
    }
    if name.eq_ignore_ascii_case(SIMPLIFIED_CHINESE) {
        return if legacy_mode { "zh".to_string() } else { name.to_string() };
    }

    match name.split_once('-') {
        Some((primary, _)) => primary.to_string(),
        None => name.to_string(),
    }
}
