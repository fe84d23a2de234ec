// Host plugin request and result types
// Author: kelexine (https://github.com/kelexine)

use crate::error::ProviderError;

/// Project the host is localizing, passed to `initialize`.
#[derive(Debug, Clone, Default)]
pub struct ProjectInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// A single segment to translate.
#[derive(Debug, Clone, Default)]
pub struct TranslationRequest {
    /// Host-assigned identifier echoed back in the result.
    pub request_id: String,
    /// Text to translate.
    pub source: String,
    /// Lowest confidence the host will accept (informational).
    pub minimum_confidence: u8,
}

impl TranslationRequest {
    pub fn new(request_id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            source: source.into(),
            minimum_confidence: 0,
        }
    }
}

/// Suggestion requests carry the same fields as translation requests.
pub type SuggestionRequest = TranslationRequest;

/// Suggestions are reported with the same shape as translations.
pub type SuggestionResult = TranslationResult;

/// How the translation was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationType {
    MachineTranslation,
}

/// Coarse state reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    /// Translated, but machine output always needs human review.
    NeedsReview,
    /// The service call failed; see the result's errors.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Translation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
}

/// An error attached to a failed result.
#[derive(Debug)]
pub struct ProviderErrorLog {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub error: ProviderError,
}

impl ProviderErrorLog {
    /// Wrap a service failure as a translation error.
    pub fn translation(error: ProviderError) -> Self {
        Self {
            category: ErrorCategory::Translation,
            severity: ErrorSeverity::Error,
            error,
        }
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Either a translation or the errors that prevented it, never both.
#[derive(Debug)]
pub enum TranslationOutcome {
    NeedsReview { target: String, confidence: u8 },
    Failed { errors: Vec<ProviderErrorLog> },
}

/// Result handed back to the host for one request.
#[derive(Debug)]
pub struct TranslationResult {
    pub request_id: String,
    pub source: String,
    pub provider_name: &'static str,
    pub translation_type: TranslationType,
    pub outcome: TranslationOutcome,
}

impl TranslationResult {
    pub fn state(&self) -> TranslationState {
        match self.outcome {
            TranslationOutcome::NeedsReview { .. } => TranslationState::NeedsReview,
            TranslationOutcome::Failed { .. } => TranslationState::Failed,
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self.outcome, TranslationOutcome::NeedsReview { .. })
    }

    pub fn target(&self) -> Option<&str> {
        match &self.outcome {
            TranslationOutcome::NeedsReview { target, .. } => Some(target),
            TranslationOutcome::Failed { .. } => None,
        }
    }

    pub fn confidence(&self) -> u8 {
        match self.outcome {
            TranslationOutcome::NeedsReview { confidence, .. } => confidence,
            TranslationOutcome::Failed { .. } => 0,
        }
    }

    pub fn errors(&self) -> &[ProviderErrorLog] {
        match &self.outcome {
            TranslationOutcome::NeedsReview { .. } => &[],
            TranslationOutcome::Failed { errors } => errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: TranslationOutcome) -> TranslationResult {
        TranslationResult {
            request_id: "1".to_string(),
            source: "The dog is blue.".to_string(),
            provider_name: "test",
            translation_type: TranslationType::MachineTranslation,
            outcome,
        }
    }

    #[test]
    fn test_needs_review_accessors() {
        let r = result(TranslationOutcome::NeedsReview {
            target: "Le chien est bleu.".to_string(),
            confidence: 100,
        });
        assert_eq!(r.state(), TranslationState::NeedsReview);
        assert!(r.is_translated());
        assert_eq!(r.target(), Some("Le chien est bleu."));
        assert_eq!(r.confidence(), 100);
        assert!(r.errors().is_empty());
    }

    #[test]
    fn test_failed_accessors() {
        let r = result(TranslationOutcome::Failed {
            errors: vec![ProviderErrorLog::translation(ProviderError::NotInitialized)],
        });
        assert_eq!(r.state(), TranslationState::Failed);
        assert!(!r.is_translated());
        assert_eq!(r.target(), None);
        assert_eq!(r.errors().len(), 1);
        assert_eq!(r.errors()[0].category, ErrorCategory::Translation);
        assert_eq!(r.errors()[0].severity, ErrorSeverity::Error);
    }
}
