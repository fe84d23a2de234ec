// SYSTRAN 8 translation provider: catalog lookup and blocking translation
// Author: kelexine (https://github.com/kelexine)

use super::{parse_locale, TranslationProvider};
use crate::config::ServerSettings;
use crate::error::{ProviderError, Result};
use crate::language::{LanguagePair, LanguagePairCatalog, LanguageTag};
use crate::models::{
    ProjectInfo, ProviderErrorLog, SuggestionRequest, SuggestionResult, TranslationOutcome,
    TranslationRequest, TranslationResult, TranslationType,
};
use crate::systran::TranslationClient;
use std::path::Path;
use tokio::runtime::{Builder, Runtime};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Span};

const DISPLAY_NAME: &str = "SYSTRAN 8 Translation Provider";
const DESCRIPTION: &str = "Machine translation from a SYSTRAN 8 server";

/// Machine translation is never auto-accepted, so the score carries no ranking.
const MACHINE_CONFIDENCE: u8 = 100;

/// Lifecycle of a constructed provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    /// Supported pairs are known; no pair selected yet.
    CatalogLoaded,
    /// `initialize` succeeded; translations can run.
    PairSelected,
}

/// Provider backed by a SYSTRAN 8 server.
///
/// Public operations block until the underlying HTTP call completes. The
/// provider drives its own current-thread runtime, so it must not be used
/// (or dropped) from inside another Tokio runtime.
///
/// Not synchronized: `initialize` needs `&mut self`, and a host sharing one
/// provider across threads has to serialize access itself.
pub struct Systran8Provider {
    runtime: Runtime,
    client: TranslationClient,
    catalog: LanguagePairCatalog,
    selected: Option<LanguagePair>,
    span: Span,
}

impl Systran8Provider {
    /// Create a provider from the JSON settings file given by the host.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = ServerSettings::load(path)?;
        Self::new(settings)
    }

    /// Create a provider and load the server's supported language pairs.
    pub fn new(settings: ServerSettings) -> Result<Self> {
        Self::with_cancellation(settings, &CancellationToken::new())
    }

    /// Like [`Systran8Provider::new`], aborting the catalog download when `cancel` fires.
    pub fn with_cancellation(settings: ServerSettings, cancel: &CancellationToken) -> Result<Self> {
        let span = info_span!("systran8_provider", url = %settings.url);
        let _guard = span.clone().entered();

        info!("Loading SYSTRAN 8 provider");

        let runtime = Builder::new_current_thread().enable_all().build()?;
        let client = TranslationClient::new(settings)?;

        let pairs = runtime
            .block_on(client.fetch_supported_languages(cancel, None, None))
            .map_err(|e| match e {
                ProviderError::Cancelled => ProviderError::Cancelled,
                other => ProviderError::CatalogLoad(Box::new(other)),
            })?;

        let catalog = LanguagePairCatalog::new(pairs);
        info!(
            "Loaded {} language pairs (Chinese legacy mode: {})",
            catalog.len(),
            catalog.legacy_chinese_mode()
        );

        Ok(Self {
            runtime,
            client,
            catalog,
            selected: None,
            span,
        })
    }

    pub fn state(&self) -> ProviderState {
        match self.selected {
            Some(_) => ProviderState::PairSelected,
            None => ProviderState::CatalogLoaded,
        }
    }

    pub fn catalog(&self) -> &LanguagePairCatalog {
        &self.catalog
    }

    pub fn selected_pair(&self) -> Option<&LanguagePair> {
        self.selected.as_ref()
    }

    fn run_translation(&self, request: &TranslationRequest, operation: &str) -> Result<TranslationResult> {
        if request.source.trim().is_empty() {
            return Err(ProviderError::InvalidArgument(format!(
                "{} request source text is empty",
                operation
            )));
        }
        let pair = self.selected.as_ref().ok_or(ProviderError::NotInitialized)?;

        debug!(
            "{} request {} with {}",
            operation, request.request_id, pair
        );

        let translated = self.runtime.block_on(self.client.translate(
            pair.source(),
            pair.target(),
            self.client.profile(),
            &request.source,
        ));

        let outcome = match translated {
            Ok(target) => TranslationOutcome::NeedsReview {
                target,
                confidence: MACHINE_CONFIDENCE,
            },
            Err(e) => {
                warn!("{} request {} failed: {}", operation, request.request_id, e);
                TranslationOutcome::Failed {
                    errors: vec![ProviderErrorLog::translation(e)],
                }
            }
        };

        Ok(TranslationResult {
            request_id: request.request_id.clone(),
            source: request.source.clone(),
            provider_name: DISPLAY_NAME,
            translation_type: TranslationType::MachineTranslation,
            outcome,
        })
    }
}

impl TranslationProvider for Systran8Provider {
    fn display_name(&self) -> &str {
        DISPLAY_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn get_targets(&self, source: &str) -> Result<Vec<LanguageTag>> {
        let _span = self.span.enter();
        let source = parse_locale(source, "source")?;

        let targets = self
            .catalog
            .resolve_targets(&source)
            .collect::<Result<Vec<_>>>()?;
        debug!("{} targets available from {}", targets.len(), source);
        Ok(targets)
    }

    fn is_supported(&self, source: &str, target: &str) -> Result<bool> {
        let _span = self.span.enter();
        let source = parse_locale(source, "source")?;
        let target = parse_locale(target, "target")?;

        let supported = self.catalog.resolve_pair(&source, &target).is_some();
        debug!("{} > {} supported: {}", source, target, supported);
        Ok(supported)
    }

    fn initialize(&mut self, source: &str, target: &str, project: Option<&ProjectInfo>) -> Result<()> {
        let _span = self.span.enter();
        let source = parse_locale(source, "source")?;
        let target = parse_locale(target, "target")?;

        let pair = self
            .catalog
            .resolve_pair(&source, &target)
            .cloned()
            .ok_or_else(|| {
                ProviderError::InvalidArgument(format!(
                    "Incompatible source and target: {} > {}",
                    source, target
                ))
            })?;

        info!(
            project = project.and_then(|p| p.name.as_deref()).unwrap_or_default(),
            version = project.and_then(|p| p.version.as_deref()).unwrap_or_default(),
            "Selected language pair {}",
            pair
        );
        self.selected = Some(pair);
        Ok(())
    }

    fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let _span = self.span.enter();
        self.run_translation(request, "Translate")
    }

    fn suggest(&self, request: &SuggestionRequest) -> Result<Vec<SuggestionResult>> {
        let _span = self.span.enter();
        Ok(vec![self.run_translation(request, "Suggest")?])
    }
}
