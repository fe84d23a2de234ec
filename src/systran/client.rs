// SYSTRAN 8 REST client: supported languages and text translation
// Author: kelexine (https://github.com/kelexine)

use super::SupportedLanguagesResponse;
use crate::config::ServerSettings;
use crate::error::{ProviderError, Result};
use crate::language::LanguagePair;
use crate::utils::logging::sanitize;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

/// Client for the SYSTRAN 8 REST API.
///
/// Every call is a single HTTP round trip: failures are reported to the
/// caller as they happen and never retried.
pub struct TranslationClient {
    http_client: Client,
    base_url: Url,
    settings: ServerSettings,
}

impl TranslationClient {
    /// Create a client for the server described by `settings`.
    ///
    /// The base URL is treated as a directory: a missing trailing slash is added
    /// so that endpoint paths are appended rather than substituted.
    pub fn new(settings: ServerSettings) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds))
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls()
            .build()
            .map_err(|e| ProviderError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = parse_base_url(&settings.url)?;
        debug!("Created SYSTRAN client for {}", base_url);

        Ok(Self {
            http_client,
            base_url,
            settings,
        })
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Translation profile configured for this server, if any
    pub fn profile(&self) -> Option<&str> {
        self.settings.profile.as_deref()
    }

    /// Fetch the language pairs the server supports, optionally filtered.
    ///
    /// Returns `ProviderError::Cancelled` as soon as `cancel` fires.
    pub async fn fetch_supported_languages(
        &self,
        cancel: &CancellationToken,
        source: Option<&str>,
        target: Option<&str>,
    ) -> Result<Vec<LanguagePair>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("Supported languages request cancelled");
                Err(ProviderError::Cancelled)
            }
            result = self.get_supported_languages(source, target) => result,
        }
    }

    async fn get_supported_languages(
        &self,
        source: Option<&str>,
        target: Option<&str>,
    ) -> Result<Vec<LanguagePair>> {
        let mut params = Vec::new();
        if let Some(source) = source.filter(|s| !s.is_empty()) {
            params.push(("source", source));
        }
        if let Some(target) = target.filter(|t| !t.is_empty()) {
            params.push(("target", target));
        }

        let url = self.endpoint("translation/supportedLanguages", &params)?;
        debug!("Fetching supported languages: GET {}", sanitize(url.as_str()));

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = extract_error(status, &body);
            error!("Supported languages request failed: {}", err);
            return Err(err);
        }

        let parsed: Option<SupportedLanguagesResponse> =
            serde_json::from_str(&body).map_err(|e| ProviderError::Api {
                status: Some(status.as_u16()),
                message: format!("Invalid supported languages response: {}", e),
            })?;
        let parsed = parsed.ok_or_else(|| ProviderError::Api {
            status: Some(status.as_u16()),
            message: "No JSON read from supported languages response".to_string(),
        })?;
        parsed.ensure_no_error()?;

        if let Some(warning) = parsed.warning.as_deref().filter(|w| !w.is_empty()) {
            warn!("SYSTRAN server warning: {}", warning);
        }

        let pairs = parsed.language_pairs.unwrap_or_default();
        debug!("Server supports {} language pairs", pairs.len());
        Ok(pairs)
    }

    /// Translate plain text. The response body is returned verbatim.
    pub async fn translate(
        &self,
        source: &str,
        target: &str,
        profile: Option<&str>,
        text: &str,
    ) -> Result<String> {
        let url = self.endpoint(
            "translate",
            &[
                ("source", source),
                ("target", target),
                ("profile", profile.unwrap_or_default()),
                ("format", "text/plain"),
                ("rawBody", "true"),
            ],
        )?;
        debug!("Translating {} chars: POST {}", text.chars().count(), sanitize(url.as_str()));

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(text.to_string())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.text().await?);
        }

        let body = response.text().await?;
        let err = extract_error(status, &body);
        error!("Translate request {}>{} failed: {}", source, target, err);
        Err(err)
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ProviderError::Config(format!("Invalid endpoint '{}': {}", path, e)))?;
        url.query_pairs_mut()
            .append_pair("key", self.settings.key.expose())
            .extend_pairs(params);
        Ok(url)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| ProviderError::Config(format!("Invalid server URL '{}': {}", raw, e)))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Turn a non-success response into the most specific error the body allows.
///
/// A body with an `error` field becomes `ProviderError::Api`; anything else
/// (not JSON, not an object, no `error`, an `error` object without a message)
/// becomes `ProviderError::BadResponse` carrying the raw body.
fn extract_error(status: StatusCode, body: &str) -> ProviderError {
    let code = status.as_u16();
    let status_message = format!(
        "StatusCode {} [{}]",
        code,
        status.canonical_reason().unwrap_or("Unknown")
    );

    let parsed = match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        _ => {
            return ProviderError::BadResponse {
                status: Some(code),
                message: status_message,
                body: body.to_string(),
            }
        }
    };

    let message = match parsed.get("error") {
        None => None,
        Some(Value::Null) => Some(String::new()),
        Some(Value::String(message)) => Some(message.clone()),
        // {"error": {"message": ...}} or the older {"error": {"msg": ...}}
        Some(Value::Object(fields)) => fields
            .get("message")
            .or_else(|| fields.get("msg"))
            .map(json_text),
        Some(other) => Some(other.to_string()),
    };

    match message {
        Some(message) => ProviderError::Api {
            status: Some(code),
            message: format!("{} - {}", message, status_message),
        },
        None => ProviderError::BadResponse {
            status: Some(code),
            message: status_message,
            body: body.to_string(),
        },
    }
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_string_error() {
        let err = extract_error(StatusCode::BAD_REQUEST, r#"{"error":"Unknown language"}"#);
        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, Some(400));
                assert_eq!(message, "Unknown language - StatusCode 400 [Bad Request]");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_nested_message_then_msg() {
        let err = extract_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":{"message":"bad key","msg":"ignored"}}"#,
        );
        assert!(err.to_string().contains("bad key"));
        assert!(!err.to_string().contains("ignored"));

        let err = extract_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":{"msg":"legacy"}}"#);
        assert!(err.to_string().contains("legacy"));
    }

    #[test]
    fn test_extract_non_string_error_is_rendered() {
        let err = extract_error(StatusCode::BAD_GATEWAY, r#"{"error":42}"#);
        assert!(matches!(err, ProviderError::Api { ref message, .. } if message.starts_with("42 - ")));
    }

    #[test]
    fn test_extract_object_without_message_is_bad_response() {
        let err = extract_error(StatusCode::BAD_REQUEST, r#"{"error":{"code":7}}"#);
        assert_eq!(err.raw_body(), Some(r#"{"error":{"code":7}}"#));
    }

    #[test]
    fn test_extract_null_error_is_api_with_empty_message() {
        let err = extract_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":null}"#);
        match err {
            ProviderError::Api { status, message } => {
                assert_eq!(status, Some(500));
                assert_eq!(message, " - StatusCode 500 [Internal Server Error]");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_garbage_keeps_body() {
        for body in ["oops", "\"oops\"", "", "[1,2]", r#"{"status":"down"}"#] {
            let err = extract_error(StatusCode::SERVICE_UNAVAILABLE, body);
            match err {
                ProviderError::BadResponse { status, message, body: raw } => {
                    assert_eq!(status, Some(503));
                    assert_eq!(message, "StatusCode 503 [Service Unavailable]");
                    assert_eq!(raw, body);
                }
                other => panic!("unexpected error for {:?}: {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        assert_eq!(
            parse_base_url("http://localhost:8904/api").unwrap().as_str(),
            "http://localhost:8904/api/"
        );
        assert_eq!(
            parse_base_url("http://localhost:8904/").unwrap().as_str(),
            "http://localhost:8904/"
        );
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_endpoint_carries_key_and_params() {
        let client = TranslationClient::new(ServerSettings::new("http://localhost:8904/", "k3y")).unwrap();
        let url = client
            .endpoint("translate", &[("source", "en"), ("profile", "")])
            .unwrap();
        assert_eq!(url.path(), "/translate");
        assert_eq!(url.query(), Some("key=k3y&source=en&profile="));
    }
}
