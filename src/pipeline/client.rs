//! Gemini interaction: dispatch the generateContent call and classify the
//! response.
//!
//! This module is intentionally thin — all prompt engineering lives in
//! [`crate::prompts`] and all body assembly in [`crate::pipeline::encode`],
//! so the network stage can change without touching either.
//!
//! ## No retries
//!
//! Exactly one attempt per call. A failed call surfaces as an
//! [`ExtractError`] and retry policy (if any) belongs to the caller; the
//! caller also cancels an in-flight request simply by dropping the future.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::model::GeminiModel;
use crate::pipeline::encode::GenerateContentRequest;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed upper bound on the generateContent round trip, in seconds.
///
/// Large documents can take minutes of model time; ten minutes is the
/// ceiling after which the document is considered too big for a single
/// call. Not caller-configurable.
pub const API_TIMEOUT_SECS: u64 = 600;

/// HTTP client for Gemini generateContent requests.
///
/// Holds the credential and endpoint resolved from an
/// [`ExtractionConfig`]; each [`generate`](Self::generate) call is
/// independent and stateless, so one client may serve many concurrent
/// extractions.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

// ── Response envelope ────────────────────────────────────────────────────
//
// The upstream schema is not a contract we control, so every level is
// optional-tolerant and the missing-path case is classified explicitly.

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Build a client from the config.
    ///
    /// Fails fast with [`ExtractError::MissingCredential`] when no API key
    /// is configured — before any network activity.
    pub fn new(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(ExtractError::MissingCredential)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(API_TIMEOUT_SECS))
            .build()
            .map_err(|e| ExtractError::Internal(format!("HTTP client construction: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.clone(),
        })
    }

    /// Dispatch one generateContent call and return the raw model text.
    ///
    /// A single HTTP POST under the fixed wait bound; the response is
    /// classified into the error taxonomy or reduced to the first
    /// candidate's first text part.
    pub async fn generate(
        &self,
        model: GeminiModel,
        request: &GenerateContentRequest,
    ) -> Result<String, ExtractError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            model.model_id(),
            self.api_key
        );

        debug!("Dispatching generateContent to {}", model.model_id());

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned HTTP {} for {}", status, model.model_id());
            return Err(ExtractError::Upstream {
                message: upstream_message(&body),
                status: status.as_u16(),
            });
        }

        let envelope: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ExtractError::Timeout {
                    secs: API_TIMEOUT_SECS,
                }
            } else {
                ExtractError::MalformedResponse {
                    detail: format!("response body is not valid JSON: {e}"),
                }
            }
        })?;

        first_candidate_text(envelope).ok_or_else(|| ExtractError::MalformedResponse {
            detail: "no text part at candidates[0].content.parts[0]".to_string(),
        })
    }
}

fn classify_transport_error(e: reqwest::Error) -> ExtractError {
    if e.is_timeout() {
        ExtractError::Timeout {
            secs: API_TIMEOUT_SECS,
        }
    } else {
        ExtractError::Network {
            reason: e.to_string(),
        }
    }
}

/// Pull the human-readable message out of a failure body.
///
/// The provider conventionally reports `{"error": {"message": ...}}`; when
/// the body is not JSON or the field is absent, fall back to a generic
/// message (the HTTP status is carried separately on the error).
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| "request failed with no error detail from upstream".to_string())
}

/// Walk the success envelope down to the first candidate's first text part.
fn first_candidate_text(envelope: GenerateContentResponse) -> Option<String> {
    envelope
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;

    #[test]
    fn new_fails_without_credential() {
        let mut config = ExtractionConfig::builder().build();
        config.api_key = None;
        let err = GeminiClient::new(&config).unwrap_err();
        assert!(matches!(err, ExtractError::MissingCredential));
    }

    #[test]
    fn new_fails_on_empty_credential() {
        let config = ExtractionConfig::builder().api_key("").build();
        let err = GeminiClient::new(&config).unwrap_err();
        assert!(matches!(err, ExtractError::MissingCredential));
    }

    #[test]
    fn upstream_message_extracts_conventional_field() {
        let body = r#"{"error": {"message": "bad request", "code": 400}}"#;
        assert_eq!(upstream_message(body), "bad request");
    }

    #[test]
    fn upstream_message_falls_back_on_non_json() {
        let msg = upstream_message("<html>Service Unavailable</html>");
        assert!(msg.contains("no error detail"));
    }

    #[test]
    fn upstream_message_falls_back_on_missing_field() {
        let msg = upstream_message(r#"{"error": {"status": "INVALID_ARGUMENT"}}"#);
        assert!(msg.contains("no error detail"));
    }

    #[test]
    fn first_candidate_text_happy_path() {
        let envelope: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "hello"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(first_candidate_text(envelope).as_deref(), Some("hello"));
    }

    #[test]
    fn first_candidate_text_missing_paths() {
        for body in [
            r#"{}"#,
            r#"{"candidates": []}"#,
            r#"{"candidates": [{}]}"#,
            r#"{"candidates": [{"content": {}}]}"#,
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
            r#"{"candidates": [{"content": {"parts": [{}]}}]}"#,
        ] {
            let envelope: GenerateContentResponse = serde_json::from_str(body).unwrap();
            assert!(
                first_candidate_text(envelope).is_none(),
                "expected no text for {body}"
            );
        }
    }
}
