//! Configuration for an extraction run.
//!
//! All behaviour is controlled through [`ExtractionConfig`], built via its
//! [`ExtractionConfigBuilder`]. The credential and prompt are captured once
//! at construction and passed explicitly into the pipeline — nothing in the
//! core reads ambient process state, which keeps the whole pipeline
//! testable with injected fakes.
//!
//! The API wait bound is deliberately NOT a knob here: it is fixed at
//! [`crate::pipeline::client::API_TIMEOUT_SECS`] for every call.

use crate::model::GeminiModel;
use std::fmt;

/// Environment variable the Gemini credential is read from when no explicit
/// key is configured.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default Gemini API host; overridable for tests and proxies.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for a PDF extraction.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`], which selects the mid-tier model and
/// reads the credential from `GEMINI_API_KEY`.
///
/// # Example
/// ```rust
/// use pdf2spec::{ExtractionConfig, GeminiModel};
///
/// let config = ExtractionConfig::builder()
///     .model(GeminiModel::Pro)
///     .api_key("test-key")
///     .build();
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// Model the request is dispatched to. Default: [`GeminiModel::Flash`].
    pub model: GeminiModel,

    /// Gemini API key. `None` means no credential was found at construction;
    /// the client fails with `MissingCredential` before any network call.
    pub api_key: Option<String>,

    /// Base URL of the Gemini API. Default: [`DEFAULT_BASE_URL`].
    ///
    /// Overridable so tests can point the client at a local mock server and
    /// deployments can route through an egress proxy.
    pub base_url: String,

    /// Custom extraction instruction. If `None`, uses
    /// [`crate::prompts::EXTRACTION_PROMPT`].
    pub prompt: Option<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            model: GeminiModel::default(),
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            prompt: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    // The key is redacted: configs get logged, credentials must not.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("prompt", &self.prompt.as_ref().map(|p| p.len()))
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn model(mut self, model: GeminiModel) -> Self {
        self.config.model = model;
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        // A trailing slash would produce "//v1beta/..." in the endpoint URL.
        self.config.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = Some(prompt.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ExtractionConfig {
        self.config
    }
}
