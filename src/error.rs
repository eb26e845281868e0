//! Error types for the pdf2spec library.
//!
//! Every failure of the extraction pipeline surfaces as an [`ExtractError`]
//! returned from the top-level `extract*` functions — nothing is retried
//! internally and nothing is swallowed. The one deliberate non-error is the
//! normalizer's JSON-parse failure: that path produces a
//! [`crate::output::ExtractionResult::Raw`] result instead, because a human
//! reviewing the raw model text beats discarding the answer outright.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2spec library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The filename does not carry a .pdf extension.
    #[error("Unsupported file type: '{path}'\nOnly .pdf documents are accepted.")]
    UnsupportedFile { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    /// The file exists but contains no bytes.
    #[error("Document is empty: '{path}'")]
    EmptyDocument { path: PathBuf },

    // ── Catalog errors ────────────────────────────────────────────────────
    /// The model identifier is not in the supported catalog.
    #[error("Unknown model '{model}'.\nValid options: gemini-2.5-flash-lite, gemini-2.5-flash, gemini-2.5-pro")]
    InvalidModel { model: String },

    // ── API errors ────────────────────────────────────────────────────────
    /// No API key was configured; checked before any network call.
    #[error("Gemini API key is not configured.\nSet GEMINI_API_KEY or pass a key via ExtractionConfig::builder().api_key(..).")]
    MissingCredential,

    /// The generateContent call exceeded the fixed wait bound.
    #[error("Gemini API call timed out after {secs}s.\nRetry with a smaller document.")]
    Timeout { secs: u64 },

    /// The Gemini API answered with a non-success HTTP status.
    #[error("Gemini API error ({status}): {message}")]
    Upstream { message: String, status: u16 },

    /// Success status but the response envelope is missing the expected
    /// candidates/content/parts/text path.
    #[error("Unexpected response envelope from the Gemini API: {detail}")]
    MalformedResponse { detail: String },

    /// Transport failure other than a timeout (DNS, TLS, connection reset).
    #[error("Failed to reach the Gemini API: {reason}\nCheck your internet connection.")]
    Network { reason: String },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
