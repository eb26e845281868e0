//! Top-level extraction entry points.
//!
//! Each call is one logical operation: build the request, make a single
//! generateContent round trip, normalise what comes back. Calls share no
//! mutable state, so an embedding server may run one extraction per inbound
//! upload concurrently without coordination. Dropping the returned future
//! cancels the in-flight network call.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::output::ExtractionOutput;
use crate::pipeline::{client::GeminiClient, encode, input, normalize};
use crate::prompts;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Extract structured JSON from in-memory PDF bytes.
///
/// This is the primary entry point for the library; callers that already
/// hold the document bytes (an upload handler, a queue consumer) use it
/// directly.
///
/// # Errors
/// Returns `Err(ExtractError)` for every pipeline failure — missing
/// credential, timeout, upstream rejection, malformed envelope, transport
/// failure. A model answer that fails to parse as JSON is NOT an error: it
/// comes back as [`crate::output::ExtractionResult::Raw`].
pub async fn extract_bytes(
    document: &[u8],
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractError> {
    let start = Instant::now();

    // ── Step 1: Credential check (before any network I/O) ────────────────
    let client = GeminiClient::new(config)?;

    // ── Step 2: Assemble the request ─────────────────────────────────────
    let prompt = config.prompt.as_deref().unwrap_or(prompts::EXTRACTION_PROMPT);
    let request = encode::build_request(document, prompt);

    // ── Step 3: Single generateContent round trip ────────────────────────
    let raw = client.generate(config.model, &request).await?;

    // ── Step 4: Normalise ────────────────────────────────────────────────
    let result = normalize::normalize(&raw);

    let duration_ms = start.elapsed().as_millis() as u64;
    info!(
        "Extraction complete: {} via {}, {}ms",
        if result.is_structured() {
            "structured"
        } else {
            "raw fallback"
        },
        config.model.model_id(),
        duration_ms
    );

    Ok(ExtractionOutput {
        result,
        model: config.model,
        duration_ms,
    })
}

/// Extract structured JSON from a PDF file on disk.
///
/// Validates the file at the upload boundary (extension, non-empty
/// content, `%PDF` magic) before invoking the pipeline.
pub async fn extract_file(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractError> {
    let path = path.as_ref();
    info!("Starting extraction: {}", path.display());
    let document = input::read_document(path)?;
    extract_bytes(&document, config).await
}

/// Synchronous wrapper around [`extract_file`].
///
/// Creates a temporary tokio runtime internally.
pub fn extract_sync(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, ExtractError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| ExtractError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(extract_file(path, config))
}
