//! Normalisation: deterministic cleanup of the model's text output.
//!
//! Models commonly wrap JSON in Markdown code fences despite instructions
//! not to — the artifact is *semantically correct* from the model's
//! perspective but breaks any consumer expecting a bare JSON document. This
//! stage trims the text, strips one outer fence if present, and attempts a
//! JSON parse. What parses is re-serialised into a stable pretty-printed
//! form; what doesn't is returned verbatim as a raw result rather than an
//! error, so the model's answer is never discarded outright.
//!
//! No semantic validation of the JSON's shape happens here — any
//! well-formed JSON counts as structured, whether or not it matches the
//! schema the prompt asks for.

use crate::output::ExtractionResult;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_OUTER_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```[A-Za-z0-9_-]*\n(.*)\n```\s*$").unwrap());

/// Convert raw model text into a structured or raw result.
///
/// Steps, in order:
/// 1. Trim surrounding whitespace
/// 2. Strip a leading fenced-code marker (optionally language-tagged) and
///    the trailing fence, if both are present
/// 3. Parse as JSON: success re-serialises with 2-space indentation and
///    non-ASCII preserved verbatim; failure returns the trimmed original
pub fn normalize(raw: &str) -> ExtractionResult {
    let trimmed = raw.trim();
    let payload = strip_outer_fence(trimmed);

    match parse_pretty(payload) {
        Some(pretty) => ExtractionResult::Structured(pretty),
        None => ExtractionResult::Raw(trimmed.to_string()),
    }
}

/// Recover the payload embedded in an outer ``` fence, if any.
fn strip_outer_fence(input: &str) -> &str {
    match RE_OUTER_FENCE.captures(input) {
        Some(caps) => caps.get(1).map_or(input, |m| m.as_str()),
        None => input,
    }
}

/// Parse as JSON and re-serialise pretty-printed; `None` when the text is
/// not well-formed JSON.
fn parse_pretty(input: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(input).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
