//! The extraction instruction sent alongside every document.
//!
//! Centralising the prompt here serves two purposes:
//!
//! 1. **Single source of truth** — the output schema below is the most
//!    important behavioural contract of the whole system; any change must
//!    flow through exactly one place.
//!
//! 2. **Testability** — unit tests can inspect the prompt directly without
//!    a live API call, so schema regressions are caught immediately.
//!
//! Callers can override the default via
//! [`crate::config::ExtractionConfig::prompt`]; the constant here is used
//! only when no override is provided.

/// Default instruction for converting a specification PDF into JSON.
///
/// This prompt is used when `ExtractionConfig::prompt` is `None`.
pub const EXTRACTION_PROMPT: &str = r#"You are an expert construction-specification reader. Your task is to extract the specification section from the uploaded PDF and return it as a single JSON object.

Follow these rules precisely:

1. FIDELITY
   - Use ONLY text that is present in the document
   - Never invent, summarise, or reword content
   - Preserve clause numbering and wording exactly as printed

2. OUTPUT SCHEMA
   {
     "section": "<section identifier, e.g. 22 08 00>",
     "name": "<section title>",
     "part1": { "title": "<part heading>", "partItems": [ ... ] },
     "part2": { "title": "<part heading>", "partItems": [ ... ] },
     "part3": { "title": "<part heading>", "partItems": [ ... ] }
   }
   Each entry of "partItems" is an indexed clause node:
   { "index": "<clause number>", "text": "<clause text>", "children": [ ... ] }
   where "children" holds nested sub-clauses and uses the same node shape.

3. WHAT TO IGNORE
   - Page headers and footers
   - Page numbers
   - Cover-page and title-block boilerplate

4. MISSING PARTS
   - If a part has no content in the document, keep the part with
     "partItems": [] (an empty item list) — never omit the part itself

5. OUTPUT FORMAT
   - Output ONLY the JSON object
   - Do NOT wrap it in ```json fences
   - Do NOT add commentary or explanations"#;

/// The instruction sent with every extraction request.
///
/// A pure function of no runtime input; exists so call sites read as
/// "build the prompt" rather than reaching for a constant.
#[must_use]
pub fn extraction_prompt() -> &'static str {
    EXTRACTION_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_every_schema_key() {
        for key in ["section", "name", "part1", "part2", "part3", "partItems", "index", "children"] {
            assert!(
                EXTRACTION_PROMPT.contains(key),
                "prompt is missing schema key {key:?}"
            );
        }
    }

    #[test]
    fn prompt_mandates_empty_item_list_for_absent_parts() {
        assert!(EXTRACTION_PROMPT.contains(r#""partItems": []"#));
    }

    #[test]
    fn prompt_forbids_fences_and_commentary() {
        assert!(EXTRACTION_PROMPT.contains("ONLY the JSON object"));
        assert!(EXTRACTION_PROMPT.contains("fences"));
    }
}
