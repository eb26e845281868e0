//! # pdf2spec
//!
//! Extract structured construction-spec JSON from PDF documents using the
//! Google Gemini API.
//!
//! ## Why this crate?
//!
//! Construction specification sections (CSI-style: a section identifier, a
//! title, and three "PART" groups of nested, numbered clauses) resist
//! classic text extraction — multi-column layouts, running headers, and
//! clause trees come out garbled. Instead this crate ships the PDF itself
//! to a Gemini model as inline data and asks for the section as a JSON
//! object, then validates and pretty-prints what comes back.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input      validate extension, non-empty content, %PDF magic
//!  ├─ 2. Encode     bytes → base64 inline part + fixed extraction prompt
//!  ├─ 3. Gemini     single generateContent call (600 s bound, no retries)
//!  └─ 4. Normalize  trim + fence-strip + JSON parse → Structured | Raw
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2spec::{extract_file, ExtractionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Credential read from GEMINI_API_KEY
//!     let config = ExtractionConfig::default();
//!     let output = extract_file("section.pdf", &config).await?;
//!     println!("{}", output.result.text());
//!     Ok(())
//! }
//! ```
//!
//! ## Choosing a Model
//!
//! | Model | Tier | Best for |
//! |-------|------|----------|
//! | `gemini-2.5-flash-lite` | Economy | Short, cleanly formatted sections |
//! | `gemini-2.5-flash` | Balanced | Default — most documents |
//! | `gemini-2.5-pro` | Premium | Long sections, dense clause nesting |
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2spec` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2spec = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod prompts;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder};
pub use error::ExtractError;
pub use extract::{extract_bytes, extract_file, extract_sync};
pub use model::{catalog_json, CapabilityTier, GeminiModel};
pub use output::{ExtractionOutput, ExtractionResult};
pub use pipeline::normalize::normalize;
