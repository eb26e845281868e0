//! Pipeline stages for PDF-to-JSON extraction.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations without touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ encode ──▶ client ──▶ normalize
//! (bytes)   (base64)   (Gemini)   (JSON | raw)
//! ```
//!
//! 1. [`input`]     — read and validate the document at the upload boundary
//! 2. [`encode`]    — base64-wrap the bytes into the generateContent body
//! 3. [`client`]    — dispatch the request under the fixed wait bound; the
//!    only stage with network I/O
//! 4. [`normalize`] — strip formatting artifacts and parse the model text
//!    into a structured or raw result

pub mod client;
pub mod encode;
pub mod input;
pub mod normalize;
