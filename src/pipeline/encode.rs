//! Request encoding: document bytes → base64 inline part + prompt part.
//!
//! The Gemini generateContent API accepts documents as base64 inline data
//! embedded in the JSON request body, alongside a text instruction, in a
//! single call. The serde types here ARE the wire contract: one `contents`
//! entry whose `parts` array holds exactly the text part followed by the
//! inline document part, with camelCase field names (`inlineData`,
//! `mimeType`) as the provider requires.
//!
//! The encoder does not enforce a PDF-format check — non-empty, valid bytes
//! are the upload boundary's responsibility ([`crate::pipeline::input`]).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use tracing::debug;

/// MIME type tagged onto the inline document part.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Request body for a generateContent call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One entry of the `parts` array: either a text instruction or an inline
/// binary document.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Assemble the request body for a document and prompt.
pub fn build_request(document: &[u8], prompt: &str) -> GenerateContentRequest {
    let data = STANDARD.encode(document);
    debug!("Encoded document → {} bytes base64", data.len());

    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: prompt.to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: PDF_MIME_TYPE.to_string(),
                        data,
                    },
                },
            ],
        }],
    }
}
