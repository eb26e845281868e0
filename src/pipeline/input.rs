//! Input validation: read a local PDF into bytes the pipeline can forward.
//!
//! This is the upload boundary's job, not the core pipeline's — the encoder
//! deliberately trusts its caller (see [`crate::pipeline::encode`]). The CLI
//! and any embedding server call through here so a garbage file produces a
//! meaningful error instead of an opaque upstream rejection. We validate
//! the extension, that the file is non-empty, and the `%PDF` magic bytes.

use crate::error::ExtractError;
use std::path::Path;
use tracing::debug;

/// Read and validate a PDF document from a local path.
pub fn read_document(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let is_pdf_ext = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf_ext {
        return Err(ExtractError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => ExtractError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ExtractError::FileNotFound {
            path: path.to_path_buf(),
        },
    })?;

    if bytes.is_empty() {
        return Err(ExtractError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    // Verify PDF magic bytes
    if bytes.len() < 4 || &bytes[..4] != b"%PDF" {
        let mut magic = [0u8; 4];
        for (slot, byte) in magic.iter_mut().zip(bytes.iter()) {
            *slot = *byte;
        }
        return Err(ExtractError::NotAPdf {
            path: path.to_path_buf(),
            magic,
        });
    }

    debug!("Read PDF document: {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}
