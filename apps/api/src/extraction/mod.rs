//! Text extraction for uploaded CV documents.
//!
//! Supported formats are decided from the filename alone, before any bytes
//! are parsed. Parsing is CPU-bound and runs on the blocking pool.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

mod docx;
#[cfg(test)]
pub(crate) mod fixtures;
mod pdf;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("DOCX parse error: {0}")]
    Docx(String),
}

/// Document formats the upload endpoint can turn into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Maps a lowercase extension (with its leading dot) to a document kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".pdf" => Some(DocumentKind::Pdf),
            ".docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// Detects the kind from an uploaded filename. Case-insensitive.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        let dot = lower.rfind('.')?;
        Self::from_extension(&lower[dot..])
    }
}

/// Extracts plain text from a PDF or DOCX payload.
///
/// PDF pages are concatenated in order; DOCX body paragraphs are joined
/// with `\n`. A panic inside the parser is reported as an extraction failure.
pub async fn extract_text(bytes: Bytes, kind: DocumentKind) -> Result<String, ExtractError> {
    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || match kind {
        DocumentKind::Pdf => pdf::extract(&bytes),
        DocumentKind::Docx => docx::extract(&bytes),
    })
    .await
    .map_err(|e| match kind {
        DocumentKind::Pdf => ExtractError::Pdf(format!("parser aborted: {e}")),
        DocumentKind::Docx => ExtractError::Docx(format!("parser aborted: {e}")),
    })??;

    debug!("Extracted {} chars from {size}-byte {kind:?} upload", text.len());
    Ok(text)
}
