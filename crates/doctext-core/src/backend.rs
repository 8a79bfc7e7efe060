use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// The service holds an implementor behind `Option<Arc<dyn PdfBackend>>`
/// in its startup-constructed extractor, so deployments without a PDF
/// library degrade to a descriptive per-request error, and tests can
/// substitute stub backends.
pub trait PdfBackend: Send + Sync {
    /// Extract the full plain-text content of a PDF file.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
