//! Extraction dispatch for the doctext service.
//!
//! [`Extractor`] is the capability object: it is constructed once at
//! startup, owns the (optional) PDF backend, and is handed to request
//! handlers explicitly. Whether PDF support exists is decided when the
//! extractor is built: with the `pdf` feature disabled, or a backend
//! explicitly absent, `.pdf` documents fail with a descriptive error
//! instead of an unhandled fault.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use doctext_core::{BackendError, PdfBackend};

// Re-export the dispatch type for consumers of this crate
pub use doctext_core::DocumentKind;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("MuPDF library is not available for PDF parsing")]
    PdfUnavailable,
    #[error("Error extracting text from PDF: {0}")]
    Pdf(#[from] BackendError),
    #[error("Error extracting text from DOCX: {0}")]
    Docx(#[from] doctext_docx::DocxError),
    #[error("Error reading TXT file: {0}")]
    Txt(#[source] std::io::Error),
}

/// Format-dispatching text extractor.
pub struct Extractor {
    pdf: Option<Arc<dyn PdfBackend>>,
}

impl Extractor {
    /// Build an extractor with the default backends: MuPDF when the
    /// `pdf` feature is compiled in, no PDF support otherwise.
    pub fn new() -> Self {
        Self {
            pdf: default_pdf_backend(),
        }
    }

    /// Build an extractor with an explicit (or absent) PDF backend.
    pub fn with_pdf_backend(pdf: Option<Arc<dyn PdfBackend>>) -> Self {
        Self { pdf }
    }

    /// Whether `.pdf` documents can be served by this extractor.
    pub fn pdf_available(&self) -> bool {
        self.pdf.is_some()
    }

    /// Extract the plain text of the document at `path`, treated as `kind`.
    pub fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String, ExtractError> {
        match kind {
            DocumentKind::Pdf => {
                let backend = self.pdf.as_ref().ok_or(ExtractError::PdfUnavailable)?;
                Ok(backend.extract_text(path)?)
            }
            DocumentKind::Docx => Ok(doctext_docx::extract_text(path)?),
            // Verbatim UTF-8 read; invalid encoding surfaces as an IO error
            DocumentKind::Txt => std::fs::read_to_string(path).map_err(ExtractError::Txt),
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "pdf")]
fn default_pdf_backend() -> Option<Arc<dyn PdfBackend>> {
    Some(Arc::new(doctext_pdf_mupdf::MupdfBackend::new()))
}

#[cfg(not(feature = "pdf"))]
fn default_pdf_backend() -> Option<Arc<dyn PdfBackend>> {
    None
}
