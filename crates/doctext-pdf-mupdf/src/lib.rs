use std::path::Path;

use mupdf::{Document, TextPageFlags};

use doctext_core::{BackendError, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so that non-PDF code paths do not transitively
/// depend on it. Builds that disable the `pdf` feature of doctext-ingest
/// leave this crate out entirely.
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MupdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for MupdfBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::Open("invalid path encoding".into()))?;

        let document = Document::open(path_str).map_err(|e| BackendError::Open(e.to_string()))?;

        let mut text = String::new();

        for page_result in document
            .pages()
            .map_err(|e| BackendError::Extraction(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::Extraction(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::Extraction(e.to_string()))?;

            // One newline per text line; pages concatenate in order
            // with no extra separator.
            for block in text_page.blocks() {
                for line in block.lines() {
                    for c in line.chars() {
                        text.push(c.char().unwrap_or('\u{FFFD}'));
                    }
                    text.push('\n');
                }
            }
        }

        Ok(text)
    }
}
