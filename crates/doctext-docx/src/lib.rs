//! DOCX paragraph text extraction.
//!
//! A `.docx` file is a ZIP archive whose document body lives in
//! `word/document.xml`. Extraction streams that entry through SAX-style
//! event processing, collecting the text of each `w:t` run and
//! terminating every `w:p` paragraph with a newline.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocxError {
    #[error("failed to open DOCX archive: {0}")]
    Open(String),
    #[error("no word/document.xml entry in archive")]
    MissingDocumentXml,
    #[error("malformed document XML: {0}")]
    Xml(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract the plain text of every paragraph in a DOCX file, in document
/// order. Each paragraph's text is followed by a newline; explicit line
/// breaks and tabs inside a paragraph are preserved as `\n` / `\t`.
pub fn extract_text(path: &Path) -> Result<String, DocxError> {
    let file = File::open(path)?;
    let mut archive =
        zip::ZipArchive::new(BufReader::new(file)).map_err(|e| DocxError::Open(e.to_string()))?;

    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|_| DocxError::MissingDocumentXml)?;

    let mut xml = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut xml)?;

    parse_document_xml(&xml)
}

/// Walk the WordprocessingML body, accumulating run text.
///
/// Elements are matched by local name, so the parser is indifferent to
/// the namespace prefix (in practice always `w`, but not mandated).
fn parse_document_xml(xml: &[u8]) -> Result<String, DocxError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::with_capacity(4096);
    let mut text = String::new();
    // Inside a <w:t> run; whitespace between elements is not content
    let mut in_run_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().local_name().as_ref() {
                b"t" => in_run_text = true,
                b"br" => text.push('\n'),
                b"tab" => text.push('\t'),
                _ => {}
            },

            Ok(Event::Empty(ref e)) => match e.name().local_name().as_ref() {
                b"br" => text.push('\n'),
                b"tab" => text.push('\t'),
                // Word writes empty paragraphs as self-closing <w:p/>
                b"p" => text.push('\n'),
                _ => {}
            },

            Ok(Event::Text(ref e)) => {
                if in_run_text {
                    let t = e.unescape().map_err(|err| DocxError::Xml(err.to_string()))?;
                    text.push_str(&t);
                }
            }

            Ok(Event::End(ref e)) => match e.name().local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },

            Ok(Event::Eof) => break,
            Err(e) => return Err(DocxError::Xml(e.to_string())),
            _ => {}
        }

        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn wrap_body(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body}</w:body>
</w:document>"#
        )
    }

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_end_with_newline() {
        let xml = wrap_body("<w:p><w:r><w:t>A</w:t></w:r></w:p><w:p><w:r><w:t>B</w:t></w:r></w:p>");
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "A\nB\n");
    }

    #[test]
    fn test_runs_within_paragraph_are_joined() {
        let xml = wrap_body("<w:p><w:r><w:t>Hello, </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p>");
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "Hello, world\n");
    }

    #[test]
    fn test_empty_paragraph_yields_bare_newline() {
        // Both the self-closing and the expanded form count as a paragraph
        let xml = wrap_body("<w:p><w:r><w:t>A</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>B</w:t></w:r></w:p>");
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "A\n\nB\n");

        let xml = wrap_body("<w:p><w:r><w:t>A</w:t></w:r></w:p><w:p></w:p>");
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "A\n\n");
    }

    #[test]
    fn test_breaks_and_tabs_are_preserved() {
        let xml = wrap_body("<w:p><w:r><w:t>left</w:t><w:tab/><w:t>right</w:t><w:br/><w:t>next</w:t></w:r></w:p>");
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "left\tright\nnext\n");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = wrap_body("<w:p><w:r><w:t>a &amp; b &lt;c&gt;</w:t></w:r></w:p>");
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "a & b <c>\n");
    }

    #[test]
    fn test_whitespace_outside_runs_is_ignored() {
        let xml = wrap_body("\n  <w:p>\n    <w:r><w:t>A</w:t></w:r>\n  </w:p>\n");
        assert_eq!(parse_document_xml(xml.as_bytes()).unwrap(), "A\n");
    }

    #[test]
    fn test_extracts_from_docx_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.docx");
        let xml = wrap_body("<w:p><w:r><w:t>from disk</w:t></w:r></w:p>");
        std::fs::write(&path, docx_bytes(&xml)).unwrap();

        assert_eq!(extract_text(&path).unwrap(), "from disk\n");
    }

    #[test]
    fn test_not_a_zip_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.docx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        assert!(matches!(extract_text(&path), Err(DocxError::Open(_))));
    }

    #[test]
    fn test_zip_without_document_xml_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.docx");

        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        zip.start_file("word/other.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<x/>").unwrap();
        let bytes = zip.finish().unwrap().into_inner();
        std::fs::write(&path, bytes).unwrap();

        assert!(matches!(
            extract_text(&path),
            Err(DocxError::MissingDocumentXml)
        ));
    }
}
