//! Document decoding — turns an uploaded file into raw text.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file type: {0}. Allowed: .pdf, .docx, .txt")]
    UnsupportedType(String),

    #[error("Could not extract text from PDF: {0}")]
    Pdf(String),

    #[error("Could not extract text from DOCX: {0}")]
    Docx(String),

    #[error("Document contains no extractable text")]
    Empty,

    #[error("Decoding task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    /// Classifies by file extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, DocumentError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "txt" => Ok(DocumentKind::Text),
            "" => Err(DocumentError::UnsupportedType("(no extension)".to_string())),
            other => Err(DocumentError::UnsupportedType(format!(".{other}"))),
        }
    }
}

/// Decodes an uploaded document. PDF and DOCX extraction are CPU-bound and run on the blocking pool.
pub async fn decode_document(file_name: &str, bytes: Vec<u8>) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_file_name(file_name)?;
    debug!(file_name, ?kind, size = bytes.len(), "Decoding document");

    let text = match kind {
        DocumentKind::Text => String::from_utf8_lossy(&bytes).into_owned(),
        DocumentKind::Pdf => {
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                .await?
                .map_err(|e| DocumentError::Pdf(e.to_string()))?
        }
        DocumentKind::Docx => {
            tokio::task::spawn_blocking(move || extract_docx_text(&bytes)).await??
        }
    };

    if text.trim().is_empty() {
        warn!(file_name, "Decoded document is empty");
        return Err(DocumentError::Empty);
    }
    Ok(text)
}

/// Pulls paragraph text out of `word/document.xml`. Paragraphs and breaks become newlines.
fn extract_docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_run_text = false;
    loop {
        match reader.read_event().map_err(docx_error)? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_run_text => {
                text.push_str(&e.unescape().map_err(docx_error)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}

fn docx_error(e: impl std::fmt::Display) -> DocumentError {
    DocumentError::Docx(e.to_string())
}

/// Minimal in-memory `.docx` holding one paragraph per entry.
#[cfg(test)]
pub(crate) fn docx_from_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::FileOptions::default();
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer
        .write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
        .unwrap();
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}
