// src/services/extract.rs
//! Raw text extraction from uploaded resume documents.
//!
//! The format is sniffed from the file bytes first and only falls back to
//! the filename extension when sniffing is inconclusive (plain text has no
//! magic bytes). DOCX uploads are recognized but rejected; there is no
//! decoder for them here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),
    #[error("document contains no extractable text")]
    EmptyDocument,
}

/// Resume document formats the upload endpoint accepts or recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Text => "txt",
        }
    }
}

/// Determine the document format from content, then filename.
pub fn detect_format(data: &[u8], filename: &str) -> Result<DocumentFormat, ExtractError> {
    if let Some(info) = infer::get(data) {
        match info.mime_type() {
            "application/pdf" => return Ok(DocumentFormat::Pdf),
            // DOCX sniffs as a zip container; infer resolves the inner type.
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                return Ok(DocumentFormat::Docx)
            }
            "application/zip" => return Ok(DocumentFormat::Docx),
            other => {
                return Err(ExtractError::UnsupportedFormat(other.to_string()));
            }
        }
    }

    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => Ok(DocumentFormat::Pdf),
        "docx" | "doc" => Ok(DocumentFormat::Docx),
        "txt" | "text" | "md" | "" => Ok(DocumentFormat::Text),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

/// Extract raw text from an uploaded document.
pub fn extract_text(data: &[u8], filename: &str) -> Result<String, ExtractError> {
    let format = detect_format(data, filename)?;
    let text = match format {
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        DocumentFormat::Docx => {
            return Err(ExtractError::UnsupportedFormat(
                DocumentFormat::Docx.as_str().to_string(),
            ))
        }
        DocumentFormat::Text => String::from_utf8_lossy(data).into_owned(),
    };

    if text.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_pdf_from_magic_bytes() {
        let data = b"%PDF-1.7 rest of document";
        assert_eq!(
            detect_format(data, "anything.bin").unwrap(),
            DocumentFormat::Pdf
        );
    }

    #[test]
    fn test_plain_text_falls_back_to_extension() {
        let data = "姓名：张三".as_bytes();
        assert_eq!(
            detect_format(data, "resume.txt").unwrap(),
            DocumentFormat::Text
        );
        assert_eq!(
            detect_format(data, "resume.TXT").unwrap(),
            DocumentFormat::Text
        );
    }

    #[test]
    fn test_docx_extension_is_recognized_but_extraction_fails() {
        let data = "not really a docx".as_bytes();
        assert_eq!(
            detect_format(data, "resume.docx").unwrap(),
            DocumentFormat::Docx
        );
        assert!(matches!(
            extract_text(data, "resume.docx"),
            Err(ExtractError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_text_extraction_passes_content_through() {
        let data = "熟悉Python和Docker".as_bytes();
        assert_eq!(
            extract_text(data, "resume.txt").unwrap(),
            "熟悉Python和Docker"
        );
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert!(matches!(
            extract_text(b"   \n\t ", "resume.txt"),
            Err(ExtractError::EmptyDocument)
        ));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(matches!(
            detect_format("plain".as_bytes(), "resume.exe"),
            Err(ExtractError::UnsupportedFormat(_))
        ));
    }
}
