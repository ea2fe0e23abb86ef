// src/services/resume_service.rs
//! Resume parsing service.
//!
//! Thin orchestration over the extraction step and the parser. Behind a
//! trait so handlers can be exercised with a scripted implementation.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::common::error::ApiError;
use crate::parser::{ParseError, ParsedResume, ResumeParser};
use crate::services::extract::{self, ExtractError};

#[derive(Debug, Error)]
pub enum ResumeServiceError {
    #[error(transparent)]
    Extraction(#[from] ExtractError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<ResumeServiceError> for ApiError {
    fn from(err: ResumeServiceError) -> Self {
        match err {
            ResumeServiceError::Extraction(ExtractError::UnsupportedFormat(fmt)) => {
                ApiError::UnsupportedMedia(format!("Unsupported document format: {}", fmt))
            }
            ResumeServiceError::Extraction(ExtractError::EmptyDocument) => {
                ApiError::BadRequest("Document contains no extractable text".to_string())
            }
            ResumeServiceError::Extraction(ExtractError::Pdf(e)) => {
                ApiError::ProcessingError(format!("Failed to extract PDF text: {}", e))
            }
            ResumeServiceError::Parse(e) => {
                ApiError::ProcessingError(format!("Failed to parse resume: {}", e))
            }
        }
    }
}

#[async_trait]
pub trait ResumeService: Send + Sync {
    /// Extract text from an uploaded document and parse it.
    async fn parse_upload(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<ParsedResume, ResumeServiceError>;

    /// Parse resume text submitted directly.
    async fn parse_text(&self, text: &str) -> Result<ParsedResume, ResumeServiceError>;
}

/// Production implementation backed by the rule-based parser.
pub struct ParserResumeService {
    parser: Arc<ResumeParser>,
}

impl ParserResumeService {
    pub fn new(parser: Arc<ResumeParser>) -> Self {
        Self { parser }
    }
}

#[async_trait]
impl ResumeService for ParserResumeService {
    async fn parse_upload(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<ParsedResume, ResumeServiceError> {
        let text = extract::extract_text(data, filename)?;
        info!(
            filename = %filename,
            bytes = data.len(),
            chars = text.chars().count(),
            "Extracted resume text from upload"
        );
        Ok(self.parser.parse(&text)?)
    }

    async fn parse_text(&self, text: &str) -> Result<ParsedResume, ResumeServiceError> {
        Ok(self.parser.parse(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ParserResumeService {
        ParserResumeService::new(Arc::new(ResumeParser::new()))
    }

    #[tokio::test]
    async fn test_parse_text_produces_structured_resume() {
        let parsed = service()
            .parse_text("姓名：李娜。熟悉Python和MySQL。")
            .await
            .unwrap();
        assert_eq!(parsed.name, "李娜");
        assert!(parsed.skills.contains("Python"));
    }

    #[tokio::test]
    async fn test_parse_upload_rejects_unknown_format() {
        let err = service()
            .parse_upload("resume.exe", "binary".as_bytes())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ResumeServiceError::Extraction(ExtractError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_parse_upload_reads_plain_text() {
        let parsed = service()
            .parse_upload("resume.txt", "熟悉Docker。".as_bytes())
            .await
            .unwrap();
        assert!(parsed.skills.contains("Docker"));
    }
}
