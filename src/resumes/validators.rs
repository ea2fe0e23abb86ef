// src/resumes/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

/// Upper bound on text submitted to the parse-text endpoint, in characters.
pub const MAX_TEXT_CHARS: usize = 200_000;

// ============================================================================
// Resume Upload Validators
// ============================================================================

pub struct ResumeUploadValidator;

impl Validator<ResumeUpload> for ResumeUploadValidator {
    fn validate(&self, data: &ResumeUpload) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.filename.trim().is_empty() {
            result.add_error("filename", "Filename is required");
        } else if data.filename.len() > 255 {
            result.add_error("filename", "Filename must be less than 255 characters");
        }

        if data.data.is_empty() {
            result.add_error("resume", "Uploaded file is empty");
        }

        result
    }
}

// ============================================================================
// Parse Text Validators
// ============================================================================

pub struct ParseTextValidator;

impl Validator<ParseTextRequest> for ParseTextValidator {
    fn validate(&self, data: &ParseTextRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.text.trim().is_empty() {
            result.add_error("text", "Resume text is required");
        } else if data.text.chars().count() > MAX_TEXT_CHARS {
            result.add_error(
                "text",
                &format!("Resume text must be at most {} characters", MAX_TEXT_CHARS),
            );
        }

        result
    }
}
