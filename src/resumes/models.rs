// src/resumes/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parser::ParsedResume;

/// Request body for POST /api/resumes/parse-text
#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

/// An uploaded resume document, collected from the multipart body.
#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Response body for both parse endpoints
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub parse_id: String,
    pub parsed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub resume: ParsedResume,
}
