// src/services/mod.rs
//
// Shared services module containing business logic services
// that can be used across different domain modules

pub mod extract;
pub mod resume_service;

// Re-export commonly used types for convenience
pub use extract::{extract_text, DocumentFormat, ExtractError};
pub use resume_service::{ParserResumeService, ResumeService, ResumeServiceError};
