// Application state shared across all modules

use std::sync::Arc;

use crate::parser::ResumeParser;
use crate::services::ResumeService;

/// Application state containing the parser, services, and configuration
#[derive(Clone)]
pub struct AppState {
    pub parser: Arc<ResumeParser>,
    pub resume_service: Arc<dyn ResumeService>,
    pub max_upload_bytes: usize,
}
