// src/resumes/handlers.rs
//! Resume parsing endpoints

use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::common::{generate_parse_id, ApiError, AppState, Validator};

use super::models::{ParseResponse, ParseTextRequest, ResumeUpload};
use super::validators::{ParseTextValidator, ResumeUploadValidator};

/// POST /api/resumes/parse - Upload a resume document and parse it
pub async fn parse_resume_upload(
    Extension(state): Extension<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut filename = String::new();
    let mut file_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Invalid multipart body".to_string()))?
    {
        match field.name() {
            Some("resume") | Some("file") => {
                if let Some(name) = field.file_name() {
                    filename = name.to_string();
                }
                file_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|_| ApiError::BadRequest("Invalid file".to_string()))?
                        .to_vec(),
                );
            }
            _ => {}
        }
    }

    let data = file_data.ok_or_else(|| ApiError::BadRequest("No resume provided".to_string()))?;

    if data.len() > state.max_upload_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "Upload exceeds the {} byte limit",
            state.max_upload_bytes
        )));
    }

    let upload = ResumeUpload {
        filename,
        data,
    };
    let validation = ResumeUploadValidator.validate(&upload);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let resume = state
        .resume_service
        .parse_upload(&upload.filename, &upload.data)
        .await?;

    let parse_id = generate_parse_id();
    info!(
        parse_id = %parse_id,
        filename = %upload.filename,
        bytes = upload.data.len(),
        name = %resume.name,
        skills = resume.skills.len(),
        "Resume upload parsed"
    );

    Ok((
        StatusCode::OK,
        Json(ParseResponse {
            parse_id,
            parsed_at: Utc::now(),
            filename: Some(upload.filename),
            resume,
        }),
    ))
}

/// POST /api/resumes/parse-text - Parse resume text submitted as JSON
pub async fn parse_resume_text(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<ParseTextRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation = ParseTextValidator.validate(&request);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let resume = state.resume_service.parse_text(&request.text).await?;

    let parse_id = generate_parse_id();
    info!(
        parse_id = %parse_id,
        chars = request.text.chars().count(),
        name = %resume.name,
        skills = resume.skills.len(),
        "Resume text parsed"
    );

    Ok((
        StatusCode::OK,
        Json(ParseResponse {
            parse_id,
            parsed_at: Utc::now(),
            filename: None,
            resume,
        }),
    ))
}
