//! Axum route handlers for the Interview API.

use std::collections::HashMap;

use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        rejection::JsonRejection,
        State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::interview::generator::{generate_and_store, generate_items};
use crate::interview::models::{
    InterviewQnaRequest, InterviewQnaResponse, JobDetails, QuestionType,
};
use crate::interview::prompts::build_typed_interview_prompt;
use crate::state::AppState;

const CV_FILE_FIELD: &str = "cv_file";
const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type. Only PDF and DOCX are supported.";

// ────────────────────────────────────────────────────────────────────────────
// Multipart form handling
// ────────────────────────────────────────────────────────────────────────────

struct UploadedFile {
    filename: Option<String>,
    bytes: Bytes,
}

/// A fully-buffered multipart form: the `cv_file` part plus text fields.
struct UploadForm {
    file: Option<UploadedFile>,
    fields: HashMap<String, String>,
}

/// Oversized bodies surface while streaming fields and keep their 413.
fn invalid_multipart(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(format!("Request body too large: {e}"));
    }
    AppError::Validation(format!("Invalid multipart body: {e}"))
}

impl UploadForm {
    async fn read(
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Self, AppError> {
        let mut multipart = multipart
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?;

        let mut form = UploadForm {
            file: None,
            fields: HashMap::new(),
        };

        while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == CV_FILE_FIELD {
                let filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(invalid_multipart)?;
                form.file = Some(UploadedFile { filename, bytes });
            } else {
                let value = field.text().await.map_err(invalid_multipart)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    fn take_field(&mut self, name: &str) -> Result<String, AppError> {
        self.fields
            .remove(name)
            .ok_or_else(|| AppError::Validation(format!("Missing form field: {name}")))
    }

    fn take_job(&mut self) -> Result<JobDetails, AppError> {
        Ok(JobDetails {
            job_title: self.take_field("job_title")?,
            job_requirements: self.take_field("job_requirements")?,
            job_description: self.take_field("job_description")?,
        })
    }

    /// Returns the uploaded CV, rejecting a missing part or an empty body.
    fn take_file(&mut self) -> Result<UploadedFile, AppError> {
        let file = self
            .file
            .take()
            .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
        if file.bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        Ok(file)
    }
}

/// Decodes bytes as UTF-8, dropping invalid sequences instead of replacing them.
fn decode_text_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /interview/upload
///
/// Extracts text from an uploaded PDF/DOCX CV, generates mixed-type Q&A,
/// and stores the result under `user_id`.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<InterviewQnaResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;

    let file = form.take_file()?;
    let filename = file
        .filename
        .clone()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    let user_id = form.take_field("user_id")?;
    let job = form.take_job()?;

    let kind = DocumentKind::from_filename(&filename)
        .ok_or_else(|| AppError::Validation(UNSUPPORTED_FILE_TYPE.to_string()))?;

    info!("Generating interview Q&A from {filename} ({kind:?}) for user {user_id}");

    let cv_text = extract_text(file.bytes, kind).await?;
    let items =
        generate_and_store(state.llm.as_ref(), state.store.as_ref(), &user_id, &cv_text, &job)
            .await?;

    Ok(Json(InterviewQnaResponse { items }))
}

/// POST /interview/generate-type
///
/// Generates Q&A restricted to one question type. The uploaded file is
/// decoded as text without document parsing, and nothing is stored.
pub async fn handle_generate_by_type(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<InterviewQnaResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;

    let job = form.take_job()?;
    let question_type: QuestionType = form
        .take_field("type")?
        .parse()
        .map_err(|e| {
            warn!("Rejected typed generation: {e}");
            AppError::Validation("Invalid type specified".to_string())
        })?;
    let file = form.take_file()?;

    info!("Generating '{question_type}' interview Q&A");

    let cv_text = decode_text_ignoring_invalid(&file.bytes);
    let prompt = build_typed_interview_prompt(&cv_text, &job, question_type);
    let items = generate_items(state.llm.as_ref(), &prompt).await?;

    Ok(Json(InterviewQnaResponse { items }))
}

/// POST /interview
///
/// Same pipeline as the upload endpoint for callers that already have CV text.
pub async fn handle_generate_from_text(
    State(state): State<AppState>,
    request: Result<Json<InterviewQnaRequest>, JsonRejection>,
) -> Result<Json<InterviewQnaResponse>, AppError> {
    let Json(request) = request.map_err(|e| AppError::Validation(e.body_text()))?;

    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }

    let items = generate_and_store(
        state.llm.as_ref(),
        state.store.as_ref(),
        &request.user_id,
        &request.cv_text,
        &request.job,
    )
    .await?;

    Ok(Json(InterviewQnaResponse { items }))
}
