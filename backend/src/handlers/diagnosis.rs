//! HTTP handlers for leaf image diagnosis

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::services::{DiagnosisResponse, DiagnosisService, ImageUpload};
use crate::AppState;

/// Diagnose an uploaded leaf image
///
/// Multipart fields: `file` (required image) and `location` (optional).
pub async fn diagnose(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DiagnosisResponse>> {
    let mut upload = None;
    let mut location = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidUpload(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InvalidUpload(e.to_string()))?;
                upload = Some(ImageUpload {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            Some("location") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidUpload(e.to_string()))?;
                location = Some(text);
            }
            _ => {}
        }
    }

    let upload = upload
        .ok_or_else(|| AppError::InvalidUpload("No file part in the request.".to_string()))?;
    if upload.filename.is_empty() {
        return Err(AppError::InvalidUpload(
            "No file selected. Please upload an image.".to_string(),
        ));
    }

    let service = DiagnosisService::new(&state.config, state.scenarios.clone());
    let response = service.diagnose(upload, location).await?;
    Ok(Json(response))
}
