//! File CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::json;

use explorer_service::NewFile;

use crate::dto::request::{CreateFileRequest, MoveFileRequest, RenameFileRequest};
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, parse_file_id, parse_folder_id};
use crate::state::AppState;

/// GET /api/v1/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let file = state.file_service.get_file(parse_file_id(&id)?).await?;
    Ok(Json(json!({ "success": true, "data": file })))
}

/// POST /api/v1/files
pub async fn create_file(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFileRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder_id = parse_folder_id(&req.folder_id)?;
    let file = state
        .file_service
        .create_file(NewFile {
            name: req.name,
            folder_id,
            mime_type: req.mime_type,
            size: req.size,
        })
        .await?;
    Ok(Json(json!({ "success": true, "data": file })))
}

/// PUT /api/v1/files/{id}
pub async fn rename_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<RenameFileRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_file_id(&id)?;
    let file = state.file_service.rename_file(id, &req.name).await?;
    Ok(Json(json!({ "success": true, "data": file })))
}

/// PUT /api/v1/files/{id}/move
pub async fn move_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<MoveFileRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_file_id(&id)?;
    let target = parse_folder_id(&req.target_folder_id)?;
    let file = state.file_service.move_file(id, target).await?;
    Ok(Json(json!({ "success": true, "data": file })))
}

/// DELETE /api/v1/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.file_service.delete_file(parse_file_id(&id)?).await?;
    Ok(Json(json!({ "success": true, "message": "File deleted" })))
}
