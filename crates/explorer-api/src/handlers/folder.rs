//! Folder CRUD, tree and search handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::json;

use explorer_entity::folder::UpdateFolder;

use crate::dto::request::{CreateFolderRequest, ListFilesQuery, SearchQuery, UpdateFolderRequest};
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, parse_folder_id, parse_parent_id};
use crate::state::AppState;

/// GET /api/v1/folders
pub async fn list_root_folders(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folders = state.folder_service.get_children(None).await?;
    Ok(Json(json!({ "success": true, "data": folders })))
}

/// GET /api/v1/folders/tree
pub async fn get_tree(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let tree = state.folder_service.build_tree().await?;
    Ok(Json(json!({ "success": true, "data": tree })))
}

/// GET /api/v1/folders/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let results = state
        .folder_service
        .search(query.q.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!({ "success": true, "data": results })))
}

/// GET /api/v1/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state.folder_service.get_folder(parse_folder_id(&id)?).await?;
    Ok(Json(json!({ "success": true, "data": folder })))
}

/// GET /api/v1/folders/{id}/children
pub async fn list_children(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_folder_id(&id)?;
    let children = state.folder_service.get_children(Some(id)).await?;
    Ok(Json(json!({ "success": true, "data": children })))
}

/// GET /api/v1/folders/{id}/files[?recursive=true]
pub async fn list_files(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_folder_id(&id)?;
    let files = if query.is_recursive() {
        state.file_service.list_files_in_subtree(id).await?
    } else {
        state.file_service.list_files(id).await?
    };
    Ok(Json(json!({ "success": true, "data": files })))
}

/// POST /api/v1/folders
pub async fn create_folder(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let parent_id = parse_parent_id(req.parent_id.as_deref())?;
    let folder = state
        .folder_service
        .create_folder(&req.name, parent_id)
        .await?;
    Ok(Json(json!({ "success": true, "data": folder })))
}

/// PUT /api/v1/folders/{id}
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateFolderRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_folder_id(&id)?;

    let mut update = UpdateFolder::new();
    if let Some(name) = req.name {
        update = update.name(name);
    }
    if let Some(parent) = req.parent_id {
        update = update.parent_id(parse_parent_id(parent.as_deref())?);
    }

    let folder = state.folder_service.update_folder(id, update).await?;
    Ok(Json(json!({ "success": true, "data": folder })))
}

/// DELETE /api/v1/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.folder_service.delete_folder(parse_folder_id(&id)?).await?;
    Ok(Json(
        json!({ "success": true, "message": "Folder deleted" }),
    ))
}
