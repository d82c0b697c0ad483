//! Route definitions for the Explorer HTTP API.
//!
//! Resource routes are mounted under `/api/v1`; the banner and health
//! check sit outside the versioned prefix.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logger.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(file_routes());

    Router::new()
        .route("/", get(handlers::health::banner))
        .route("/api/health", get(handlers::health::health))
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Folder CRUD, tree, listing and search
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::list_root_folders).post(handlers::folder::create_folder),
        )
        .route("/folders/tree", get(handlers::folder::get_tree))
        .route("/folders/search", get(handlers::folder::search))
        .route(
            "/folders/{id}",
            get(handlers::folder::get_folder)
                .put(handlers::folder::update_folder)
                .delete(handlers::folder::delete_folder),
        )
        .route("/folders/{id}/children", get(handlers::folder::list_children))
        .route("/folders/{id}/files", get(handlers::folder::list_files))
}

/// File CRUD and move
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", post(handlers::file::create_file))
        .route(
            "/files/{id}",
            get(handlers::file::get_file)
                .put(handlers::file::rename_file)
                .delete(handlers::file::delete_file),
        )
        .route("/files/{id}/move", put(handlers::file::move_file))
}
