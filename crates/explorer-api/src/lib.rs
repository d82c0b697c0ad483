//! # explorer-api
//!
//! HTTP API layer for Explorer built on Axum: REST endpoints for folders
//! and files, middleware (CORS, compression, logging), extractors, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
