//! Core type definitions used across the Explorer workspace.

pub mod id;

pub use id::{FileId, FolderId};
