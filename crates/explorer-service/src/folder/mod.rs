//! Folder management and tree materialization.

pub mod service;
pub mod tree;

pub use service::{FolderService, SearchResults};
pub use tree::build_forest;
