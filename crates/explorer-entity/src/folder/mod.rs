//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::{CreateFolder, Folder, UpdateFolder};
pub use tree::FolderNode;
