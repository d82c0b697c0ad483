//! # explorer-entity
//!
//! Domain entity models for Explorer. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities derive `sqlx::FromRow` and serialize with camelCase field
//! names on the wire.

pub mod file;
pub mod folder;

pub use file::{CreateFile, File, UpdateFile};
pub use folder::{CreateFolder, Folder, FolderNode, UpdateFolder};
