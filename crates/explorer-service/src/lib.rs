//! # explorer-service
//!
//! Domain services for the explorer. Services hold shared store handles
//! and enforce the hierarchy rules (name checks, existence checks, cycle
//! prevention) before delegating to the stores.

pub mod file;
pub mod folder;

pub use file::{FileService, NewFile};
pub use folder::{FolderService, SearchResults};
