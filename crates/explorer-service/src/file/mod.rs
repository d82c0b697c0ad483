//! File metadata management.

pub mod service;

pub use service::{FileService, NewFile};
