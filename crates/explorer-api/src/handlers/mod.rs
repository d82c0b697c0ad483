//! HTTP request handlers grouped by resource.

pub mod file;
pub mod folder;
pub mod health;
