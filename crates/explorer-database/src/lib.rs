//! # explorer-database
//!
//! Store traits for folders and files, their PostgreSQL repository
//! implementations, an in-memory store with the same semantics, and
//! connection/migration management.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use repositories::{FileRepository, FolderRepository};
pub use store::{FileStore, FolderStore};
