//! In-memory implementation of the folder and file stores.
//!
//! Mirrors the PostgreSQL schema's behavior: foreign keys are checked on
//! write, deleting a folder cascades to its descendants and their files,
//! and searches are case-insensitive substring matches. Every trait call
//! is counted so callers can assert that a code path never reached the
//! store.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId};
use explorer_entity::file::{CreateFile, File, UpdateFile};
use explorer_entity::folder::{CreateFolder, Folder, UpdateFolder};

use crate::store::{FileStore, FolderStore};

#[derive(Debug, Default)]
struct State {
    folders: HashMap<FolderId, Folder>,
    files: HashMap<FileId, File>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl State {
    /// Wall-clock time, bumped so consecutive writes never share a timestamp.
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(next);
        next
    }

    /// `root` plus every folder beneath it.
    fn subtree(&self, root: FolderId) -> HashSet<FolderId> {
        let mut children: HashMap<FolderId, Vec<FolderId>> = HashMap::new();
        for folder in self.folders.values() {
            if let Some(parent_id) = folder.parent_id {
                children.entry(parent_id).or_default().push(folder.id);
            }
        }

        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(kids) = children.get(&id) {
                queue.extend(kids.iter().copied());
            }
        }
        seen
    }
}

fn newest_first(files: &mut [File]) {
    files.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
}

fn by_name(folders: &mut [Folder]) {
    folders.sort_by(Folder::display_order);
}

fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

/// Shared in-memory folder and file store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
    calls: Arc<AtomicUsize>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations invoked so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of folder rows currently stored.
    pub async fn folder_count(&self) -> usize {
        self.state.read().await.folders.len()
    }

    /// Number of file rows currently stored.
    pub async fn file_count(&self) -> usize {
        self.state.read().await.files.len()
    }

    /// Insert a folder row as-is, bypassing foreign key checks.
    pub async fn insert_folder_raw(&self, folder: Folder) {
        self.state.write().await.folders.insert(folder.id, folder);
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn get_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        self.record();
        Ok(self.state.read().await.folders.get(&id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<Folder>> {
        self.record();
        Ok(self.state.read().await.folders.values().cloned().collect())
    }

    async fn get_children(&self, parent_id: Option<FolderId>) -> AppResult<Vec<Folder>> {
        self.record();
        let state = self.state.read().await;
        let mut children: Vec<Folder> = state
            .folders
            .values()
            .filter(|f| f.parent_id == parent_id)
            .cloned()
            .collect();
        by_name(&mut children);
        Ok(children)
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        self.record();
        let mut state = self.state.write().await;
        if let Some(parent_id) = data.parent_id {
            if !state.folders.contains_key(&parent_id) {
                return Err(AppError::not_found("Parent folder not found"));
            }
        }

        let now = state.tick();
        let folder = Folder {
            id: FolderId::new(),
            name: data.name.clone(),
            parent_id: data.parent_id,
            created_at: now,
            updated_at: now,
        };
        state.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn update(&self, id: FolderId, data: &UpdateFolder) -> AppResult<Option<Folder>> {
        self.record();
        let mut state = self.state.write().await;
        if !state.folders.contains_key(&id) {
            return Ok(None);
        }
        if data.is_empty() {
            return Ok(state.folders.get(&id).cloned());
        }
        if let Some(Some(parent_id)) = data.parent_id {
            if !state.folders.contains_key(&parent_id) {
                return Err(AppError::not_found("Parent folder not found"));
            }
        }

        let now = state.tick();
        let Some(folder) = state.folders.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(ref name) = data.name {
            folder.name = name.clone();
        }
        if let Some(parent_id) = data.parent_id {
            folder.parent_id = parent_id;
        }
        folder.updated_at = now;
        Ok(Some(folder.clone()))
    }

    async fn descendant_ids(&self, id: FolderId) -> AppResult<Vec<FolderId>> {
        self.record();
        let state = self.state.read().await;
        let mut ids = state.subtree(id);
        ids.remove(&id);
        Ok(ids.into_iter().collect())
    }

    async fn delete(&self, id: FolderId) -> AppResult<bool> {
        self.record();
        let mut state = self.state.write().await;
        if !state.folders.contains_key(&id) {
            return Ok(false);
        }

        let doomed = state.subtree(id);
        state.folders.retain(|folder_id, _| !doomed.contains(folder_id));
        let before = state.files.len();
        state.files.retain(|_, file| !doomed.contains(&file.folder_id));
        debug!(
            folder_id = %id,
            folders = doomed.len(),
            files = before - state.files.len(),
            "Cascade delete"
        );
        Ok(true)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Folder>> {
        self.record();
        let needle = query.to_lowercase();
        let state = self.state.read().await;
        let mut matches: Vec<Folder> = state
            .folders
            .values()
            .filter(|f| name_matches(&f.name, &needle))
            .cloned()
            .collect();
        by_name(&mut matches);
        Ok(matches)
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.record();
        Ok(true)
    }
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn get_by_id(&self, id: FileId) -> AppResult<Option<File>> {
        self.record();
        Ok(self.state.read().await.files.get(&id).cloned())
    }

    async fn get_by_folder_id(&self, folder_id: FolderId) -> AppResult<Vec<File>> {
        self.record();
        let state = self.state.read().await;
        let mut files: Vec<File> = state
            .files
            .values()
            .filter(|f| f.folder_id == folder_id)
            .cloned()
            .collect();
        newest_first(&mut files);
        Ok(files)
    }

    async fn get_all_in_subtree(&self, folder_id: FolderId) -> AppResult<Vec<File>> {
        self.record();
        let state = self.state.read().await;
        if !state.folders.contains_key(&folder_id) {
            return Ok(Vec::new());
        }
        let scope = state.subtree(folder_id);
        let mut files: Vec<File> = state
            .files
            .values()
            .filter(|f| scope.contains(&f.folder_id))
            .cloned()
            .collect();
        newest_first(&mut files);
        Ok(files)
    }

    async fn create(&self, data: &CreateFile) -> AppResult<File> {
        self.record();
        let mut state = self.state.write().await;
        if !state.folders.contains_key(&data.folder_id) {
            return Err(AppError::not_found("Folder not found"));
        }
        if data.size < 0 {
            return Err(AppError::validation("File size cannot be negative"));
        }

        let now = state.tick();
        let file = File {
            id: FileId::new(),
            name: data.name.clone(),
            folder_id: data.folder_id,
            size: data.size,
            mime_type: data.mime_type.clone(),
            created_at: now,
            updated_at: now,
        };
        state.files.insert(file.id, file.clone());
        Ok(file)
    }

    async fn update(&self, id: FileId, data: &UpdateFile) -> AppResult<Option<File>> {
        self.record();
        let mut state = self.state.write().await;
        if !state.files.contains_key(&id) {
            return Ok(None);
        }
        if data.is_empty() {
            return Ok(state.files.get(&id).cloned());
        }
        if let Some(folder_id) = data.folder_id {
            if !state.folders.contains_key(&folder_id) {
                return Err(AppError::not_found("Folder not found"));
            }
        }
        if data.size.is_some_and(|size| size < 0) {
            return Err(AppError::validation("File size cannot be negative"));
        }

        let now = state.tick();
        let Some(file) = state.files.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(ref name) = data.name {
            file.name = name.clone();
        }
        if let Some(folder_id) = data.folder_id {
            file.folder_id = folder_id;
        }
        if let Some(size) = data.size {
            file.size = size;
        }
        if let Some(ref mime_type) = data.mime_type {
            file.mime_type = mime_type.clone();
        }
        file.updated_at = now;
        Ok(Some(file.clone()))
    }

    async fn delete(&self, id: FileId) -> AppResult<bool> {
        self.record();
        Ok(self.state.write().await.files.remove(&id).is_some())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<File>> {
        self.record();
        let needle = query.to_lowercase();
        let state = self.state.read().await;
        let mut matches: Vec<File> = state
            .files
            .values()
            .filter(|f| name_matches(&f.name, &needle))
            .cloned()
            .collect();
        newest_first(&mut matches);
        Ok(matches)
    }
}
