//! File repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId};
use explorer_entity::file::{CreateFile, File, UpdateFile};

use super::escape_like;
use crate::store::FileStore;

const FILE_COLUMNS: &str = "id, name, folder_id, size, mime_type, created_at, updated_at";

/// PostgreSQL repository for file rows.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count the files directly inside a folder.
    pub async fn count_by_folder(&self, folder_id: FolderId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM files WHERE folder_id = $1")
            .bind(folder_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))
    }
}

fn map_write_error(e: sqlx::Error, action: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::not_found("Folder not found")
        }
        sqlx::Error::Database(ref db_err) if db_err.is_check_violation() => {
            AppError::validation("File size cannot be negative")
        }
        _ => AppError::with_source(ErrorKind::Database, format!("Failed to {action} file"), e),
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn get_by_id(&self, id: FileId) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>(&format!("SELECT {FILE_COLUMNS} FROM files WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn get_by_folder_id(&self, folder_id: FolderId) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE folder_id = $1 ORDER BY created_at DESC"
        ))
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn get_all_in_subtree(&self, folder_id: FolderId) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(&format!(
            "WITH RECURSIVE subtree AS ( \
                SELECT id FROM folders WHERE id = $1 \
                UNION ALL \
                SELECT f.id FROM folders f INNER JOIN subtree s ON f.parent_id = s.id \
             ) \
             SELECT {FILE_COLUMNS} FROM files \
             WHERE folder_id IN (SELECT id FROM subtree) \
             ORDER BY created_at DESC"
        ))
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list files in subtree", e)
        })
    }

    async fn create(&self, data: &CreateFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(&format!(
            "INSERT INTO files (name, folder_id, size, mime_type) \
             VALUES ($1, $2, $3, $4) RETURNING {FILE_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.folder_id)
        .bind(data.size)
        .bind(&data.mime_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "create"))
    }

    async fn update(&self, id: FileId, data: &UpdateFile) -> AppResult<Option<File>> {
        if data.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE files SET updated_at = NOW()");

        if let Some(ref name) = data.name {
            query.push(", name = ");
            query.push_bind(name);
        }

        if let Some(folder_id) = data.folder_id {
            query.push(", folder_id = ");
            query.push_bind(folder_id);
        }

        if let Some(size) = data.size {
            query.push(", size = ");
            query.push_bind(size);
        }

        if let Some(ref mime_type) = data.mime_type {
            query.push(", mime_type = ");
            query.push_bind(mime_type.clone());
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.push(format!(" RETURNING {FILE_COLUMNS}"));

        query
            .build_query_as::<File>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "update"))
    }

    async fn delete(&self, id: FileId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(&format!(
            "SELECT {FILE_COLUMNS} FROM files \
             WHERE name ILIKE '%' || $1 || '%' ESCAPE '\\' ORDER BY created_at DESC"
        ))
        .bind(escape_like(query))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search files", e))
    }
}
