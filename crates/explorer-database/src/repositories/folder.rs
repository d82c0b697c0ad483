//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::types::FolderId;
use explorer_entity::folder::{CreateFolder, Folder, UpdateFolder};

use super::escape_like;
use crate::store::FolderStore;

const FOLDER_COLUMNS: &str = "id, name, parent_id, created_at, updated_at";

/// PostgreSQL repository for folder rows.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a failed write, turning a dangling `parent_id` into a not-found error.
fn map_write_error(e: sqlx::Error, action: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::not_found("Parent folder not found")
        }
        _ => AppError::with_source(ErrorKind::Database, format!("Failed to {action} folder"), e),
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn get_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(&format!("SELECT {FOLDER_COLUMNS} FROM folders WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn get_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!("SELECT {FOLDER_COLUMNS} FROM folders"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn get_children(&self, parent_id: Option<FolderId>) -> AppResult<Vec<Folder>> {
        let filter = match parent_id {
            Some(_) => "parent_id = $1",
            None => "parent_id IS NULL",
        };
        let sql = format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE {filter} ORDER BY LOWER(name), created_at, id"
        );

        let mut query = sqlx::query_as::<_, Folder>(&sql);
        if let Some(parent_id) = parent_id {
            query = query.bind(parent_id);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(&format!(
            "INSERT INTO folders (name, parent_id) VALUES ($1, $2) RETURNING {FOLDER_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "create"))
    }

    async fn update(&self, id: FolderId, data: &UpdateFolder) -> AppResult<Option<Folder>> {
        if data.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE folders SET updated_at = NOW()");

        if let Some(ref name) = data.name {
            query.push(", name = ");
            query.push_bind(name);
        }

        if let Some(parent_id) = data.parent_id {
            query.push(", parent_id = ");
            query.push_bind(parent_id);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.push(format!(" RETURNING {FOLDER_COLUMNS}"));

        query
            .build_query_as::<Folder>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "update"))
    }

    async fn descendant_ids(&self, id: FolderId) -> AppResult<Vec<FolderId>> {
        sqlx::query_scalar::<_, FolderId>(
            "WITH RECURSIVE tree AS ( \
                SELECT id FROM folders WHERE parent_id = $1 \
                UNION \
                SELECT f.id FROM folders f INNER JOIN tree t ON f.parent_id = t.id \
             ) SELECT id FROM tree",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list descendants", e))
    }

    async fn delete(&self, id: FolderId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders \
             WHERE name ILIKE '%' || $1 || '%' ESCAPE '\\' \
             ORDER BY LOWER(name), created_at, id"
        ))
        .bind(escape_like(query))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search folders", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
