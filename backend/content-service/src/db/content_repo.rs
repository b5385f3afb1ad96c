use super::ContentStore;
use crate::error;
use crate::models::{Content, ContentRecord};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a content row; the database generates the id.
pub async fn insert_content(
    pool: &PgPool,
    content: &Content,
) -> Result<ContentRecord, sqlx::Error> {
    sqlx::query_as::<_, ContentRecord>(
        r#"
        INSERT INTO contents (title, body, author, tags)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, body, author, tags, created_at, updated_at
        "#,
    )
    .bind(&content.title)
    .bind(&content.body)
    .bind(&content.author)
    .bind(&content.tags)
    .fetch_one(pool)
    .await
}

/// All rows, oldest first
pub async fn find_all_contents(pool: &PgPool) -> Result<Vec<ContentRecord>, sqlx::Error> {
    sqlx::query_as::<_, ContentRecord>(
        r#"
        SELECT id, title, body, author, tags, created_at, updated_at
        FROM contents
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_content_by_id(
    pool: &PgPool,
    content_id: Uuid,
) -> Result<Option<ContentRecord>, sqlx::Error> {
    sqlx::query_as::<_, ContentRecord>(
        r#"
        SELECT id, title, body, author, tags, created_at, updated_at
        FROM contents
        WHERE id = $1
        "#,
    )
    .bind(content_id)
    .fetch_optional(pool)
    .await
}

/// Replace every field of a row in one statement
pub async fn replace_content(
    pool: &PgPool,
    content_id: Uuid,
    content: &Content,
) -> Result<Option<ContentRecord>, sqlx::Error> {
    sqlx::query_as::<_, ContentRecord>(
        r#"
        UPDATE contents
        SET title = $2, body = $3, author = $4, tags = $5, updated_at = NOW()
        WHERE id = $1
        RETURNING id, title, body, author, tags, created_at, updated_at
        "#,
    )
    .bind(content_id)
    .bind(&content.title)
    .bind(&content.body)
    .bind(&content.author)
    .bind(&content.tags)
    .fetch_optional(pool)
    .await
}

/// Hard delete. Returns whether a row was removed.
pub async fn delete_content(pool: &PgPool, content_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM contents WHERE id = $1")
        .bind(content_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// `ContentStore` backed by the `contents` table.
#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn insert_one(&self, content: &Content) -> error::Result<ContentRecord> {
        Ok(insert_content(&self.pool, content).await?)
    }

    async fn find_all(&self) -> error::Result<Vec<ContentRecord>> {
        Ok(find_all_contents(&self.pool).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> error::Result<Option<ContentRecord>> {
        Ok(find_content_by_id(&self.pool, id).await?)
    }

    async fn replace_by_id(
        &self,
        id: Uuid,
        content: &Content,
    ) -> error::Result<Option<ContentRecord>> {
        Ok(replace_content(&self.pool, id, content).await?)
    }

    async fn delete_by_id(&self, id: Uuid) -> error::Result<bool> {
        Ok(delete_content(&self.pool, id).await?)
    }

    async fn ping(&self) -> error::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgresql"
    }
}
