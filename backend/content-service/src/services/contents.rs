/// Content service - create, list, read, replace and delete content items
use crate::db::ContentStore;
use crate::error::{AppError, Result};
use crate::metrics::content::{outcome_label, record_operation};
use crate::models::{Content, ContentResponse, DeleteResponse};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;
use validator::Validate;

/// Parse an opaque content id. Only the lowercase hyphenated form the API
/// hands out is accepted; anything else cannot name a stored item and is
/// reported as not found.
pub fn parse_content_id(raw: &str) -> Result<Uuid> {
    match Uuid::try_parse(raw) {
        Ok(id) if id.hyphenated().to_string() == raw => Ok(id),
        _ => Err(AppError::content_not_found()),
    }
}

#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ContentStore> {
        &self.store
    }

    /// Validate and insert a new item
    pub async fn create(&self, content: Content) -> Result<ContentResponse> {
        observe("create", self.insert(content)).await
    }

    /// Every stored item
    pub async fn list_all(&self) -> Result<Vec<ContentResponse>> {
        observe("list", self.find_all()).await
    }

    pub async fn get(&self, content_id: &str) -> Result<ContentResponse> {
        observe("get", self.find(content_id)).await
    }

    /// Replace every field of an existing item
    pub async fn update(&self, content_id: &str, content: Content) -> Result<ContentResponse> {
        observe("update", self.replace(content_id, content)).await
    }

    /// Permanently remove an item
    pub async fn delete(&self, content_id: &str) -> Result<DeleteResponse> {
        observe("delete", self.remove(content_id)).await
    }

    async fn insert(&self, content: Content) -> Result<ContentResponse> {
        content.validate()?;

        let record = self.store.insert_one(&content).await?;
        tracing::info!(content_id = %record.id, "content created");

        Ok(ContentResponse::from(record))
    }

    async fn find_all(&self) -> Result<Vec<ContentResponse>> {
        let records = self.store.find_all().await?;
        Ok(records.into_iter().map(ContentResponse::from).collect())
    }

    async fn find(&self, content_id: &str) -> Result<ContentResponse> {
        let id = parse_content_id(content_id)?;

        self.store
            .find_by_id(id)
            .await?
            .map(ContentResponse::from)
            .ok_or_else(AppError::content_not_found)
    }

    async fn replace(&self, content_id: &str, content: Content) -> Result<ContentResponse> {
        content.validate()?;
        let id = parse_content_id(content_id)?;

        let record = self
            .store
            .replace_by_id(id, &content)
            .await?
            .ok_or_else(AppError::content_not_found)?;
        tracing::info!(content_id = %record.id, "content replaced");

        Ok(ContentResponse::from(record))
    }

    async fn remove(&self, content_id: &str) -> Result<DeleteResponse> {
        let id = parse_content_id(content_id)?;

        if !self.store.delete_by_id(id).await? {
            return Err(AppError::content_not_found());
        }
        tracing::info!(content_id = %id, "content deleted");

        Ok(DeleteResponse::deleted())
    }

    pub async fn ping(&self) -> Result<()> {
        self.store.ping().await
    }
}

async fn observe<T, F>(operation: &'static str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let result = fut.await;

    if let Err(AppError::Database(err) | AppError::Internal(err)) = &result {
        tracing::error!(operation, error = %err, "content operation failed");
    }
    record_operation(operation, outcome_label(&result), start.elapsed());

    result
}
