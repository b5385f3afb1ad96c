//! In-memory [`ContentStore`] for tests and local development.
//!
//! Items live in a `Vec` behind `std::sync::RwLock`, so `find_all` returns
//! them in insertion order. Nothing survives a restart.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::ContentStore;
use crate::error::{AppError, Result};
use crate::models::{Content, ContentRecord};

#[derive(Default)]
pub struct InMemoryContentStore {
    items: RwLock<Vec<ContentRecord>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<ContentRecord>>> {
        self.items
            .read()
            .map_err(|_| AppError::Internal("content store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<ContentRecord>>> {
        self.items
            .write()
            .map_err(|_| AppError::Internal("content store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn insert_one(&self, content: &Content) -> Result<ContentRecord> {
        let now = Utc::now();
        let record = ContentRecord {
            id: Uuid::new_v4(),
            title: content.title.clone(),
            body: content.body.clone(),
            author: content.author.clone(),
            tags: Some(content.tags.clone()),
            created_at: now,
            updated_at: now,
        };

        self.write()?.push(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<ContentRecord>> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentRecord>> {
        Ok(self.read()?.iter().find(|item| item.id == id).cloned())
    }

    async fn replace_by_id(&self, id: Uuid, content: &Content) -> Result<Option<ContentRecord>> {
        let mut items = self.write()?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        item.title = content.title.clone();
        item.body = content.body.clone();
        item.author = content.author.clone();
        item.tags = Some(content.tags.clone());
        item.updated_at = Utc::now();

        Ok(Some(item.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let mut items = self.write()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }

    async fn ping(&self) -> Result<()> {
        self.read().map(|_| ())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
