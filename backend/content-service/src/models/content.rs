use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Content payload accepted by `POST /contents/` and `PUT /contents/{id}`.
///
/// Update replaces every field, so an omitted `tags` resets the stored tags
/// to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Content {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub body: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A content row as returned by the storage layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContentRecord {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author: String,
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored content item as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentResponse {
    /// Storage-assigned identifier
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl From<ContentRecord> for ContentResponse {
    fn from(record: ContentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title,
            body: record.body,
            author: record.author,
            tags: record.tags.unwrap_or_default(),
        }
    }
}

impl ContentResponse {
    /// The payload fields of this item, without its id.
    pub fn content(&self) -> Content {
        Content {
            title: self.title.clone(),
            body: self.body.clone(),
            author: self.author.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Confirmation returned by `DELETE /contents/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Content deleted successfully".to_string(),
        }
    }
}
