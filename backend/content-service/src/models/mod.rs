/// Data models for content-service
///
/// - `Content`: request schema shared by create and update
/// - `ContentRecord`: row shape owned by the storage layer
/// - `ContentResponse`: API-facing representation of a stored item
pub mod content;

pub use content::{Content, ContentRecord, ContentResponse, DeleteResponse};
