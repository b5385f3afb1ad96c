/// Business logic layer for content-service
///
/// `ContentService` validates payloads, performs exactly one storage operation
/// per call and maps the outcome onto the API representation.
pub mod contents;

pub use contents::{parse_content_id, ContentService};
