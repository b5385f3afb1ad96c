/// OpenAPI documentation for the Content Service
use crate::error::ErrorResponse;
use crate::handlers::contents;
use crate::models::{Content, ContentResponse, DeleteResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Content Service API",
        version = "1.0.0",
        description = "Create, read, update and delete content items (title, body, author, tags).",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8081", description = "Development server"),
    ),
    paths(
        contents::create_content,
        contents::list_contents,
        contents::get_content,
        contents::update_content,
        contents::delete_content,
    ),
    components(schemas(Content, ContentResponse, DeleteResponse, ErrorResponse)),
    tags(
        (name = "contents", description = "Content item CRUD"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}
