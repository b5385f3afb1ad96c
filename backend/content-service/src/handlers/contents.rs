/// Content handlers - HTTP endpoints for content item operations
use crate::error::{ErrorResponse, Result};
use crate::models::{Content, ContentResponse, DeleteResponse};
use crate::services::ContentService;
use actix_web::{web, HttpResponse};

/// Create a new content item
#[utoipa::path(
    post,
    path = "/contents/",
    tag = "contents",
    request_body = Content,
    responses(
        (status = 200, description = "Content created", body = ContentResponse),
        (status = 422, description = "Payload does not match the content schema", body = ErrorResponse)
    )
)]
pub async fn create_content(
    service: web::Data<ContentService>,
    req: web::Json<Content>,
) -> Result<HttpResponse> {
    let created = service.create(req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// List every content item
#[utoipa::path(
    get,
    path = "/contents/",
    tag = "contents",
    responses(
        (status = 200, description = "All stored content items", body = [ContentResponse])
    )
)]
pub async fn list_contents(service: web::Data<ContentService>) -> Result<HttpResponse> {
    let contents = service.list_all().await?;
    Ok(HttpResponse::Ok().json(contents))
}

/// Get a content item by ID
#[utoipa::path(
    get,
    path = "/contents/{content_id}",
    tag = "contents",
    params(("content_id" = String, Path, description = "Content identifier")),
    responses(
        (status = 200, description = "Content item", body = ContentResponse),
        (status = 404, description = "Content not found", body = ErrorResponse)
    )
)]
pub async fn get_content(
    service: web::Data<ContentService>,
    content_id: web::Path<String>,
) -> Result<HttpResponse> {
    let content = service.get(&content_id).await?;
    Ok(HttpResponse::Ok().json(content))
}

/// Replace every field of a content item
#[utoipa::path(
    put,
    path = "/contents/{content_id}",
    tag = "contents",
    params(("content_id" = String, Path, description = "Content identifier")),
    request_body = Content,
    responses(
        (status = 200, description = "Updated content item", body = ContentResponse),
        (status = 404, description = "Content not found", body = ErrorResponse),
        (status = 422, description = "Payload does not match the content schema", body = ErrorResponse)
    )
)]
pub async fn update_content(
    service: web::Data<ContentService>,
    content_id: web::Path<String>,
    req: web::Json<Content>,
) -> Result<HttpResponse> {
    let updated = service.update(&content_id, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a content item
#[utoipa::path(
    delete,
    path = "/contents/{content_id}",
    tag = "contents",
    params(("content_id" = String, Path, description = "Content identifier")),
    responses(
        (status = 200, description = "Content deleted", body = DeleteResponse),
        (status = 404, description = "Content not found", body = ErrorResponse)
    )
)]
pub async fn delete_content(
    service: web::Data<ContentService>,
    content_id: web::Path<String>,
) -> Result<HttpResponse> {
    let deleted = service.delete(&content_id).await?;
    Ok(HttpResponse::Ok().json(deleted))
}
