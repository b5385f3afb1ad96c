/// HTTP layer for content-service
///
/// - `contents`: CRUD endpoints under `/contents/`
/// - `health`: liveness/readiness probes under `/api/v1/health`
///
/// `configure` registers every route so `main` and the integration tests
/// build the same app.
pub mod contents;
pub mod health;

pub use contents::{create_content, delete_content, get_content, list_contents, update_content};

use crate::error::AppError;
use crate::metrics::serve_metrics;
use crate::openapi::ApiDoc;
use actix_web::error::JsonPayloadError;
use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// JSON extractor config: a body that cannot be decoded into the target type
/// is a schema violation (422), not a generic bad request.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejected request body");
        payload_error(err).into()
    })
}

/// Oversized bodies are 413; everything else the extractor rejects is 422.
pub fn payload_error(err: JsonPayloadError) -> AppError {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            AppError::PayloadTooLarge(err.to_string())
        }
        other => AppError::Validation(other.to_string()),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
        )
        .route("/metrics", web::get().to(serve_metrics))
        .route("/api/v1/health", web::get().to(health::health_summary))
        .route(
            "/api/v1/health/ready",
            web::get().to(health::readiness_summary),
        )
        .route("/api/v1/health/live", web::get().to(health::liveness_check))
        .service(
            web::resource(["/contents", "/contents/"])
                .route(web::post().to(create_content))
                .route(web::get().to(list_contents)),
        )
        .service(
            web::resource("/contents/{content_id}")
                .route(web::get().to(get_content))
                .route(web::put().to(update_content))
                .route(web::delete().to(delete_content)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn oversized_bodies_map_to_413() {
        let err = payload_error(JsonPayloadError::OverflowKnownLength {
            length: 3_000_000,
            limit: 2_097_152,
        });
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

        let err = payload_error(JsonPayloadError::Overflow { limit: 2_097_152 });
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn decode_failures_map_to_422() {
        let err = payload_error(JsonPayloadError::ContentType);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let serde_err = serde_json::from_str::<crate::models::Content>("{}").unwrap_err();
        let err = payload_error(JsonPayloadError::Deserialize(serde_err));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
