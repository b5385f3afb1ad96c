// HTTP tests for the /contents/ endpoints
//
// The app is built exactly as `main` builds it (handlers::configure plus the
// metrics middleware) on top of the in-memory content store, so these run
// without any external services:
//   cargo test -p content-service --test content_api_test

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use content_service::db::InMemoryContentStore;
use content_service::handlers;
use content_service::middleware::MetricsMiddleware;
use content_service::models::{ContentResponse, DeleteResponse};
use content_service::ContentService;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(ContentService::new(Arc::new(
                    InMemoryContentStore::new(),
                ))))
                .wrap(MetricsMiddleware)
                .configure(handlers::configure),
        )
        .await
    };
}

fn payload(title: &str) -> Value {
    json!({
        "title": title,
        "body": "B",
        "author": "C",
        "tags": []
    })
}

const UNKNOWN_ID: &str = "8c0e4c39-5f1b-4a8e-9c61-3f2f7a0d9b11";

#[actix_web::test]
async fn create_get_delete_scenario() {
    let app = init_app!();

    let created: ContentResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/contents/")
            .set_json(payload("A"))
            .to_request(),
    )
    .await;
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "A");
    assert_eq!(created.body, "B");
    assert_eq!(created.author, "C");
    assert!(created.tags.is_empty());

    let fetched: ContentResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/contents/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, created);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/contents/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: DeleteResponse = test::read_body_json(resp).await;
    assert_eq!(deleted.message, "Content deleted successfully");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/contents/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_returns_200_and_defaults_tags() {
    let app = init_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/contents/")
            .set_json(json!({"title": "A", "body": "B", "author": "C"}))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let created: ContentResponse = test::read_body_json(resp).await;
    assert!(created.tags.is_empty());
}

#[actix_web::test]
async fn create_keeps_tag_order_and_duplicates() {
    let app = init_app!();

    let created: ContentResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/contents/")
            .set_json(json!({
                "title": "A",
                "body": "B",
                "author": "C",
                "tags": ["z", "a", "z"]
            }))
            .to_request(),
    )
    .await;

    assert_eq!(created.tags, vec!["z", "a", "z"]);
}

#[actix_web::test]
async fn schema_violations_return_422() {
    let app = init_app!();

    let bad_bodies = [
        json!({"body": "B", "author": "C"}),
        json!({"title": "A", "author": "C"}),
        json!({"title": "A", "body": "B"}),
        json!({"title": 5, "body": "B", "author": "C"}),
        json!({"title": "A", "body": "B", "author": "C", "tags": "rust"}),
        json!({"title": "A", "body": "B", "author": "C", "tags": [1, 2]}),
        json!({"title": "", "body": "B", "author": "C"}),
    ];

    for body in bad_bodies {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/contents/")
                .set_json(&body)
                .to_request(),
        )
        .await;
        assert_eq!(
            resp.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body {} should be rejected",
            body
        );
    }

    let all: Vec<ContentResponse> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/contents/").to_request())
            .await;
    assert!(all.is_empty());
}

#[actix_web::test]
async fn invalid_update_bodies_return_422_and_keep_record() {
    let app = init_app!();

    let created: ContentResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/contents/")
            .set_json(json!({"title": "A", "body": "B", "author": "C", "tags": ["x"]}))
            .to_request(),
    )
    .await;
    let uri = format!("/contents/{}", created.id);

    let bad_bodies = [
        json!({"title": "", "body": "B2", "author": "C2"}),
        json!({"title": "A2", "body": "B2"}),
        json!({"title": "A2", "body": "B2", "author": "C2", "tags": "rust"}),
    ];

    for body in bad_bodies {
        let resp = test::call_service(
            &app,
            test::TestRequest::put().uri(&uri).set_json(&body).to_request(),
        )
        .await;
        assert_eq!(
            resp.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body {} should be rejected",
            body
        );
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&uri)
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let fetched: ContentResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn oversized_body_returns_413() {
    let app = init_app!();

    let body = json!({
        "title": "A",
        "body": "x".repeat(3 * 1024 * 1024),
        "author": "C"
    });
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/contents/")
            .set_json(&body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let all: Vec<ContentResponse> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/contents/").to_request())
            .await;
    assert!(all.is_empty());
}

#[actix_web::test]
async fn id_spellings_other_than_the_issued_one_return_404() {
    let app = init_app!();

    let created: ContentResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/contents/")
            .set_json(payload("A"))
            .to_request(),
    )
    .await;

    let alternates = [
        created.id.replace('-', ""),
        created.id.to_uppercase(),
        format!("%7B{}%7D", created.id),
        format!("urn:uuid:{}", created.id),
    ];
    for id in alternates {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/contents/{}", id))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET /contents/{}", id);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/contents/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn malformed_json_returns_422() {
    let app = init_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/contents/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 422);
}

#[actix_web::test]
async fn list_returns_every_created_item() {
    let app = init_app!();

    let mut ids = HashSet::new();
    for title in ["one", "two", "three"] {
        let created: ContentResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/contents/")
                .set_json(payload(title))
                .to_request(),
        )
        .await;
        ids.insert(created.id);
    }

    let listed: Vec<ContentResponse> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/contents/").to_request())
            .await;
    assert_eq!(listed.len(), 3);
    assert_eq!(
        listed.into_iter().map(|c| c.id).collect::<HashSet<_>>(),
        ids
    );

    let without_slash: Vec<ContentResponse> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/contents").to_request())
            .await;
    assert_eq!(without_slash.len(), 3);
}

#[actix_web::test]
async fn update_replaces_whole_record() {
    let app = init_app!();

    let created: ContentResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/contents/")
            .set_json(json!({"title": "A", "body": "B", "author": "C", "tags": ["x", "y"]}))
            .to_request(),
    )
    .await;

    let updated: ContentResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::put()
            .uri(&format!("/contents/{}", created.id))
            .set_json(json!({"title": "A2", "body": "B2", "author": "C2"}))
            .to_request(),
    )
    .await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "A2");
    assert_eq!(updated.body, "B2");
    assert_eq!(updated.author, "C2");
    assert!(updated.tags.is_empty());

    let fetched: ContentResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/contents/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn update_unknown_id_returns_404_without_mutation() {
    let app = init_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/contents/{}", UNKNOWN_ID))
            .set_json(payload("A"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let all: Vec<ContentResponse> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/contents/").to_request())
            .await;
    assert!(all.is_empty());
}

#[actix_web::test]
async fn unknown_and_malformed_ids_return_404() {
    let app = init_app!();

    for id in [UNKNOWN_ID, "not-an-id", "507f1f77bcf86cd799439011"] {
        let uri = format!("/contents/{}", id);

        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {}", uri);

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&uri)
                .set_json(payload("A"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "PUT {}", uri);

        let resp =
            test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "DELETE {}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Content not found", "status": 404}));
    }
}

#[actix_web::test]
async fn delete_twice_returns_404_the_second_time() {
    let app = init_app!();

    let created: ContentResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/contents/")
            .set_json(payload("A"))
            .to_request(),
    )
    .await;
    let uri = format!("/contents/{}", created.id);

    let first = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_endpoints_report_ok() {
    let app = init_app!();

    for uri in ["/api/v1/health", "/api/v1/health/ready", "/api/v1/health/live"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
    }

    let ready: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/health/ready")
            .to_request(),
    )
    .await;
    assert_eq!(ready["ready"], true);
    assert_eq!(ready["checks"]["memory"]["status"], "healthy");
}

#[actix_web::test]
async fn metrics_expose_content_operations() {
    let app = init_app!();

    test::call_service(&app, test::TestRequest::get().uri("/contents/").to_request()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("content_operations_total"));
    assert!(text.contains("http_requests_total"));
}

#[actix_web::test]
async fn openapi_document_lists_content_paths() {
    let app = init_app!();

    let doc: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/openapi.json")
            .to_request(),
    )
    .await;

    assert!(doc["paths"]["/contents/"].is_object());
    assert!(doc["paths"]["/contents/{content_id}"].is_object());
}
