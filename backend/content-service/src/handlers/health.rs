/// Health probes: summary, readiness (storage round-trip) and liveness
use crate::services::ContentService;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Serialize, Clone)]
#[serde(rename_all = "lowercase")]
enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
struct ComponentCheck {
    status: ComponentStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    status: ComponentStatus,
    checks: HashMap<String, ComponentCheck>,
    timestamp: String,
}

pub async fn health_summary(service: web::Data<ContentService>) -> HttpResponse {
    match service.ping().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "content-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("Content store unavailable: {}", e),
            "service": "content-service"
        })),
    }
}

pub async fn readiness_summary(service: web::Data<ContentService>) -> HttpResponse {
    let backend = service.store().backend();

    let start = Instant::now();
    let result = service.ping().await;
    let latency_ms = Some(start.elapsed().as_millis() as u64);

    let ready = result.is_ok();
    let check = match result {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: format!("{} reachable", backend),
            latency_ms,
        },
        Err(e) => ComponentCheck {
            status: ComponentStatus::Unhealthy,
            message: format!("{} check failed: {}", backend, e),
            latency_ms,
        },
    };

    let mut checks = HashMap::new();
    checks.insert(backend.to_string(), check);

    let response = ReadinessResponse {
        ready,
        status: if ready {
            ComponentStatus::Healthy
        } else {
            ComponentStatus::Unhealthy
        },
        checks,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
