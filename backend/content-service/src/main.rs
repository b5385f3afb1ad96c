use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use content_service::config::{Config, LogFormat, StoreBackend};
use content_service::db::{self, ContentStore, InMemoryContentStore, PgContentStore};
use content_service::handlers;
use content_service::middleware::MetricsMiddleware;
use content_service::ContentService;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn build_store(config: &Config) -> io::Result<Arc<dyn ContentStore>> {
    match config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory content store; data is lost on restart");
            Ok(Arc::new(InMemoryContentStore::new()))
        }
        StoreBackend::Postgres => {
            config.database.log_config();
            let pool = db::create_pool(&config.database).await.map_err(|e| {
                io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    format!("Failed to create database pool: {e}"),
                )
            })?;

            if config.database.run_migrations {
                db::migrate(&pool).await.map_err(|e| {
                    io::Error::new(io::ErrorKind::Other, format!("Migration failed: {e}"))
                })?;
            }

            tracing::info!("Connected to PostgreSQL content store");
            Ok(Arc::new(PgContentStore::new(pool)))
        }
    }
}

/// Probe the local health endpoint; used as a container healthcheck.
async fn run_healthcheck() -> io::Result<()> {
    let port = std::env::var("CONTENT_SERVICE_PORT").unwrap_or_else(|_| "8081".to_string());
    let url = format!("http://127.0.0.1:{}/api/v1/health", port);

    match reqwest::Client::new().get(&url).send().await {
        Ok(resp) if resp.status().is_success() => Ok(()),
        Ok(resp) => {
            eprintln!("healthcheck HTTP status: {}", resp.status());
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"))
        }
        Err(e) => {
            eprintln!("healthcheck HTTP error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"))
        }
    }
}

/// Content Service
///
/// Serves `/contents/` CRUD over a single collection of content items.
///
/// # Routes
///
/// - `/contents/` - create and list content items
/// - `/contents/{id}` - read, replace and delete one item
/// - `/api/v1/health[/ready|/live]` - health probes
/// - `/metrics` - Prometheus metrics
/// - `/swagger-ui/` - API documentation
///
/// Listens on port 8081 unless `CONTENT_SERVICE_PORT` says otherwise.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Some(cmd) = std::env::args().nth(1) {
        if cmd == "healthcheck" || cmd == "healthcheck-http" {
            return run_healthcheck().await;
        }
    }

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    tracing::info!("Starting content-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(env = %config.app.env, store = ?config.store, "Configuration loaded");

    let store = match build_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Content store initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    let content_service = web::Data::new(ContentService::new(store));
    let bind_address = config.app.bind_address();
    let cors_config = config.cors.clone();

    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in cors_config.origins() {
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(content_service.clone())
            .wrap(MetricsMiddleware)
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .workers(config.app.workers)
    .run()
    .await?;

    tracing::info!("Content-service shutting down");
    Ok(())
}
