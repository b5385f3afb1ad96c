/// Database access layer
///
/// `ContentStore` is the storage collaborator the service talks to. Two
/// implementations exist:
/// - `PgContentStore`: PostgreSQL through sqlx (production)
/// - `InMemoryContentStore`: process-local, used by tests and local runs
pub mod content_repo;
pub mod memory;

pub use content_repo::PgContentStore;
pub use memory::InMemoryContentStore;

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::models::{Content, ContentRecord};
use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use uuid::Uuid;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Document collection holding content items.
///
/// Ids are assigned by the store on insert. Every lookup reports "no match"
/// explicitly (`None` / `false`) instead of failing.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Insert a new item and return it with its freshly assigned id.
    async fn insert_one(&self, content: &Content) -> Result<ContentRecord>;

    /// Every stored item.
    async fn find_all(&self) -> Result<Vec<ContentRecord>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentRecord>>;

    /// Overwrite all fields of an existing item. Returns `None` and leaves the
    /// store untouched when `id` matches nothing.
    async fn replace_by_id(&self, id: Uuid, content: &Content) -> Result<Option<ContentRecord>>;

    /// Returns `false` when `id` matches nothing.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool>;

    /// Cheap connectivity probe for readiness checks.
    async fn ping(&self) -> Result<()>;

    /// Backend name used in health reports.
    fn backend(&self) -> &'static str;
}

/// Create a PostgreSQL connection pool and verify it with `SELECT 1`.
pub async fn create_pool(config: &DatabaseConfig) -> std::result::Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect(&config.url)
        .await?;

    match tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_secs),
        sqlx::query("SELECT 1").execute(&pool),
    )
    .await
    {
        Ok(Ok(_)) => {
            tracing::info!("Database pool created and verified successfully");
            Ok(pool)
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Database connection verification failed");
            Err(e)
        }
        Err(_) => {
            tracing::error!(
                timeout_secs = config.connect_timeout_secs,
                "Database connection verification timeout"
            );
            Err(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "Database verification timeout",
            )))
        }
    }
}

/// Apply the embedded schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
