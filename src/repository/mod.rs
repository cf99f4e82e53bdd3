use std::sync::Arc;

use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{Result, SnaplinkError};

pub mod backends;
pub mod models;

pub use models::UrlMapping;

/// Durable storage contract for code-to-URL mappings.
///
/// Mappings are write-once: created by the shortening flow, read by the
/// redirect flow, never updated or deleted.
#[async_trait::async_trait]
pub trait MappingRepository: Send + Sync {
    /// Persist a new mapping. Fails with `DuplicateCode` if the short code
    /// already exists.
    async fn insert(&self, mapping: UrlMapping) -> Result<()>;

    /// Point lookup by exact short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>>;

    fn backend_name(&self) -> &str;
}

pub struct RepositoryFactory;

impl RepositoryFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn MappingRepository>> {
        match config.backend.as_str() {
            "sqlite" | "mysql" | "postgres" | "mariadb" => {
                let repository =
                    backends::sea_orm::SeaOrmRepository::new(&config.database_url, &config.backend)
                        .await?;
                Ok(Arc::new(repository) as Arc<dyn MappingRepository>)
            }
            other => Err(SnaplinkError::database_config(format!(
                "Unknown repository backend: {}. Supported: sqlite, mysql, postgres, mariadb",
                other
            ))),
        }
    }
}

/// Holds the single long-lived repository for the process.
///
/// The connection is established lazily on first access so that the server
/// can start even when the database is unreachable; a failed attempt is
/// retried on the next access. `warm` triggers the initial attempt during
/// startup so healthy deployments connect exactly once, up front.
pub struct RepositoryHandle {
    config: DatabaseConfig,
    cell: tokio::sync::OnceCell<Arc<dyn MappingRepository>>,
}

impl RepositoryHandle {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            cell: tokio::sync::OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<Arc<dyn MappingRepository>> {
        self.cell
            .get_or_try_init(|| async {
                let repository = RepositoryFactory::create(&self.config).await?;
                info!("Using storage backend: {}", repository.backend_name());
                Ok(repository)
            })
            .await
            .cloned()
    }

    /// Eagerly establish the connection; used at startup.
    pub async fn warm(&self) -> Result<()> {
        self.get().await.map(|_| ())
    }
}
