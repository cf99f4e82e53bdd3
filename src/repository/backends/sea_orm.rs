use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection, EntityTrait,
};
use tracing::{error, info};

use crate::errors::{Result, SnaplinkError};
use crate::repository::{MappingRepository, UrlMapping};

use migration::{Migrator, MigratorTrait, entities::url_mapping};

#[derive(Clone)]
pub struct SeaOrmRepository {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmRepository {
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(SnaplinkError::database_config(
                "DATABASE_URL is not set".to_string(),
            ));
        }

        let db = if backend_name == "sqlite" {
            Self::connect_sqlite(database_url).await?
        } else {
            Self::connect_generic(database_url, backend_name).await?
        };

        let repository = SeaOrmRepository {
            db,
            backend_name: backend_name.to_string(),
        };

        repository.run_migrations().await?;

        info!(
            "{} repository initialized",
            repository.backend_name.to_uppercase()
        );
        Ok(repository)
    }

    /// Connect to SQLite with auto-create and WAL mode.
    async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::SqlitePool;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                SnaplinkError::database_config(format!("Failed to parse SQLite URL: {}", e))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePool::connect_with(opt).await.map_err(|e| {
            SnaplinkError::database_connection(format!("Failed to connect to SQLite: {}", e))
        })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Connect to MySQL/MariaDB/PostgreSQL.
    async fn connect_generic(database_url: &str, backend_name: &str) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(20)
            .min_connections(1)
            .connect_timeout(std::time::Duration::from_secs(8))
            .acquire_timeout(std::time::Duration::from_secs(8))
            .sqlx_logging(false);

        Database::connect(opt).await.map_err(|e| {
            SnaplinkError::database_connection(format!(
                "Failed to connect to {} database: {}",
                backend_name.to_uppercase(),
                e
            ))
        })
    }

    async fn run_migrations(&self) -> Result<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| SnaplinkError::database_operation(format!("Migration failed: {}", e)))?;

        info!("Database migrations completed");
        Ok(())
    }

    fn model_to_mapping(model: url_mapping::Model) -> UrlMapping {
        UrlMapping {
            short_code: model.short_code,
            original_url: model.original_url,
            created_at: model.created_at,
        }
    }

    fn mapping_to_active_model(mapping: &UrlMapping) -> url_mapping::ActiveModel {
        url_mapping::ActiveModel {
            short_code: Set(mapping.short_code.clone()),
            original_url: Set(mapping.original_url.clone()),
            created_at: Set(mapping.created_at),
        }
    }

    /// Check for a primary-key/unique constraint violation.
    fn is_unique_violation(err: &sea_orm::sqlx::Error) -> bool {
        use sea_orm::sqlx::Error;

        match err {
            Error::Database(db_err) => {
                let code = db_err.code();
                // SQLite: SQLITE_CONSTRAINT_PRIMARYKEY (1555) / _UNIQUE (2067)
                // MySQL: ER_DUP_ENTRY (1062)
                // PostgreSQL: unique_violation (23505)
                code.as_ref()
                    .map(|c| c == "1555" || c == "2067" || c == "1062" || c == "23505")
                    .unwrap_or(false)
            }
            _ => false,
        }
    }
}

#[async_trait]
impl MappingRepository for SeaOrmRepository {
    async fn insert(&self, mapping: UrlMapping) -> Result<()> {
        let active_model = Self::mapping_to_active_model(&mapping);

        match active_model.insert(&self.db).await {
            Ok(_) => {
                info!("Short link created: {}", mapping.short_code);
                Ok(())
            }
            Err(sea_orm::DbErr::Exec(sea_orm::RuntimeErr::SqlxError(sqlx_err)))
                if Self::is_unique_violation(&sqlx_err) =>
            {
                error!("Short code collision on insert: {}", mapping.short_code);
                Err(SnaplinkError::duplicate_code(format!(
                    "Short code already exists: {}",
                    mapping.short_code
                )))
            }
            Err(e) => Err(SnaplinkError::database_operation(format!(
                "Failed to insert mapping: {}",
                e
            ))),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>> {
        let model = url_mapping::Entity::find_by_id(code)
            .one(&self.db)
            .await
            .map_err(|e| {
                SnaplinkError::database_operation(format!("Failed to look up mapping: {}", e))
            })?;

        Ok(model.map(Self::model_to_mapping))
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}
