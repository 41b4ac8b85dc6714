use std::{path::Path, time::Duration};

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStorage;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Connection settings for the PostgreSQL backend
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// A single client only ever needs a couple of connections
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 2,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Key-value storage kept in the `key_value_store` table.
pub struct KeyValueStoragePostgres {
    pool: PgPool,
}

impl KeyValueStoragePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.connection_string)
            .await
            .map_err(|_| DatabaseError::ConnectionError)?;

        Ok(Self::new(pool))
    }

    /// Applies the migrations found in `migrations_path`
    pub async fn migrate(&self, migrations_path: &str) -> Result<(), DatabaseError> {
        let path = Path::new(migrations_path);
        if !path.exists() {
            return Err(DatabaseError::MigrationError);
        }

        sqlx::migrate::Migrator::new(path)
            .await
            .map_err(|_| DatabaseError::MigrationError)?
            .run(&self.pool)
            .await
            .map_err(|_| DatabaseError::MigrationError)
    }
}

#[async_trait]
impl KeyValueStorage for KeyValueStoragePostgres {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT value FROM key_value_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| StorageError::read())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"INSERT INTO key_value_store (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|_| StorageError::write())?;

        Ok(())
    }
}
