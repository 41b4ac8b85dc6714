use std::env;
use std::sync::Arc;

use business::domain::storage::KeyValueStorage;
use persistence::key_value::file::FileKeyValueStorage;
use persistence::key_value::postgres::{DatabaseConfig, KeyValueStoragePostgres};

/// Where the cart is persisted between restarts
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    File {
        path: String,
    },
    Postgres {
        database_url: String,
        migrations_path: String,
    },
}

impl StorageConfig {
    /// Environment variables:
    /// - STORAGE_BACKEND: "file" or "postgres" (default: "file")
    /// - CART_STORAGE_PATH: file backend location (default: "cart-storage.json")
    /// - DATABASE_URL: PostgreSQL connection string (required for "postgres")
    /// - MIGRATIONS_PATH: migrations directory
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup("STORAGE_BACKEND").as_deref() {
            Some("postgres") => Self::Postgres {
                database_url: lookup("DATABASE_URL").expect("DATABASE_URL must be set"),
                migrations_path: lookup("MIGRATIONS_PATH")
                    .unwrap_or_else(|| "infrastructure/persistence/migrations".to_string()),
            },
            _ => Self::File {
                path: lookup("CART_STORAGE_PATH")
                    .unwrap_or_else(|| "cart-storage.json".to_string()),
            },
        }
    }
}

/// Opens the configured storage backend
///
/// # Errors
/// Returns error if the database connection or migrations fail
pub async fn init_storage(config: &StorageConfig) -> anyhow::Result<Arc<dyn KeyValueStorage>> {
    match config {
        StorageConfig::File { path } => {
            tracing::info!(path = %path, "using file storage");
            Ok(Arc::new(FileKeyValueStorage::new(path.as_str())))
        }
        StorageConfig::Postgres {
            database_url,
            migrations_path,
        } => {
            tracing::info!("using PostgreSQL storage");
            let storage =
                KeyValueStoragePostgres::connect(&DatabaseConfig::new(database_url.clone()))
                    .await?;
            storage.migrate(migrations_path).await?;
            Ok(Arc::new(storage))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_file_storage() {
        let config = StorageConfig::from_lookup(|_| None);

        assert_eq!(
            config,
            StorageConfig::File {
                path: "cart-storage.json".to_string()
            }
        );
    }

    #[test]
    fn should_select_postgres_when_requested() {
        let config = StorageConfig::from_lookup(|name| match name {
            "STORAGE_BACKEND" => Some("postgres".to_string()),
            "DATABASE_URL" => Some("postgres://localhost/cart".to_string()),
            _ => None,
        });

        assert_eq!(
            config,
            StorageConfig::Postgres {
                database_url: "postgres://localhost/cart".to_string(),
                migrations_path: "infrastructure/persistence/migrations".to_string(),
            }
        );
    }

    #[test]
    #[should_panic(expected = "DATABASE_URL must be set")]
    fn should_require_database_url_for_postgres() {
        StorageConfig::from_lookup(|name| match name {
            "STORAGE_BACKEND" => Some("postgres".to_string()),
            _ => None,
        });
    }
}
