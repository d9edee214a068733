use crate::config::{StoreBackend, StoreConfig};
use crate::database::{self, SeaOrmPackageRepository};
use crate::repositories::InMemoryPackageRepository;
use anyhow::Result;
use domain::PackageRepository;
use std::sync::Arc;
use tracing::info;

/// Build the package store selected by configuration.
pub async fn build_package_repository(config: &StoreConfig) -> Result<Arc<dyn PackageRepository>> {
    match config.backend {
        StoreBackend::Memory => {
            info!("📦 Using in-memory package store");
            Ok(Arc::new(InMemoryPackageRepository::new()))
        }
        StoreBackend::Sqlite => {
            info!(url = %config.database_url, "📦 Using SQLite package store");
            let db = database::connect(&config.database_url).await?;
            Ok(Arc::new(SeaOrmPackageRepository::new(db)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_memory_store() {
        let repo = build_package_repository(&StoreConfig::default()).await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_build_sqlite_store() {
        let config = StoreConfig {
            backend: StoreBackend::Sqlite,
            ..StoreConfig::default()
        };
        let repo = build_package_repository(&config).await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
