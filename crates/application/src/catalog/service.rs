use domain::{DomainError, NewPackage, Package, PackageId, PackageRepository, SearchTerm, SeedData};
use std::sync::Arc;
use tracing::{debug, info};

/// Catalog use cases, independent of transport and storage engine.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn PackageRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn PackageRepository>) -> Self {
        Self { repository }
    }

    /// Prepare the store for serving. With a seed source the store is wiped
    /// and reloaded; without one its contents are left untouched.
    pub async fn initialize(&self, seed: Option<&dyn SeedData>) -> Result<(), DomainError> {
        let Some(seed) = seed else {
            info!("Seeding disabled, keeping existing catalog");
            return Ok(());
        };

        let seeded = self.repository.seed(&seed.packages()).await?;
        info!(count = seeded.len(), "🌱 Catalog seeded");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Package>, DomainError> {
        self.repository.find_all().await
    }

    /// Description search. A missing or empty query lists everything.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Package>, DomainError> {
        match query {
            Some(q) if !q.is_empty() => {
                debug!(query = %q, "Searching packages by description");
                let term = SearchTerm::new(q)?;
                self.repository.find_by_description(&term).await
            }
            _ => self.repository.find_all().await,
        }
    }

    pub async fn by_destination(&self, destination: &str) -> Result<Vec<Package>, DomainError> {
        let term = SearchTerm::new(destination)?;
        self.repository.find_by_destination(&term).await
    }

    pub async fn create(&self, fields: NewPackage) -> Result<Package, DomainError> {
        let package = self.repository.create(&fields).await?;
        info!(id = %package.id, destino = ?package.destino, "Package created");
        Ok(package)
    }

    /// Delete by the raw path value. An id that is not an integer cannot
    /// name a stored package, so it is reported as not found.
    pub async fn delete(&self, raw_id: &str) -> Result<(), DomainError> {
        let id: PackageId = raw_id
            .parse()
            .map_err(|_| DomainError::NotFound(raw_id.to_string()))?;

        if self.repository.delete(id).await? {
            info!(id = %id, "Package deleted");
            Ok(())
        } else {
            Err(DomainError::NotFound(id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::package::MockPackageRepository;
    use mockall::predicate::eq;

    fn package(id: i64, destino: &str) -> Package {
        Package::new(
            PackageId::new(id),
            NewPackage::new(destino, "5 días", 100.0, "Descripción"),
        )
    }

    fn service(mock: MockPackageRepository) -> CatalogService {
        CatalogService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_search_without_query_lists_all() {
        let mut mock = MockPackageRepository::new();
        mock.expect_find_all()
            .times(2)
            .returning(|| Ok(vec![package(1, "Roma")]));
        mock.expect_find_by_description().never();

        let service = service(mock);

        assert_eq!(service.search(None).await.unwrap().len(), 1);
        assert_eq!(service.search(Some("")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_with_query_filters_description() {
        let mut mock = MockPackageRepository::new();
        mock.expect_find_all().never();
        mock.expect_find_by_description()
            .withf(|term| term.as_str() == "Incas")
            .times(1)
            .returning(|_| Ok(vec![package(2, "Machu Picchu, Perú")]));

        let found = service(mock).search(Some("Incas")).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, PackageId::new(2));
    }

    #[tokio::test]
    async fn test_by_destination_rejects_empty_segment() {
        let mut mock = MockPackageRepository::new();
        mock.expect_find_by_destination().never();

        let result = service(mock).by_destination("").await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_parses_id() {
        let mut mock = MockPackageRepository::new();
        mock.expect_delete()
            .with(eq(PackageId::new(3)))
            .times(1)
            .returning(|_| Ok(true));

        assert!(service(mock).delete("3").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut mock = MockPackageRepository::new();
        mock.expect_delete().returning(|_| Ok(false));

        let result = service(mock).delete("42").await;
        assert_eq!(result, Err(DomainError::NotFound("42".to_string())));
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id_never_reaches_store() {
        let mut mock = MockPackageRepository::new();
        mock.expect_delete().never();

        let result = service(mock).delete("abc").await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_storage_failure_propagates() {
        let mut mock = MockPackageRepository::new();
        mock.expect_delete()
            .returning(|_| Err(DomainError::Storage("disk on fire".to_string())));

        let result = service(mock).delete("1").await;
        assert!(matches!(result, Err(DomainError::Storage(_))));
    }

    #[tokio::test]
    async fn test_initialize_without_seed_leaves_store_alone() {
        let mut mock = MockPackageRepository::new();
        mock.expect_seed().never();

        assert!(service(mock).initialize(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_initialize_seeds_sample_catalog() {
        let mut mock = MockPackageRepository::new();
        mock.expect_seed()
            .withf(|records| records.len() == domain::SampleCatalog::LEN)
            .times(1)
            .returning(|records| {
                Ok(records
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(i, fields)| Package::new(PackageId::new(i as i64 + 1), fields))
                    .collect())
            });

        let result = service(mock)
            .initialize(Some(&domain::SampleCatalog))
            .await;
        assert!(result.is_ok());
    }
}
