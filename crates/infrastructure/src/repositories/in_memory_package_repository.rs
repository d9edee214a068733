use async_trait::async_trait;
use domain::{DomainError, NewPackage, Package, PackageId, PackageRepository, SearchTerm};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

struct Inner {
    next_id: i64,
    // Ids only grow, so key order is insertion order
    packages: BTreeMap<PackageId, Package>,
}

impl Inner {
    fn insert(&mut self, fields: NewPackage) -> Package {
        let id = PackageId::new(self.next_id);
        self.next_id += 1;

        let package = Package::new(id, fields);
        self.packages.insert(id, package.clone());
        package
    }

    fn filtered(&self, keep: impl Fn(&Package) -> bool) -> Vec<Package> {
        self.packages.values().filter(|&p| keep(p)).cloned().collect()
    }
}

/// Process-local package store.
///
/// Readers share the lock; `seed`, `create` and `delete` take it exclusively,
/// so at most one mutation is in flight at any time.
pub struct InMemoryPackageRepository {
    inner: RwLock<Inner>,
}

impl InMemoryPackageRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                packages: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryPackageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageRepository for InMemoryPackageRepository {
    async fn seed(&self, records: &[NewPackage]) -> Result<Vec<Package>, DomainError> {
        let mut inner = self.inner.write().await;
        inner.packages.clear();
        inner.next_id = 1;

        let seeded: Vec<Package> = records
            .iter()
            .cloned()
            .map(|fields| inner.insert(fields))
            .collect();

        debug!(count = seeded.len(), "Seeded in-memory store");
        Ok(seeded)
    }

    async fn find_all(&self) -> Result<Vec<Package>, DomainError> {
        Ok(self.inner.read().await.packages.values().cloned().collect())
    }

    async fn find_by_description(&self, term: &SearchTerm) -> Result<Vec<Package>, DomainError> {
        Ok(self
            .inner
            .read()
            .await
            .filtered(|p| p.description_contains(term)))
    }

    async fn find_by_destination(&self, term: &SearchTerm) -> Result<Vec<Package>, DomainError> {
        Ok(self
            .inner
            .read()
            .await
            .filtered(|p| p.destination_contains(term)))
    }

    async fn create(&self, fields: &NewPackage) -> Result<Package, DomainError> {
        if let Some(precio) = fields.precio.filter(|p| !p.is_finite()) {
            return Err(DomainError::Validation(format!(
                "precio must be a finite number, got {}",
                precio
            )));
        }

        Ok(self.inner.write().await.insert(fields.clone()))
    }

    async fn delete(&self, id: PackageId) -> Result<bool, DomainError> {
        Ok(self.inner.write().await.packages.remove(&id).is_some())
    }
}
