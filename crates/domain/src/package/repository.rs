use crate::{DomainError, NewPackage, Package, PackageId, SearchTerm};
use async_trait::async_trait;

/// Repository interface for Package persistence
///
/// Implementations live in the infrastructure layer. Every mutation must be
/// applied atomically with respect to other mutations on the same store.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Wipe the store and insert `records` with sequential ids starting at 1
    async fn seed(&self, records: &[NewPackage]) -> Result<Vec<Package>, DomainError>;

    /// All packages in insertion order
    async fn find_all(&self) -> Result<Vec<Package>, DomainError>;

    /// Packages whose `descripcion` contains `term`
    async fn find_by_description(&self, term: &SearchTerm) -> Result<Vec<Package>, DomainError>;

    /// Packages whose `destino` contains `term`
    async fn find_by_destination(&self, term: &SearchTerm) -> Result<Vec<Package>, DomainError>;

    /// Store a new package under a fresh id
    async fn create(&self, fields: &NewPackage) -> Result<Package, DomainError>;

    /// Remove a package. Returns `false` when no package had that id.
    async fn delete(&self, id: PackageId) -> Result<bool, DomainError>;
}
