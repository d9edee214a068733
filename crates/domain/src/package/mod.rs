mod entity;
mod lenient;
mod package_id;
mod repository;
mod search_term;
mod seed;

pub use entity::{NewPackage, Package};
pub use package_id::PackageId;
pub use repository::PackageRepository;
pub use search_term::SearchTerm;
pub use seed::{SampleCatalog, SeedData};

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockPackageRepository;
