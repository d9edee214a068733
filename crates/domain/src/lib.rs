//! Domain layer - the travel package catalog with no external dependencies
//!
//! This crate contains:
//! - The `Package` entity and its creation payload (`NewPackage`)
//! - Value objects (`PackageId`, `SearchTerm`)
//! - The repository interface (`PackageRepository`)
//! - The seed data collaborator (`SeedData`, `SampleCatalog`)
//!
//! Storage engines and HTTP live in the outer crates.

pub mod error;
pub mod package;

// Re-export commonly used types
pub use error::DomainError;
pub use package::{
    NewPackage, Package, PackageId, PackageRepository, SampleCatalog, SearchTerm, SeedData,
};
