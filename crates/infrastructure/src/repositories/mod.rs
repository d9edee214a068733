pub mod in_memory_package_repository;

pub use in_memory_package_repository::InMemoryPackageRepository;
