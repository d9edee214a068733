//! Infrastructure layer - storage engines and configuration

pub mod config;
pub mod database;
pub mod repositories;
pub mod store;

pub use config::{AppConfig, CorsConfig, ServerConfig, StoreBackend, StoreConfig};
pub use database::SeaOrmPackageRepository;
pub use repositories::InMemoryPackageRepository;
pub use store::build_package_repository;
