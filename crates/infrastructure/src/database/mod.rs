mod connection;
pub mod package_repository;

pub mod entities;

pub use connection::{connect, is_in_memory};
pub use package_repository::SeaOrmPackageRepository;
