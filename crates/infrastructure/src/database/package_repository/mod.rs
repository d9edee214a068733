mod sea_orm_package_repository;

pub use sea_orm_package_repository::SeaOrmPackageRepository;
