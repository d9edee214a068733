//! Application layer - Use cases over the package catalog

pub mod catalog;

pub use catalog::CatalogService;
