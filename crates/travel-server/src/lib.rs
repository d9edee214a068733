pub mod api;
pub mod error;
pub mod state;

use anyhow::Result;
use application::CatalogService;
use domain::{SampleCatalog, SeedData};
use infrastructure::AppConfig;
use state::AppState;
use std::sync::Arc;

/// Build the store selected by `config`, seed it when enabled and wrap
/// everything the handlers need.
pub async fn setup_app_state(config: AppConfig) -> Result<Arc<AppState>> {
    let repository = infrastructure::build_package_repository(&config.store).await?;
    let catalog = CatalogService::new(repository);

    let seed: Option<&dyn SeedData> = if config.store.seed_on_startup {
        Some(&SampleCatalog)
    } else {
        None
    };
    catalog.initialize(seed).await?;

    Ok(Arc::new(AppState::new(catalog, config)))
}
