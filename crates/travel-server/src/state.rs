use application::CatalogService;
use infrastructure::AppConfig;

pub struct AppState {
    pub catalog: CatalogService,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(catalog: CatalogService, config: AppConfig) -> Self {
        Self { catalog, config }
    }
}
