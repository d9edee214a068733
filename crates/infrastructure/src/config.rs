use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the browser client, served for unmatched paths
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CorsConfig {
    /// `"*"` anywhere in the list allows every origin; an empty list allows none
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map guarded by a lock
    Memory,
    /// SeaORM over SQLite (`sqlite::memory:` or a file URL)
    Sqlite,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StoreConfig {
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Wipe the store and load the sample catalog on boot
    #[serde(default = "default_seed_on_startup")]
    pub seed_on_startup: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_backend() -> StoreBackend {
    StoreBackend::Memory
}
fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}
fn default_seed_on_startup() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database_url: default_database_url(),
            seed_on_startup: default_seed_on_startup(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default settings
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("cors.allowed_origins", vec!["*"])?
            .set_default("store.backend", "memory")?
            .set_default("store.database_url", default_database_url())?
            .set_default("store.seed_on_startup", true)?
            // Local config file, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. TRAVEL__SERVER__PORT=8080)
            .add_source(
                Environment::with_prefix("TRAVEL")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("travel-config-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = scratch_dir("empty");
        let config = AppConfig::load(dir.to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(config.store.seed_on_startup);
        assert!(config.cors.allows_any_origin());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = scratch_dir("file");
        std::fs::write(
            dir.join("default.toml"),
            r#"
            [server]
            port = 8080

            [cors]
            allowed_origins = ["http://localhost:5500"]

            [store]
            backend = "sqlite"
            seed_on_startup = false
            "#,
        )
        .unwrap();

        let config = AppConfig::load(dir.to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.store.database_url, "sqlite::memory:");
        assert!(!config.store.seed_on_startup);
        assert!(!config.cors.allows_any_origin());

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_empty_origin_list_allows_none() {
        let cors = CorsConfig {
            allowed_origins: Vec::new(),
        };
        assert!(!cors.allows_any_origin());

        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:5500".into(), "*".into()],
        };
        assert!(cors.allows_any_origin());
    }

    #[test]
    fn test_empty_origin_list_in_file_replaces_default() {
        let dir = scratch_dir("no-origins");
        std::fs::write(dir.join("default.toml"), "[cors]\nallowed_origins = []\n").unwrap();

        let config = AppConfig::load(dir.to_str().unwrap()).unwrap();

        assert!(config.cors.allowed_origins.is_empty());
        assert!(!config.cors.allows_any_origin());

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_struct_default_matches_loader_defaults() {
        let dir = scratch_dir("parity");
        let loaded = AppConfig::load(dir.to_str().unwrap()).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }
}
