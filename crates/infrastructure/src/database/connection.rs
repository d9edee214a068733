use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::{debug, info};

/// Lifetime and idle limit for the single in-memory connection. Recycling
/// it would drop the database, so the limits lie far beyond any process run.
const IN_MEMORY_CONNECTION_LIMIT: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// True for SQLite URLs whose data lives only as long as the connection
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn connect_options(database_url: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);

    // Every pooled connection to `sqlite::memory:` opens its own empty database
    if is_in_memory(database_url) {
        options
            .max_connections(1)
            .min_connections(1)
            .max_lifetime(IN_MEMORY_CONNECTION_LIMIT)
            .idle_timeout(IN_MEMORY_CONNECTION_LIMIT);
    }

    options
}

/// Open the database and bring the schema up to date.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let options = connect_options(database_url);

    debug!(url = %database_url, "Connecting to database...");
    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;
    info!("✅ Database schema ready");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:paquetes?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://paquetes.db?mode=rwc"));
    }

    #[test]
    fn test_in_memory_connection_is_never_recycled() {
        let options = connect_options("sqlite::memory:");

        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
        assert_eq!(options.get_max_lifetime(), Some(IN_MEMORY_CONNECTION_LIMIT));
        assert_eq!(options.get_idle_timeout(), Some(IN_MEMORY_CONNECTION_LIMIT));
        assert!(IN_MEMORY_CONNECTION_LIMIT >= Duration::from_secs(60 * 60 * 24 * 365));
    }

    #[test]
    fn test_file_database_keeps_pool_defaults() {
        let options = connect_options("sqlite://paquetes.db?mode=rwc");

        assert_eq!(options.get_max_connections(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }
}
