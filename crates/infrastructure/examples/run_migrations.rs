use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env
    dotenv::dotenv().ok();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://paquetes.db?mode=rwc".to_string());

    println!("Connecting to {}...", database_url);
    infrastructure::database::connect(&database_url).await?;

    println!("✅ Migrations applied successfully.");

    Ok(())
}
