use dotenvy::dotenv;
use orderdesk::config::settings::Settings;
use orderdesk::errors::Result;
use orderdesk::{config, core::analytics, seed};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application settings
    let settings = Settings::load_or_default()
        .inspect_err(|e| error!("Failed to load application settings: {e}"))?;
    info!(
        new_client_window_days = settings.new_client_window_days,
        strict_status_transitions = settings.strict_status_transitions,
        "Loaded application settings."
    );

    // 4. Initialize database and schema
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Seed demo data on first run
    seed::seed_demo_data(&db)
        .await
        .inspect_err(|e| error!("Failed to seed demo data: {e}"))?;

    // 6. Log a dashboard snapshot so a bare run shows the store is alive;
    //    the HTTP boundary drives the same core operations in production
    let snapshot = analytics::get_analytics(&db, &settings).await?;
    info!(
        orders_today = snapshot.orders_today,
        revenue = snapshot.revenue,
        low_stock_items = snapshot.low_stock_items,
        new_clients = snapshot.new_clients,
        "Dashboard analytics snapshot."
    );

    Ok(())
}
