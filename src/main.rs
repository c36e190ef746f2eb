use dotenvy::dotenv;
use rotate_cart::{
    CartStore, Result,
    config::{AppConfig, database},
    core::currency,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
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

    // 3. Load configuration and the product catalog
    let app_config = AppConfig::from_env();
    let catalog = app_config
        .load_catalog()
        .inspect_err(|e| error!("Failed to load product catalog: {}", e))?;

    // 4. Open local storage
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to local storage: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Local storage initialized successfully."))
        .inspect_err(|e| error!("Failed to create storage tables: {}", e))?;

    // 5. Rehydrate the cart
    let store = CartStore::init(db, app_config.storage_key.clone(), catalog).await?;

    for line in store.cart_products() {
        let name = line.name.as_deref().unwrap_or("<unknown product>");
        let price = line.price.map_or_else(
            || "n/a".to_string(),
            |p| currency::format_price(&app_config.currency_symbol, p),
        );
        info!("{} x{} @ {}", name, line.quantity, price);
    }
    info!(
        items = store.cart_quantity(),
        total = %store.formatted_total(&app_config.currency_symbol),
        open = store.is_cart_open(),
        "Cart ready"
    );

    Ok(())
}
