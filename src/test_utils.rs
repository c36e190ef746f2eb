//! Shared test utilities.
//!
//! Helpers for setting up in-memory storage and building catalog fixtures
//! with sensible defaults.

use crate::{errors::Result, models::Product, store::CartStore};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes tracing output through the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with the storage table initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a product with placeholder copy.
#[must_use]
pub fn sample_product(id: i64, name: &str, price: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        img: format!("product-{id}.png"),
        size: "100 mL".to_string(),
    }
}

/// Two products priced like the bundled catalog: id 1 at 2300, id 2 at 3500.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        sample_product(1, "Facial Cleanser 100 mL", 2300),
        sample_product(2, "Facial Cleanser 200 mL", 3500),
    ]
}

/// A fresh store over [`sample_catalog`] backed by an in-memory database.
pub async fn setup_test_store() -> Result<CartStore> {
    let db = setup_test_db().await?;
    CartStore::init(db, "test-cart", sample_catalog()).await
}
