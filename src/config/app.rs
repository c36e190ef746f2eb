//! Application settings read from the environment.
//!
//! `.env` is loaded by `main` before this runs, so values may come from either place.

use super::{catalog, database};
use crate::core::{currency::DEFAULT_CURRENCY_SYMBOL, storage::DEFAULT_STORAGE_KEY};
use crate::errors::Result;
use crate::models::Product;
use std::path::PathBuf;
use tracing::info;

/// Everything needed to boot the cart store.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SeaORM connection string for local storage
    pub database_url: String,
    /// Key the cart snapshot is stored under
    pub storage_key: String,
    /// Optional catalog file replacing the bundled one
    pub catalog_path: Option<PathBuf>,
    /// Symbol prefixed to formatted prices
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: database::DEFAULT_DATABASE_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            catalog_path: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `DATABASE_URL`, `ROTATE_STORAGE_KEY`, `ROTATE_CATALOG_PATH`, and
    /// `ROTATE_CURRENCY_SYMBOL`, falling back to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: database::get_database_url(),
            storage_key: std::env::var("ROTATE_STORAGE_KEY").unwrap_or(defaults.storage_key),
            catalog_path: std::env::var("ROTATE_CATALOG_PATH").ok().map(PathBuf::from),
            currency_symbol: std::env::var("ROTATE_CURRENCY_SYMBOL")
                .unwrap_or(defaults.currency_symbol),
        }
    }

    /// Loads the configured catalog, or the bundled one when no path is set.
    pub fn load_catalog(&self) -> Result<Vec<Product>> {
        let products = match &self.catalog_path {
            Some(path) => catalog::load_catalog(path)?,
            None => catalog::bundled_catalog()?,
        };
        info!("Catalog loaded with {} products", products.len());
        Ok(products)
    }
}
