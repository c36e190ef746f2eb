//! Product catalog loading.
//!
//! The storefront ships with a catalog bundled into the binary (`catalog.toml`
//! at the crate root). A different file can be loaded at runtime; either way the
//! catalog is validated once and never changes afterwards.

use crate::errors::{Error, Result};
use crate::models::Product;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Catalog bundled at build time.
const BUNDLED_CATALOG: &str = include_str!("../../catalog.toml");

/// Shape of a catalog TOML file
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Products in display order
    pub products: Vec<Product>,
}

/// Parses and validates catalog TOML.
pub fn parse_catalog(contents: &str) -> Result<Vec<Product>> {
    let file: CatalogFile = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog: {e}"),
    })?;
    validate_catalog(&file.products)?;
    Ok(file.products)
}

/// Loads a catalog from a TOML file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let path_ref = path.as_ref();
    debug!("Loading catalog from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {path_ref:?}: {e}"),
    })?;
    parse_catalog(&contents)
}

/// The catalog compiled into the binary.
pub fn bundled_catalog() -> Result<Vec<Product>> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Checks that ids are unique, names are present, and prices are not negative.
pub fn validate_catalog(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            return Err(Error::InvalidCatalog {
                message: format!("duplicate product id {}", product.id),
            });
        }
        if product.name.trim().is_empty() {
            return Err(Error::InvalidCatalog {
                message: format!("product {} has an empty name", product.id),
            });
        }
        if product.price < 0 {
            return Err(Error::InvalidCatalog {
                message: format!("product {} has a negative price", product.id),
            });
        }
    }
    Ok(())
}
