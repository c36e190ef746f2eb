//! Plain data types shared by the reducer, the queries, and the persistence layer.
//!
//! `CartState` is serialized as-is into local storage, so its field names are
//! part of the persisted format (camelCase keys).

use serde::{Deserialize, Serialize};

/// A catalog record. Prices are in minor currency units (pence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Marketing copy shown on the product page
    pub description: String,
    /// Price in minor currency units
    pub price: i64,
    /// Asset reference for the product image
    pub img: String,
    /// Pack size, e.g. "100 mL"
    pub size: String,
}

/// One line item in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product this line refers to; not checked against the catalog
    pub id: i64,
    /// Number of units, at least 1
    pub quantity: u32,
}

/// A cart entry joined with its catalog record.
///
/// Product fields are `None` when the entry references an id the catalog
/// does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    /// Product id taken from the cart entry
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Units in the cart
    pub quantity: u32,
}

impl CartProduct {
    /// Joins an entry with its (possibly missing) catalog record.
    #[must_use]
    pub fn join(entry: CartEntry, product: Option<&Product>) -> Self {
        Self {
            id: entry.id,
            name: product.map(|p| p.name.clone()),
            description: product.map(|p| p.description.clone()),
            price: product.map(|p| p.price),
            img: product.map(|p| p.img.clone()),
            size: product.map(|p| p.size.clone()),
            quantity: entry.quantity,
        }
    }

    /// Price times quantity, or `None` when the product is unknown. Saturates at the `i64` bounds.
    #[must_use]
    pub fn line_total(&self) -> Option<i64> {
        self.price
            .map(|price| price.saturating_mul(i64::from(self.quantity)))
    }
}

/// The whole store state, mirrored to local storage after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Line items in insertion order
    pub cart: Vec<CartEntry>,
    /// Cached total item count. Not recomputed from `cart`, so it can drift.
    pub cart_quantity: i64,
    /// Whether the cart panel is open
    pub toggle_cart: bool,
    /// Product catalog
    pub products: Vec<Product>,
}

impl CartState {
    /// Empty cart over the given catalog.
    #[must_use]
    pub const fn with_catalog(products: Vec<Product>) -> Self {
        Self {
            cart: Vec::new(),
            cart_quantity: 0,
            toggle_cart: false,
            products,
        }
    }
}
