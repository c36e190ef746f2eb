//! Read-only views over `CartState`.

use crate::models::{CartEntry, CartProduct, CartState, Product};

/// The product catalog.
#[must_use]
pub fn products(state: &CartState) -> &[Product] {
    &state.products
}

/// Looks up a catalog record by id.
#[must_use]
pub fn product(state: &CartState, id: i64) -> Option<&Product> {
    state.products.iter().find(|product| product.id == id)
}

/// The cached total item count.
#[must_use]
pub const fn cart_quantity(state: &CartState) -> i64 {
    state.cart_quantity
}

/// Raw line items in insertion order.
#[must_use]
pub fn cart(state: &CartState) -> &[CartEntry] {
    &state.cart
}

/// Line items joined with their catalog records, in cart order.
///
/// Entries whose id is not in the catalog come back with empty product fields.
#[must_use]
pub fn cart_products(state: &CartState) -> Vec<CartProduct> {
    state
        .cart
        .iter()
        .map(|entry| CartProduct::join(*entry, product(state, entry.id)))
        .collect()
}

/// Whether the cart panel is open.
#[must_use]
pub const fn toggle_cart(state: &CartState) -> bool {
    state.toggle_cart
}

/// Sum of price times quantity in minor units, skipping unknown products.
/// Saturates at the `i64` bounds.
#[must_use]
pub fn cart_total(state: &CartState) -> i64 {
    cart_products(state)
        .iter()
        .filter_map(CartProduct::line_total)
        .fold(0, i64::saturating_add)
}
