//! Cart reducer - the closed set of cart commands and the pure functions applying them.
//!
//! Every function here takes the current `CartState` by value and returns the
//! next one. Nothing in this module touches storage; `CartStore` persists the
//! result after each call to [`apply`].
//!
//! Two behaviours of the storefront are kept as-is:
//! - `add_to_cart` leaves `cart_quantity` alone. The UI follows it with an
//!   `UpdateCartItems` command carrying the new total.
//! - `remove_from_cart` with an id that is not in the cart still subtracts the
//!   given quantity from `cart_quantity`.

use crate::models::{CartEntry, CartState};
use tracing::{trace, warn};

/// Every mutation the cart store accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartCommand {
    /// Add one unit of a product
    AddToCart {
        /// Product id, not validated against the catalog
        id: i64,
    },
    /// Overwrite the cached total item count
    UpdateCartItems {
        /// New total
        quantity: i64,
    },
    /// Drop a line item and subtract its quantity from the total
    RemoveFromCart {
        /// The line item as the caller last saw it
        product: CartEntry,
    },
    /// Set a line item's quantity, moving the total by the difference
    UpdateItemQuantity {
        /// The line item as the caller last saw it, carrying the old quantity
        product: CartEntry,
        /// New quantity
        quantity: u32,
    },
    /// Open or close the cart panel
    ToggleCart {
        /// Whether the panel is open
        open: bool,
    },
}

impl CartCommand {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddToCart { .. } => "add_to_cart",
            Self::UpdateCartItems { .. } => "update_cart_items",
            Self::RemoveFromCart { .. } => "remove_from_cart",
            Self::UpdateItemQuantity { .. } => "update_item_quantity",
            Self::ToggleCart { .. } => "toggle_cart",
        }
    }
}

/// Applies a single command to the state, returning the next state.
#[must_use]
pub fn apply(state: CartState, command: CartCommand) -> CartState {
    trace!(command = command.name(), "applying cart command");
    match command {
        CartCommand::AddToCart { id } => add_to_cart(state, id),
        CartCommand::UpdateCartItems { quantity } => update_cart_items(state, quantity),
        CartCommand::RemoveFromCart { product } => remove_from_cart(state, product),
        CartCommand::UpdateItemQuantity { product, quantity } => {
            update_item_quantity(state, product, quantity)
        }
        CartCommand::ToggleCart { open } => toggle_cart(state, open),
    }
}

/// Appends a new line with quantity 1, or bumps the existing line for `id`.
#[must_use]
pub fn add_to_cart(mut state: CartState, id: i64) -> CartState {
    match state.cart.iter_mut().find(|entry| entry.id == id) {
        Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
        None => state.cart.push(CartEntry { id, quantity: 1 }),
    }
    state
}

/// Overwrites the cached total.
#[must_use]
pub const fn update_cart_items(mut state: CartState, quantity: i64) -> CartState {
    state.cart_quantity = quantity;
    state
}

/// Removes the line for `product.id` and subtracts `product.quantity` from the total.
///
/// The subtraction happens even when no line matches.
#[must_use]
pub fn remove_from_cart(mut state: CartState, product: CartEntry) -> CartState {
    match state.cart.iter().position(|entry| entry.id == product.id) {
        Some(index) => {
            state.cart.remove(index);
        }
        None => warn!(
            id = product.id,
            quantity = product.quantity,
            "Removing a product that is not in the cart; total is still decremented"
        ),
    }
    state.cart_quantity = state
        .cart_quantity
        .saturating_sub(i64::from(product.quantity));
    state
}

/// Moves the total by `quantity - product.quantity` and stores the new quantity on the line.
///
/// A quantity of 0 is raised to 1; removing a line goes through `remove_from_cart`.
/// If no line matches, nothing changes.
#[must_use]
pub fn update_item_quantity(mut state: CartState, product: CartEntry, quantity: u32) -> CartState {
    let quantity = quantity.max(1);
    let Some(entry) = state.cart.iter_mut().find(|entry| entry.id == product.id) else {
        warn!(
            id = product.id,
            "Ignoring quantity update for a product that is not in the cart"
        );
        return state;
    };

    entry.quantity = quantity;
    let delta = i64::from(quantity) - i64::from(product.quantity);
    state.cart_quantity = state.cart_quantity.saturating_add(delta);
    state
}

/// Sets the cart panel visibility flag.
#[must_use]
pub const fn toggle_cart(mut state: CartState, open: bool) -> CartState {
    state.toggle_cart = open;
    state
}
