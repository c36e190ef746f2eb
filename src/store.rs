//! Cart store - the state holder the UI layer talks to.
//!
//! `CartStore` owns the current `CartState` and a handle to local storage.
//! It is built once at boot with [`CartStore::init`], which rehydrates the
//! previous snapshot when one exists. Every mutating method applies a
//! [`CartCommand`] through the reducer and then writes the new state back.
//! Failed writes are logged and otherwise ignored: the in-memory state is the
//! source of truth for the running process.

use crate::{
    core::{
        cart::{self, CartCommand},
        currency, queries, storage,
    },
    errors::Result,
    models::{CartEntry, CartProduct, CartState, Product},
};
use sea_orm::DatabaseConnection;
use tracing::{debug, info, warn};

/// Process-wide cart state plus the storage it is mirrored to.
#[derive(Debug)]
pub struct CartStore {
    db: DatabaseConnection,
    storage_key: String,
    catalog: Vec<Product>,
    state: CartState,
}

impl CartStore {
    /// Builds the store from the snapshot under `storage_key`, or from an empty
    /// cart over `catalog` when nothing usable is stored.
    ///
    /// A rehydrated snapshot keeps the catalog it was saved with.
    pub async fn init(
        db: DatabaseConnection,
        storage_key: impl Into<String>,
        catalog: Vec<Product>,
    ) -> Result<Self> {
        let storage_key = storage_key.into();
        let state = match storage::load_state(&db, &storage_key).await? {
            Some(state) => {
                info!(
                    entries = state.cart.len(),
                    cart_quantity = state.cart_quantity,
                    "Rehydrated cart from local storage"
                );
                state
            }
            None => {
                info!("No saved cart found, starting empty");
                CartState::with_catalog(catalog.clone())
            }
        };

        Ok(Self {
            db,
            storage_key,
            catalog,
            state,
        })
    }

    /// Applies a command and persists the result.
    pub async fn dispatch(&mut self, command: CartCommand) {
        debug!(command = command.name(), "Dispatching cart command");
        let current = std::mem::take(&mut self.state);
        self.state = cart::apply(current, command);
        self.persist().await;
    }

    /// Adds one unit of `product` to the cart.
    pub async fn add_to_cart(&mut self, product: &Product) {
        self.dispatch(CartCommand::AddToCart { id: product.id }).await;
    }

    /// Overwrites the cached total item count.
    pub async fn update_cart_items(&mut self, quantity: i64) {
        self.dispatch(CartCommand::UpdateCartItems { quantity }).await;
    }

    /// Removes a line item and subtracts its quantity from the total.
    pub async fn remove_from_cart(&mut self, product: CartEntry) {
        self.dispatch(CartCommand::RemoveFromCart { product }).await;
    }

    /// Changes a line item's quantity, moving the total by the difference.
    pub async fn update_item_quantity(&mut self, product: CartEntry, quantity: u32) {
        self.dispatch(CartCommand::UpdateItemQuantity { product, quantity })
            .await;
    }

    /// Opens or closes the cart panel.
    pub async fn toggle_cart(&mut self, open: bool) {
        self.dispatch(CartCommand::ToggleCart { open }).await;
    }

    /// Deletes the saved snapshot and resets to an empty cart over the boot catalog.
    pub async fn clear(&mut self) -> Result<()> {
        storage::remove_value(&self.db, &self.storage_key).await?;
        self.state = CartState::with_catalog(self.catalog.clone());
        info!("Cart cleared");
        Ok(())
    }

    async fn persist(&self) {
        if let Err(e) = storage::save_state(&self.db, &self.storage_key, &self.state).await {
            warn!(key = %self.storage_key, error = %e, "Failed to persist cart state");
        }
    }

    /// The product catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        queries::products(&self.state)
    }

    /// Catalog record for `id`, if any.
    #[must_use]
    pub fn product(&self, id: i64) -> Option<&Product> {
        queries::product(&self.state, id)
    }

    /// The cached total item count.
    #[must_use]
    pub const fn cart_quantity(&self) -> i64 {
        queries::cart_quantity(&self.state)
    }

    /// Raw line items.
    #[must_use]
    pub fn cart(&self) -> &[CartEntry] {
        queries::cart(&self.state)
    }

    /// Line items joined with the catalog.
    #[must_use]
    pub fn cart_products(&self) -> Vec<CartProduct> {
        queries::cart_products(&self.state)
    }

    /// Whether the cart panel is open.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        queries::toggle_cart(&self.state)
    }

    /// Cart subtotal in minor units.
    #[must_use]
    pub fn cart_total(&self) -> i64 {
        queries::cart_total(&self.state)
    }

    /// Cart subtotal formatted for display.
    #[must_use]
    pub fn formatted_total(&self, symbol: &str) -> String {
        currency::format_price(symbol, self.cart_total())
    }

    /// The full current state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{init_test_tracing, sample_catalog, setup_test_db, setup_test_store};
    use sea_orm::Database;

    #[tokio::test]
    async fn test_init_without_snapshot_starts_empty() -> Result<()> {
        let store = setup_test_store().await?;

        assert!(store.cart().is_empty());
        assert_eq!(store.cart_quantity(), 0);
        assert!(!store.is_cart_open());
        assert_eq!(store.products(), sample_catalog().as_slice());
        Ok(())
    }

    #[tokio::test]
    async fn test_add_then_update_cart_items() -> Result<()> {
        let mut store = setup_test_store().await?;
        let cleanser = store.product(1).cloned().unwrap();

        store.add_to_cart(&cleanser).await;
        store.add_to_cart(&cleanser).await;
        assert_eq!(store.cart(), &[CartEntry { id: 1, quantity: 2 }]);
        assert_eq!(store.cart_quantity(), 0);

        store.update_cart_items(2).await;
        assert_eq!(store.cart_quantity(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_every_mutation_is_persisted() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let mut store = CartStore::init(db.clone(), "test-cart", sample_catalog()).await?;
        let cleanser = store.product(2).cloned().unwrap();

        store.add_to_cart(&cleanser).await;
        store.update_cart_items(1).await;
        store.toggle_cart(true).await;

        let saved = storage::load_state(&db, "test-cart").await?.unwrap();
        assert_eq!(&saved, store.state());
        Ok(())
    }

    #[tokio::test]
    async fn test_rehydrates_saved_state() -> Result<()> {
        let db = setup_test_db().await?;
        {
            let mut store = CartStore::init(db.clone(), "test-cart", sample_catalog()).await?;
            let product = store.product(1).cloned().unwrap();
            store.add_to_cart(&product).await;
            store.update_cart_items(1).await;
            store
                .update_item_quantity(CartEntry { id: 1, quantity: 1 }, 3)
                .await;
        }

        let store = CartStore::init(db, "test-cart", Vec::new()).await?;
        assert_eq!(store.cart(), &[CartEntry { id: 1, quantity: 3 }]);
        assert_eq!(store.cart_quantity(), 3);
        // the saved catalog wins over the one passed at boot
        assert_eq!(store.products().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_and_totals() -> Result<()> {
        let mut store = setup_test_store().await?;
        let first = store.product(1).cloned().unwrap();
        let second = store.product(2).cloned().unwrap();

        store.add_to_cart(&first).await;
        store.add_to_cart(&second).await;
        store.update_cart_items(2).await;
        assert_eq!(store.cart_total(), 5800);
        assert_eq!(store.formatted_total("£"), "£58");

        store.remove_from_cart(CartEntry { id: 1, quantity: 1 }).await;
        assert_eq!(store.cart_quantity(), 1);
        assert_eq!(store.cart_products().len(), 1);
        assert_eq!(store.cart_products()[0].price, Some(3500));
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_resets_state_and_storage() -> Result<()> {
        let db = setup_test_db().await?;
        let mut store = CartStore::init(db.clone(), "test-cart", sample_catalog()).await?;
        let product = store.product(1).cloned().unwrap();
        store.add_to_cart(&product).await;
        store.toggle_cart(true).await;

        store.clear().await?;

        assert!(store.cart().is_empty());
        assert!(!store.is_cart_open());
        assert!(storage::get_value(&db, "test-cart").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_does_not_block_mutation() -> Result<()> {
        init_test_tracing();
        // no tables created, so every write fails
        let db = Database::connect("sqlite::memory:").await?;
        let mut store = CartStore {
            db,
            storage_key: "test-cart".to_string(),
            catalog: sample_catalog(),
            state: CartState::with_catalog(sample_catalog()),
        };

        store.toggle_cart(true).await;
        assert!(store.is_cart_open());
        Ok(())
    }

    #[tokio::test]
    async fn test_separate_keys_do_not_collide() -> Result<()> {
        let db = setup_test_db().await?;
        let mut first = CartStore::init(db.clone(), "cart-a", sample_catalog()).await?;
        let product = first.product(1).cloned().unwrap();
        first.add_to_cart(&product).await;

        let second = CartStore::init(db, "cart-b", sample_catalog()).await?;
        assert!(second.cart().is_empty());
        Ok(())
    }
}
