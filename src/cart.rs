//! The session cart: an ordered collection of line items keyed by product id.
//!
//! All operations are synchronous total functions over in-memory state. Every
//! mutation triggers a best-effort persistence write; the only failure path
//! anywhere in the engine is storage deserialization at load time, handled by
//! silently starting empty.

use crate::error::Result;
use crate::models::{CartItem, Product};
use crate::storage::CartStorage;
use log::warn;

/// Authoritative in-memory cart for the current session.
///
/// Holds at most one [`CartItem`] per product id; items keep their insertion
/// order for display. Derived totals are recomputed on every read rather
/// than cached, since correctness under frequent small mutations matters
/// more than read performance at this scale.
pub struct CartEngine {
    items: Vec<CartItem>,
    storage: Box<dyn CartStorage>,
}

impl CartEngine {
    /// Construct the engine from persisted state.
    ///
    /// Missing or malformed stored data yields an empty cart; parse failures
    /// are logged and never surfaced to the caller.
    pub fn load(mut storage: Box<dyn CartStorage>) -> Self {
        let items = match storage.read() {
            Ok(Some(document)) => match serde_json::from_str::<Vec<CartItem>>(&document) {
                Ok(items) => items.into_iter().filter(|i| i.quantity >= 1).collect(),
                Err(e) => {
                    warn!("stored cart was malformed, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read stored cart, starting empty: {e}");
                Vec::new()
            }
        };
        Self { items, storage }
    }

    // -- Mutations ---------------------------------------------------------

    /// Add one unit of `product`.
    ///
    /// Increments the quantity when the product is already in the cart,
    /// otherwise appends a new line item with quantity 1. Always succeeds.
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.items.iter_mut().find(|i| i.id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem::from_product(product)),
        }
        self.persist_best_effort();
    }

    /// Remove the line item for `product_id`; no-op when absent.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.items.retain(|i| i.id != product_id);
        self.persist_best_effort();
    }

    /// Set the quantity for `product_id`.
    ///
    /// A quantity of zero or less removes the item entirely. No-op when the
    /// id is not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product_id) {
            item.quantity = quantity;
        }
        self.persist_best_effort();
    }

    /// Empty the cart unconditionally (used after successful checkout).
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.persist_best_effort();
    }

    // -- Derived reads -----------------------------------------------------

    /// Sum of `price * quantity` over all items.
    pub fn cart_total(&self) -> i64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all items.
    pub fn cart_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Line items in display (insertion) order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -- Persistence -------------------------------------------------------

    /// Write the full cart state to storage.
    ///
    /// Mutations call this internally and swallow failures; the method is
    /// public so hosts that want to observe the storage boundary can.
    pub fn persist(&mut self) -> Result<()> {
        let document = serde_json::to_string(&self.items)?;
        self.storage.write(&document)
    }

    fn persist_best_effort(&mut self) {
        if let Err(e) = self.persist() {
            warn!("cart persistence failed (state kept in memory): {e}");
        }
    }
}

impl std::fmt::Debug for CartEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartEngine")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
