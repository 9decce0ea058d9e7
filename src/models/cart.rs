use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product — catalog entry as presented to the cart
// ---------------------------------------------------------------------------

/// A product snapshot from the catalog, as handed to
/// [`add_to_cart`](crate::cart::CartEngine::add_to_cart).
///
/// `price` is in the smallest currency unit (e.g. cents) and is captured
/// into the cart at add time; later catalog price changes do not affect
/// items already in a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: i64,
}

// ---------------------------------------------------------------------------
// CartItem — one line item
// ---------------------------------------------------------------------------

/// A product snapshot plus a quantity.
///
/// Invariant: `quantity >= 1`. The cart engine removes an item rather than
/// storing a non-positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: i64,
    pub quantity: i64,
}

impl CartItem {
    /// Build a line item for a single unit of `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Line total: `price * quantity`.
    pub fn line_total(&self) -> i64 {
        self.price * self.quantity
    }
}
