use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AbandonedItem — line item snapshot inside an abandoned-cart record
// ---------------------------------------------------------------------------

/// Display-level snapshot of a line item captured for a recovery email.
///
/// Deliberately carries no product id: the record exists to render a
/// reminder, not to reconstruct the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbandonedItem {
    pub name: String,
    pub image: String,
    pub price: i64,
    pub quantity: i64,
}

impl AbandonedItem {
    pub fn line_total(&self) -> i64 {
        self.price * self.quantity
    }
}

impl From<&crate::models::CartItem> for AbandonedItem {
    fn from(item: &crate::models::CartItem) -> Self {
        Self {
            name: item.name.clone(),
            image: item.image.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}

// ---------------------------------------------------------------------------
// AbandonedCart — one record per customer email
// ---------------------------------------------------------------------------

/// Snapshot of a cart associated with a known customer email.
///
/// Created when a checkout-adjacent flow captures an email with a non-empty
/// cart, refreshed on later cart updates for the same email, and flagged
/// `recovered` when checkout completes. Records live in process memory only
/// and are deleted only by [`remove_cart`] or the explicit age-based sweep.
///
/// [`remove_cart`]: crate::abandoned::AbandonedCartTracker::remove_cart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbandonedCart {
    pub id: String,
    pub email: String,
    pub customer_name: String,
    pub items: Vec<AbandonedItem>,
    pub total: i64,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub recovered: bool,
}
