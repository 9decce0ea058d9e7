use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PricingBreakdown — derived totals for a cart (never stored)
// ---------------------------------------------------------------------------

/// Derived pricing for a cart.
///
/// All fields are in the smallest currency unit. Computed fresh from cart
/// contents on every read; see [`crate::pricing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub subtotal: i64,
    pub tax: i64,
    pub shipping: i64,
    pub total: i64,
}
