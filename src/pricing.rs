//! Pure pricing computation over cart contents.
//!
//! All arithmetic is in the smallest currency unit. The breakdown is cheap
//! (linear in item count) and recomputed on every read rather than cached,
//! so displayed totals can never go stale relative to the cart.

use crate::config::{FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, TAX_RATE_BPS};
use crate::models::{CartItem, PricingBreakdown};

impl PricingBreakdown {
    /// Compute the breakdown for a set of line items.
    ///
    /// Tax is applied to the subtotal before shipping is added. Shipping is
    /// free at or above [`FREE_SHIPPING_THRESHOLD`], otherwise the flat
    /// [`FLAT_SHIPPING_FEE`] applies.
    pub fn for_items(items: &[CartItem]) -> Self {
        let subtotal: i64 = items.iter().map(CartItem::line_total).sum();
        let tax = tax_for(subtotal);
        let shipping = shipping_for(subtotal);
        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}

/// 8% sales tax on the subtotal, rounded half up to the nearest unit.
pub fn tax_for(subtotal: i64) -> i64 {
    (subtotal * TAX_RATE_BPS + 5_000) / 10_000
}

/// Flat-fee shipping, waived once the subtotal reaches the free-shipping
/// threshold.
pub fn shipping_for(subtotal: i64) -> i64 {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        0
    } else {
        FLAT_SHIPPING_FEE
    }
}

/// Format a smallest-unit amount as a two-decimal display string.
///
/// Conversion to decimal happens only here, at render time; all stored and
/// computed amounts stay integral.
pub fn format_amount(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
