//! Pricing breakdown and display formatting.

use storefront_sdk::models::{CartItem, PricingBreakdown};
use storefront_sdk::pricing::{format_amount, shipping_for, tax_for};

fn item(price: i64, quantity: i64) -> CartItem {
    CartItem {
        id: "p".to_string(),
        name: "Item".to_string(),
        image: "/img/item.png".to_string(),
        price,
        quantity,
    }
}

// ---------------------------------------------------------------------------
// shipping threshold
// ---------------------------------------------------------------------------

#[test]
fn shipping_is_free_above_the_threshold() {
    let breakdown = PricingBreakdown::for_items(&[item(10_001, 1)]);
    assert_eq!(breakdown.shipping, 0);
}

#[test]
fn shipping_is_free_at_exactly_the_threshold() {
    // A subtotal of exactly 100.00 qualifies for free shipping.
    let breakdown = PricingBreakdown::for_items(&[item(10_000, 1)]);
    assert_eq!(breakdown.shipping, 0);
}

#[test]
fn shipping_is_flat_below_the_threshold() {
    let breakdown = PricingBreakdown::for_items(&[item(9_999, 1)]);
    assert_eq!(breakdown.shipping, 1_500);
}

// ---------------------------------------------------------------------------
// tax
// ---------------------------------------------------------------------------

#[test]
fn tax_is_eight_percent_of_subtotal() {
    assert_eq!(tax_for(10_000), 800);
    assert_eq!(tax_for(0), 0);
    assert_eq!(tax_for(2_500), 200);
}

#[test]
fn tax_rounds_half_up_on_fractional_units() {
    // 99 * 8% = 7.92 -> 8; 31 * 8% = 2.48 -> 2
    assert_eq!(tax_for(99), 8);
    assert_eq!(tax_for(31), 2);
}

#[test]
fn tax_applies_before_shipping_is_added() {
    let breakdown = PricingBreakdown::for_items(&[item(9_999, 1)]);
    assert_eq!(breakdown.tax, tax_for(9_999));
    assert_eq!(
        breakdown.total,
        breakdown.subtotal + breakdown.tax + breakdown.shipping
    );
    // Tax is not charged on the shipping fee.
    assert_ne!(breakdown.tax, tax_for(9_999 + 1_500));
}

// ---------------------------------------------------------------------------
// breakdown composition
// ---------------------------------------------------------------------------

#[test]
fn subtotal_sums_price_times_quantity() {
    let breakdown = PricingBreakdown::for_items(&[item(500, 2), item(2_450, 3)]);
    assert_eq!(breakdown.subtotal, 1_000 + 7_350);
}

#[test]
fn empty_cart_prices_to_flat_shipping_only() {
    let breakdown = PricingBreakdown::for_items(&[]);
    assert_eq!(breakdown.subtotal, 0);
    assert_eq!(breakdown.tax, 0);
    assert_eq!(breakdown.shipping, 1_500);
    assert_eq!(breakdown.total, 1_500);
}

#[test]
fn breakdown_is_deterministic() {
    let items = [item(500, 2), item(9_999, 1)];
    assert_eq!(
        PricingBreakdown::for_items(&items),
        PricingBreakdown::for_items(&items)
    );
}

#[test]
fn shipping_for_matches_breakdown() {
    assert_eq!(shipping_for(10_001), 0);
    assert_eq!(shipping_for(10_000), 0);
    assert_eq!(shipping_for(9_999), 1_500);
}

// ---------------------------------------------------------------------------
// display formatting
// ---------------------------------------------------------------------------

#[test]
fn format_amount_renders_two_decimals() {
    assert_eq!(format_amount(10_000), "100.00");
    assert_eq!(format_amount(1_500), "15.00");
    assert_eq!(format_amount(7), "0.07");
    assert_eq!(format_amount(0), "0.00");
}

#[test]
fn format_amount_handles_negative_adjustments() {
    assert_eq!(format_amount(-250), "-2.50");
}
