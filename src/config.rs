use std::path::PathBuf;
use std::time::Duration;

/// Sales tax rate in basis points (8%).
pub const TAX_RATE_BPS: i64 = 800;

/// Subtotal (smallest currency unit) at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: i64 = 10_000;

/// Flat shipping fee (smallest currency unit) below the free threshold.
pub const FLAT_SHIPPING_FEE: i64 = 1_500;

/// Storage key under which the serialized cart document is persisted.
pub const CART_STORAGE_KEY: &str = "storefront-cart";

/// Delay between `track_cart` and its single abandonment check.
pub const REMINDER_DELAY: Duration = Duration::from_secs(60 * 60);

/// A cart touched within this window of the check is not considered abandoned.
pub const ABANDONMENT_THRESHOLD: Duration = Duration::from_secs(30 * 60);

/// Default link embedded in recovery emails to bring the customer back.
pub const RETURN_URL: &str = "https://shop.example.com/cart";

/// HTTP timeout applied to the transactional-email provider.
pub const EMAIL_TIMEOUT: Duration = Duration::from_secs(30);

pub fn default_storage_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("storefront-sdk")
    } else {
        PathBuf::from(".storefront-sdk")
    }
}
