//! Storefront SDK for Rust.
//!
//! Embeddable core for a storefront front end: a session shopping cart
//! persisted to a client-side key-value store, pure pricing computation
//! (subtotal, tax, shipping), and a best-effort abandoned-cart tracker that
//! sends recovery emails through a hosted transactional provider.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_sdk::models::Product;
//! use storefront_sdk::StorefrontSdk;
//!
//! let mut sdk = StorefrontSdk::builder().build().unwrap();
//!
//! sdk.cart_mut().add_to_cart(&Product {
//!     id: "p1".into(),
//!     name: "Concrete Mug".into(),
//!     image: "/img/mug.png".into(),
//!     price: 2_500,
//! });
//!
//! let pricing = sdk.pricing();
//! assert_eq!(pricing.subtotal, 2_500);
//! ```

pub mod abandoned;
#[cfg(feature = "async")]
pub mod async_client;
pub mod cart;
pub mod config;
pub mod email;
pub mod error;
pub mod models;
pub mod pricing;
pub mod storage;

pub use abandoned::AbandonedCartTracker;
#[cfg(feature = "async")]
pub use async_client::AsyncStorefrontSdk;
pub use cart::CartEngine;
pub use email::{EmailSender, HttpEmailSender, NoopEmailSender};
pub use error::{Result, StorefrontError};
pub use storage::{CartStorage, FileStorage, MemoryStorage};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use models::{AbandonedItem, PricingBreakdown};

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontSdk`] instance.
///
/// Use [`StorefrontSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StorefrontSdkBuilder::build) to create the
/// SDK.
#[derive(Default)]
pub struct StorefrontSdkBuilder {
    storage: Option<Box<dyn CartStorage>>,
    storage_dir: Option<PathBuf>,
    email_sender: Option<Box<dyn EmailSender>>,
    reminder_delay: Option<Duration>,
    abandonment_threshold: Option<Duration>,
    return_url: Option<String>,
}

impl StorefrontSdkBuilder {
    /// Use a custom storage backend for the persisted cart.
    ///
    /// Overrides [`storage_dir`](Self::storage_dir) when both are set.
    pub fn storage(mut self, storage: Box<dyn CartStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Set the directory for the default file-backed cart storage.
    ///
    /// If neither this nor [`storage`](Self::storage) is set, the
    /// platform-appropriate data directory is used.
    pub fn storage_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.storage_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set the sender used for recovery emails.
    ///
    /// Defaults to [`NoopEmailSender`], which logs and delivers nothing.
    pub fn email_sender(mut self, sender: Box<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Override the delay between tracking a cart and its abandonment check.
    pub fn reminder_delay(mut self, delay: Duration) -> Self {
        self.reminder_delay = Some(delay);
        self
    }

    /// Override the recent-activity window that suppresses a reminder.
    pub fn abandonment_threshold(mut self, threshold: Duration) -> Self {
        self.abandonment_threshold = Some(threshold);
        self
    }

    /// Override the return-to-cart URL embedded in recovery emails.
    pub fn return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    /// Build the SDK, loading any persisted cart state.
    ///
    /// Storage initialization can fail (e.g. the storage directory cannot be
    /// created); a malformed persisted cart cannot -- it falls back to an
    /// empty cart.
    pub fn build(self) -> Result<StorefrontSdk> {
        let storage: Box<dyn CartStorage> = match self.storage {
            Some(storage) => storage,
            None => Box::new(FileStorage::new(self.storage_dir, config::CART_STORAGE_KEY)?),
        };
        let cart = CartEngine::load(storage);

        let sender = self
            .email_sender
            .unwrap_or_else(|| Box::new(NoopEmailSender));
        let mut tracker = AbandonedCartTracker::new(sender);
        if let Some(delay) = self.reminder_delay {
            tracker = tracker.with_reminder_delay(delay);
        }
        if let Some(threshold) = self.abandonment_threshold {
            tracker = tracker.with_abandonment_threshold(threshold);
        }
        if let Some(url) = self.return_url {
            tracker = tracker.with_return_url(url);
        }

        Ok(StorefrontSdk { cart, tracker })
    }
}

// ---------------------------------------------------------------------------
// StorefrontSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns the session [`CartEngine`] and the [`AbandonedCartTracker`] and ties
/// their lifecycles together at checkout. Created via
/// [`StorefrontSdk::builder()`].
pub struct StorefrontSdk {
    cart: CartEngine,
    tracker: AbandonedCartTracker,
}

impl StorefrontSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StorefrontSdkBuilder {
        StorefrontSdkBuilder::default()
    }

    // -- Component accessors -----------------------------------------------

    /// The session cart.
    pub fn cart(&self) -> &CartEngine {
        &self.cart
    }

    /// The session cart, for mutations.
    pub fn cart_mut(&mut self) -> &mut CartEngine {
        &mut self.cart
    }

    /// The abandoned-cart tracker.
    pub fn abandoned(&self) -> &AbandonedCartTracker {
        &self.tracker
    }

    /// The abandoned-cart tracker, for mutations.
    pub fn abandoned_mut(&mut self) -> &mut AbandonedCartTracker {
        &mut self.tracker
    }

    // -- Derived -----------------------------------------------------------

    /// Pricing breakdown for the current cart contents.
    ///
    /// Recomputed on every call so displayed totals never go stale.
    pub fn pricing(&self) -> PricingBreakdown {
        PricingBreakdown::for_items(self.cart.items())
    }

    // -- Lifecycle glue ----------------------------------------------------

    /// Snapshot the current cart into the abandoned-cart tracker for
    /// `email`, scheduling its single deferred check.
    ///
    /// Returns `false` without tracking when the cart is empty (an empty
    /// cart is not worth recovering).
    pub fn capture_abandoned(&mut self, email: &str, customer_name: &str) -> bool {
        if self.cart.is_empty() {
            return false;
        }
        let items: Vec<AbandonedItem> = self.cart.items().iter().map(AbandonedItem::from).collect();
        self.tracker.track_cart(email, customer_name, items);
        true
    }

    /// Refresh an existing abandoned-cart record from the current cart.
    ///
    /// Returns `false` when no record exists for `email`. Does not schedule
    /// a new check.
    pub fn refresh_abandoned(&mut self, email: &str) -> bool {
        let items: Vec<AbandonedItem> = self.cart.items().iter().map(AbandonedItem::from).collect();
        self.tracker.update_cart(email, items).is_some()
    }

    /// Complete checkout: mark the customer's abandoned record recovered
    /// (when an email is known) and empty the cart.
    pub fn complete_checkout(&mut self, email: Option<&str>) {
        if let Some(email) = email {
            self.tracker.mark_recovered(email);
        }
        self.cart.clear_cart();
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StorefrontSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StorefrontSdk(cart_items={}, cart_count={}, tracked_carts={}, pending_checks={})",
            self.cart.items().len(),
            self.cart.cart_count(),
            self.tracker.len(),
            self.tracker.pending_checks()
        )
    }
}
