//! Async wrapper around [`StorefrontSdk`] for use in async runtimes.
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. Cart
//! operations are in-memory and fast; only file persistence and email
//! delivery do real I/O.
//!
//! # Example
//!
//! ```no_run
//! use storefront_sdk::AsyncStorefrontSdk;
//! use storefront_sdk::models::Product;
//!
//! # async fn example() -> storefront_sdk::Result<()> {
//! let sdk = AsyncStorefrontSdk::builder().build().await?;
//!
//! sdk.run(|s| {
//!     s.cart_mut().add_to_cart(&Product {
//!         id: "p1".into(),
//!         name: "Concrete Mug".into(),
//!         image: "/img/mug.png".into(),
//!         price: 2_500,
//!     });
//!     Ok(())
//! })
//! .await?;
//!
//! let pricing = sdk.pricing().await?;
//! assert_eq!(pricing.subtotal, 2_500);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;

use crate::error::{Result, StorefrontError};
use crate::models::PricingBreakdown;
use crate::storage::CartStorage;
use crate::email::EmailSender;
use crate::StorefrontSdk;

// ---------------------------------------------------------------------------
// AsyncStorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStorefrontSdk`].
#[derive(Default)]
pub struct AsyncStorefrontSdkBuilder {
    storage: Option<Box<dyn CartStorage>>,
    storage_dir: Option<PathBuf>,
    email_sender: Option<Box<dyn EmailSender>>,
    reminder_delay: Option<Duration>,
    abandonment_threshold: Option<Duration>,
    return_url: Option<String>,
}

impl AsyncStorefrontSdkBuilder {
    /// Use a custom storage backend for the persisted cart.
    pub fn storage(mut self, storage: Box<dyn CartStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Set the directory for the default file-backed cart storage.
    pub fn storage_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.storage_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set the sender used for recovery emails.
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

    /// Build the async SDK, loading persisted cart state on the blocking
    /// thread pool so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncStorefrontSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = StorefrontSdk::builder();
            if let Some(storage) = self.storage {
                builder = builder.storage(storage);
            }
            if let Some(dir) = self.storage_dir {
                builder = builder.storage_dir(dir);
            }
            if let Some(sender) = self.email_sender {
                builder = builder.email_sender(sender);
            }
            if let Some(delay) = self.reminder_delay {
                builder = builder.reminder_delay(delay);
            }
            if let Some(threshold) = self.abandonment_threshold {
                builder = builder.abandonment_threshold(threshold);
            }
            if let Some(url) = self.return_url {
                builder = builder.return_url(url);
            }
            let sdk = builder.build()?;
            Ok(AsyncStorefrontSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncStorefrontSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`StorefrontSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]; the underlying SDK is protected by a
/// [`Mutex`]. Clones share the same SDK instance.
#[derive(Clone)]
pub struct AsyncStorefrontSdk {
    inner: Arc<Mutex<StorefrontSdk>>,
}

impl AsyncStorefrontSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncStorefrontSdkBuilder {
        AsyncStorefrontSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives `&mut StorefrontSdk` and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StorefrontSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk
                .lock()
                .map_err(|_| StorefrontError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Pricing breakdown for the current cart contents.
    pub async fn pricing(&self) -> Result<PricingBreakdown> {
        self.run(|s| Ok(s.pricing())).await
    }

    /// Complete checkout: mark the abandoned record recovered and clear the
    /// cart.
    pub async fn complete_checkout(&self, email: Option<&str>) -> Result<()> {
        let email = email.map(str::to_string);
        self.run(move |s| {
            s.complete_checkout(email.as_deref());
            Ok(())
        })
        .await
    }

    /// Spawn a loop that fires due abandonment checks every `interval`.
    ///
    /// Each tick runs [`AbandonedCartTracker::run_due_checks`] against the
    /// wall clock. The loop runs until the returned handle is aborted.
    ///
    /// [`AbandonedCartTracker::run_due_checks`]: crate::abandoned::AbandonedCartTracker::run_due_checks
    pub fn spawn_reminder_loop(&self, interval: Duration) -> tokio::task::JoinHandle<()> {
        let sdk = self.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                let _ = sdk
                    .run(|s| Ok(s.abandoned_mut().run_due_checks(Utc::now())))
                    .await;
            }
        })
    }
}
