//! Best-effort reminder tracking for carts abandoned before checkout.
//!
//! Records live in process memory only and are lost on restart -- acceptable
//! because this is a marketing nudge, not a transactional record. Each
//! `track_cart` enqueues exactly one deferred check; `update_cart` refreshes
//! the snapshot but never reschedules, so a cart updated after its single
//! window closes receives no further reminder.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use log::{debug, info, warn};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

use crate::config;
use crate::email::EmailSender;
use crate::models::{AbandonedCart, AbandonedItem};

/// Name of the provider-side template used for recovery emails.
pub const RECOVERY_TEMPLATE: &str = "cart_recovery";

/// Durations beyond chrono's range saturate to ~100 years, which still keeps
/// the due time safely addable to any realistic wall-clock timestamp.
fn to_chrono(d: Duration) -> ChronoDuration {
    ChronoDuration::from_std(d).unwrap_or_else(|_| ChronoDuration::days(36_500))
}

// ---------------------------------------------------------------------------
// AbandonedCartTracker
// ---------------------------------------------------------------------------

struct PendingCheck {
    email: String,
    due: DateTime<Utc>,
}

/// Process-wide tracker mapping customer email to an abandoned-cart record.
///
/// One record per email, last writer wins. Construct one instance at
/// application startup and inject it where needed; there is no global
/// singleton, so tests get isolated trackers.
///
/// The tracker never sleeps itself: due times are stored alongside the
/// records and fired by [`run_due_checks`](Self::run_due_checks), which a
/// host calls on whatever schedule it likes (the optional async wrapper
/// provides a tokio loop for this).
pub struct AbandonedCartTracker {
    carts: HashMap<String, AbandonedCart>,
    pending: Vec<PendingCheck>,
    sender: Box<dyn EmailSender>,
    reminder_delay: ChronoDuration,
    abandonment_threshold: ChronoDuration,
    return_url: String,
}

impl AbandonedCartTracker {
    /// Create a tracker with the default timing constants and return URL.
    pub fn new(sender: Box<dyn EmailSender>) -> Self {
        Self {
            carts: HashMap::new(),
            pending: Vec::new(),
            sender,
            reminder_delay: to_chrono(config::REMINDER_DELAY),
            abandonment_threshold: to_chrono(config::ABANDONMENT_THRESHOLD),
            return_url: config::RETURN_URL.to_string(),
        }
    }

    /// Override the delay between `track_cart` and its single check.
    pub fn with_reminder_delay(mut self, delay: Duration) -> Self {
        self.reminder_delay = to_chrono(delay);
        self
    }

    /// Override the recent-activity window that suppresses a reminder.
    pub fn with_abandonment_threshold(mut self, threshold: Duration) -> Self {
        self.abandonment_threshold = to_chrono(threshold);
        self
    }

    /// Override the return-to-cart URL embedded in recovery emails.
    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = url.into();
        self
    }

    // -- Record lifecycle --------------------------------------------------

    /// Create or overwrite the record for `email` with a fresh snapshot and
    /// schedule its single deferred check.
    pub fn track_cart(
        &mut self,
        email: &str,
        customer_name: &str,
        items: Vec<AbandonedItem>,
    ) -> &AbandonedCart {
        self.track_cart_at(email, customer_name, items, Utc::now())
    }

    /// [`track_cart`](Self::track_cart) with an explicit clock, for
    /// deterministic tests.
    pub fn track_cart_at(
        &mut self,
        email: &str,
        customer_name: &str,
        items: Vec<AbandonedItem>,
        now: DateTime<Utc>,
    ) -> &AbandonedCart {
        let total = items.iter().map(AbandonedItem::line_total).sum();
        let record = AbandonedCart {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            customer_name: customer_name.to_string(),
            items,
            total,
            created_at: now,
            last_updated: now,
            recovered: false,
        };
        self.pending.push(PendingCheck {
            email: email.to_string(),
            due: now + self.reminder_delay,
        });
        match self.carts.entry(email.to_string()) {
            std::collections::hash_map::Entry::Occupied(mut e) => {
                e.insert(record);
                e.into_mut()
            }
            std::collections::hash_map::Entry::Vacant(e) => e.insert(record),
        }
    }

    /// Refresh items, total, and `last_updated` for an existing record.
    ///
    /// Returns `None` when no record exists for `email`. Does not schedule
    /// a new check.
    pub fn update_cart(&mut self, email: &str, items: Vec<AbandonedItem>) -> Option<&AbandonedCart> {
        self.update_cart_at(email, items, Utc::now())
    }

    /// [`update_cart`](Self::update_cart) with an explicit clock.
    pub fn update_cart_at(
        &mut self,
        email: &str,
        items: Vec<AbandonedItem>,
        now: DateTime<Utc>,
    ) -> Option<&AbandonedCart> {
        let record = self.carts.get_mut(email)?;
        record.total = items.iter().map(AbandonedItem::line_total).sum();
        record.items = items;
        record.last_updated = now;
        Some(record)
    }

    /// Flag the record for `email` as recovered. Idempotent; `false` when no
    /// record exists.
    pub fn mark_recovered(&mut self, email: &str) -> bool {
        match self.carts.get_mut(email) {
            Some(record) => {
                record.recovered = true;
                true
            }
            None => false,
        }
    }

    /// Delete the record for `email` unconditionally.
    pub fn remove_cart(&mut self, email: &str) -> bool {
        self.carts.remove(email).is_some()
    }

    // -- Reads -------------------------------------------------------------

    pub fn get(&self, email: &str) -> Option<&AbandonedCart> {
        self.carts.get(email)
    }

    /// Number of tracked records (recovered ones included).
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    /// Number of deferred checks that have not fired yet.
    pub fn pending_checks(&self) -> usize {
        self.pending.len()
    }

    // -- Deferred checks ---------------------------------------------------

    /// Fire every scheduled check whose due time has passed.
    ///
    /// A due check sends exactly one recovery email unless its record is
    /// gone, already recovered, or was updated within the abandonment
    /// threshold of `now`. Checks are consumed whether or not an email goes
    /// out, and send failures are logged, not retried. Returns the number of
    /// emails sent.
    pub fn run_due_checks(&mut self, now: DateTime<Utc>) -> usize {
        let mut due = Vec::new();
        self.pending.retain_mut(|check| {
            if check.due <= now {
                due.push(std::mem::take(&mut check.email));
                false
            } else {
                true
            }
        });

        let mut sent = 0;
        for email in due {
            let Some(record) = self.carts.get(&email) else {
                debug!("abandonment check for {email}: record gone, skipping");
                continue;
            };
            if record.recovered {
                debug!("abandonment check for {email}: already recovered, skipping");
                continue;
            }
            if now - record.last_updated < self.abandonment_threshold {
                debug!("abandonment check for {email}: recently active, skipping");
                continue;
            }

            let payload = json!({
                "customerName": &record.customer_name,
                "items": &record.items,
                "cartTotal": record.total,
                "returnUrl": &self.return_url,
            });
            match self.sender.send(&email, RECOVERY_TEMPLATE, &payload) {
                Ok(()) => {
                    info!("sent cart recovery email to {email}");
                    sent += 1;
                }
                Err(e) => {
                    warn!("cart recovery email to {email} failed, not retried: {e}");
                }
            }
        }
        sent
    }

    // -- Maintenance -------------------------------------------------------

    /// Delete records created more than `days_old` days ago.
    ///
    /// Returns the number deleted. Not scheduled automatically; exposed as a
    /// callable maintenance operation only.
    pub fn cleanup_old_carts(&mut self, days_old: i64) -> usize {
        self.cleanup_old_carts_at(days_old, Utc::now())
    }

    /// [`cleanup_old_carts`](Self::cleanup_old_carts) with an explicit clock.
    pub fn cleanup_old_carts_at(&mut self, days_old: i64, now: DateTime<Utc>) -> usize {
        let horizon = now - ChronoDuration::days(days_old);
        let before = self.carts.len();
        self.carts.retain(|_, record| record.created_at >= horizon);
        before - self.carts.len()
    }
}

impl std::fmt::Debug for AbandonedCartTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbandonedCartTracker")
            .field("carts", &self.carts.len())
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}
