//! Shared test fixtures for the storefront SDK integration tests.
//!
//! Provides sample catalog products, a fresh in-memory cart engine, and a
//! recording email sender that captures sends instead of delivering them.
#![allow(dead_code)]

use serde_json::Value;
use std::sync::{Arc, Mutex};

use storefront_sdk::email::EmailSender;
use storefront_sdk::models::{AbandonedItem, Product};
use storefront_sdk::storage::MemoryStorage;
use storefront_sdk::{CartEngine, Result};

// -- Sample catalog ---------------------------------------------------------

pub fn widget() -> Product {
    Product {
        id: "p1".to_string(),
        name: "Widget".to_string(),
        image: "/img/widget.png".to_string(),
        price: 500,
    }
}

pub fn gadget() -> Product {
    Product {
        id: "p2".to_string(),
        name: "Gadget".to_string(),
        image: "/img/gadget.png".to_string(),
        price: 2_450,
    }
}

pub fn anvil() -> Product {
    Product {
        id: "p3".to_string(),
        name: "Anvil".to_string(),
        image: "/img/anvil.png".to_string(),
        price: 9_999,
    }
}

// -- Cart fixture -----------------------------------------------------------

/// A cart engine backed by empty in-memory storage.
pub fn empty_cart() -> CartEngine {
    CartEngine::load(Box::new(MemoryStorage::new()))
}

/// Snapshot items for tracker tests: two Widgets at 500 each (total 1000).
pub fn widget_snapshot() -> Vec<AbandonedItem> {
    vec![AbandonedItem {
        name: "Widget".to_string(),
        image: "/img/widget.png".to_string(),
        price: 500,
        quantity: 2,
    }]
}

// -- Recording email sender -------------------------------------------------

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub template: String,
    pub payload: Value,
}

/// Email sender that records every send into a shared log.
pub struct RecordingSender {
    log: Arc<Mutex<Vec<SentEmail>>>,
    /// When true, every send fails after being recorded.
    pub fail: bool,
}

impl RecordingSender {
    /// Create a sender plus a handle to its send log.
    pub fn new() -> (Self, Arc<Mutex<Vec<SentEmail>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                log: log.clone(),
                fail: false,
            },
            log,
        )
    }

    /// Create a sender whose sends are recorded but always report failure.
    pub fn failing() -> (Self, Arc<Mutex<Vec<SentEmail>>>) {
        let (mut sender, log) = Self::new();
        sender.fail = true;
        (sender, log)
    }
}

impl EmailSender for RecordingSender {
    fn send(&mut self, to: &str, template: &str, payload: &Value) -> Result<()> {
        self.log.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            template: template.to_string(),
            payload: payload.clone(),
        });
        if self.fail {
            return Err(storefront_sdk::StorefrontError::Email(
                "provider rejected the message".to_string(),
            ));
        }
        Ok(())
    }
}
