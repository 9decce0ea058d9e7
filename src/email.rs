//! Templated-email delivery through a hosted transactional provider.
//!
//! The SDK never renders email HTML itself: it posts a template name and a
//! data payload to the provider, which owns rendering and delivery.

use crate::config;
use crate::error::{Result, StorefrontError};
use log::debug;
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// Delivery interface for templated transactional email.
pub trait EmailSender: Send {
    /// Send `template` to `to` with the given data payload.
    fn send(&mut self, to: &str, template: &str, payload: &Value) -> Result<()>;
}

// ---------------------------------------------------------------------------
// HttpEmailSender
// ---------------------------------------------------------------------------

/// Sends email via a hosted provider's HTTP API.
pub struct HttpEmailSender {
    endpoint: String,
    api_key: String,
    timeout: Duration,
    client: Option<Client>,
}

impl HttpEmailSender {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout: config::EMAIL_TIMEOUT,
            client: None,
        }
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Lazy HTTP client, created on first send.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder().timeout(self.timeout).build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| StorefrontError::Email("HTTP client unavailable".to_string()))
    }
}

impl EmailSender for HttpEmailSender {
    fn send(&mut self, to: &str, template: &str, payload: &Value) -> Result<()> {
        let endpoint = self.endpoint.clone();
        let api_key = self.api_key.clone();
        let body = json!({
            "to": to,
            "template": template,
            "data": payload,
        });
        let client = self.client()?;
        client
            .post(&endpoint)
            .bearer_auth(&api_key)
            .json(&body)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// NoopEmailSender
// ---------------------------------------------------------------------------

/// Default sender: logs the send and reports success without delivering.
///
/// Useful in development and in hosts that wire delivery elsewhere.
#[derive(Debug, Default)]
pub struct NoopEmailSender;

impl EmailSender for NoopEmailSender {
    fn send(&mut self, to: &str, template: &str, _payload: &Value) -> Result<()> {
        debug!("email send skipped (noop sender): to={to} template={template}");
        Ok(())
    }
}
