//! Outbound notice delivery over a webhook.
//!
//! The server never talks to participants directly; each notice is POSTed
//! to the configured endpoint as a [`WebhookDelivery`] envelope and the
//! receiving bot owns the direct-message transport.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use giftrelay_core::ids::ParticipantId;
use giftrelay_core::notify::{DeliveryError, Notifier};
use giftrelay_sdk::objects::{Notice, WebhookDelivery};

use crate::config::file::DeliveryConfig;

/// Delivers notices to the configured webhook endpoint, one request per
/// recipient.
pub struct WebhookNotifier {
    client: reqwest::Client,
    delivery: Arc<RwLock<DeliveryConfig>>,
}

impl WebhookNotifier {
    pub fn new(delivery: Arc<RwLock<DeliveryConfig>>) -> Self {
        Self {
            client: reqwest::Client::new(),
            delivery,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn deliver(
        &self,
        recipient: &ParticipantId,
        notice: &Notice,
    ) -> Result<(), DeliveryError> {
        let (url, timeout_secs) = {
            let config = self.delivery.read().await;
            match &config.webhook_url {
                Some(url) => (url.clone(), config.timeout_secs),
                None => {
                    tracing::debug!(recipient = %recipient, "no webhook configured, dropping notice");
                    return Ok(());
                }
            }
        };

        let envelope = WebhookDelivery {
            recipient: recipient.to_string(),
            notice: notice.clone(),
        };
        let response = self
            .client
            .post(url.as_str())
            .timeout(Duration::from_secs(timeout_secs))
            .json(&envelope)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Timeout
                } else {
                    DeliveryError::Transport(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(DeliveryError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
