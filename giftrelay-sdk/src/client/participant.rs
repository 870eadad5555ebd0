//! Relay API client (participant-facing frontends → giftrelay server).
//!
//! The `event` argument on every call is either `scope:name` or a bare
//! portable event id; the bare form is what a participant who only knows
//! their direct-message thread can use.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::{ClientError, error_from_response};
use crate::objects::{
    GiftFlagResponse, RelayReceipt, RelayRequest, WhoAmIResponse, WishlistRequest,
};

/// Typed HTTP client for the giftrelay **Relay API**.
#[derive(Debug, Clone)]
pub struct ParticipantClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl ParticipantClient {
    /// Create a new `ParticipantClient`.
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            token: token.into(),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(self.base_url.join(path)?)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// `POST /api/v1/relay/{event}/send` – anonymous message to the
    /// caller's giftee.
    pub async fn send_anonymous(
        &self,
        event: &str,
        req: &RelayRequest,
    ) -> Result<RelayReceipt, ClientError> {
        self.post(&format!("api/v1/relay/{event}/send"), req).await
    }

    /// `POST /api/v1/relay/{event}/reply` – anonymous reply to the
    /// caller's Santa.
    pub async fn reply_anonymous(
        &self,
        event: &str,
        req: &RelayRequest,
    ) -> Result<RelayReceipt, ClientError> {
        self.post(&format!("api/v1/relay/{event}/reply"), req).await
    }

    /// `PUT /api/v1/relay/{event}/wishlist` – replace the caller's wishlist.
    pub async fn set_wishlist(
        &self,
        event: &str,
        req: &WishlistRequest,
    ) -> Result<RelayReceipt, ClientError> {
        let resp = self
            .http
            .put(self.base_url.join(&format!("api/v1/relay/{event}/wishlist"))?)
            .bearer_auth(&self.token)
            .json(req)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// `POST /api/v1/relay/{event}/sent` – mark the caller's gift as sent.
    pub async fn mark_sent(
        &self,
        event: &str,
        participant: &str,
    ) -> Result<GiftFlagResponse, ClientError> {
        self.post(
            &format!("api/v1/relay/{event}/sent"),
            &serde_json::json!({ "participant": participant }),
        )
        .await
    }

    /// `POST /api/v1/relay/{event}/received` – mark the caller's gift as
    /// received.
    pub async fn mark_received(
        &self,
        event: &str,
        participant: &str,
    ) -> Result<GiftFlagResponse, ClientError> {
        self.post(
            &format!("api/v1/relay/{event}/received"),
            &serde_json::json!({ "participant": participant }),
        )
        .await
    }

    /// `GET /api/v1/relay/{event}/whoami?participant=…` – the caller's
    /// assignment, for direct-message display only.
    pub async fn whoami(
        &self,
        event: &str,
        participant: &str,
    ) -> Result<WhoAmIResponse, ClientError> {
        let mut url = self.base_url.join(&format!("api/v1/relay/{event}/whoami"))?;
        url.query_pairs_mut().append_pair("participant", participant);
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }
}
