//! Admin API client (operator tooling → giftrelay server).

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::{ClientError, error_from_response};
use crate::objects::{
    CreateEventRequest, EventStatusResponse, EventSummary, ImportEventRequest, DeliveryReport,
    MutationReport, ParticipantsRequest, PurgeReport,
};

/// Typed HTTP client for the giftrelay **Admin API**.
///
/// Every request carries the admin bearer token from the server config.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl AdminClient {
    /// Create a new `AdminClient`.
    ///
    /// * `base_url` – root URL of the giftrelay server.
    /// * `token` – the `[auth] admin_token` from the server config.
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

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(self.endpoint(path)?)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(self.endpoint(path)?)
            .bearer_auth(&self.token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// `POST /api/v1/admin/scopes/{scope}/events` – create an event.
    pub async fn create_event(
        &self,
        scope: &str,
        req: &CreateEventRequest,
    ) -> Result<(EventSummary, DeliveryReport), ClientError> {
        self.post(&format!("api/v1/admin/scopes/{scope}/events"), req)
            .await
    }

    /// `POST /api/v1/admin/scopes/{scope}/events/import` – import an event
    /// with forced pairings.
    pub async fn import_event(
        &self,
        scope: &str,
        req: &ImportEventRequest,
    ) -> Result<EventSummary, ClientError> {
        self.post(&format!("api/v1/admin/scopes/{scope}/events/import"), req)
            .await
    }

    /// `POST /api/v1/admin/scopes/{scope}/events/{name}/match` – assign a
    /// random derangement and notify participants.
    pub async fn match_event(&self, scope: &str, name: &str) -> Result<DeliveryReport, ClientError> {
        self.post(
            &format!("api/v1/admin/scopes/{scope}/events/{name}/match"),
            &(),
        )
        .await
    }

    /// `POST /api/v1/admin/scopes/{scope}/events/{name}/rematch` – clear all
    /// pairings so the event can be matched again.
    pub async fn rematch_event(&self, scope: &str, name: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(self.endpoint(&format!(
                "api/v1/admin/scopes/{scope}/events/{name}/rematch"
            ))?)
            .bearer_auth(&self.token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }

    /// `POST /api/v1/admin/scopes/{scope}/events/{name}/participants` – add
    /// participants to an unmatched event.
    pub async fn add_participants(
        &self,
        scope: &str,
        name: &str,
        req: &ParticipantsRequest,
    ) -> Result<MutationReport, ClientError> {
        self.post(
            &format!("api/v1/admin/scopes/{scope}/events/{name}/participants"),
            req,
        )
        .await
    }

    /// `DELETE /api/v1/admin/scopes/{scope}/events/{name}/participants` –
    /// remove participants from an unmatched event.
    pub async fn remove_participants(
        &self,
        scope: &str,
        name: &str,
        req: &ParticipantsRequest,
    ) -> Result<MutationReport, ClientError> {
        let resp = self
            .http
            .delete(self.endpoint(&format!(
                "api/v1/admin/scopes/{scope}/events/{name}/participants"
            ))?)
            .bearer_auth(&self.token)
            .json(req)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// `DELETE /api/v1/admin/scopes/{scope}/events/{name}` – delete the
    /// event and its portable-id lookup entry.
    pub async fn delete_event(&self, scope: &str, name: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.endpoint(&format!("api/v1/admin/scopes/{scope}/events/{name}"))?)
            .bearer_auth(&self.token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }

    /// `GET /api/v1/admin/scopes/{scope}/events/{name}/status` – status view.
    pub async fn status(&self, scope: &str, name: &str) -> Result<EventStatusResponse, ClientError> {
        self.get(&format!("api/v1/admin/scopes/{scope}/events/{name}/status"))
            .await
    }

    /// `GET /api/v1/admin/scopes/{scope}/events` – list events in a scope.
    pub async fn list_events(&self, scope: &str) -> Result<Vec<EventSummary>, ClientError> {
        self.get(&format!("api/v1/admin/scopes/{scope}/events"))
            .await
    }

    /// `DELETE /api/v1/admin/participants/{participant}` – remove one
    /// participant from every event in every scope (data deletion).
    pub async fn purge_participant(&self, participant: &str) -> Result<PurgeReport, ClientError> {
        let resp = self
            .http
            .delete(self.endpoint(&format!("api/v1/admin/participants/{participant}"))?)
            .bearer_auth(&self.token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }
}
