//! HTTP client for the list store's REST surface.
//!
//! The [`ListStoreClient`] owns a [`reqwest::Client`] plus the
//! [`StoreConfig`] and exposes typed operations for everything the
//! component does remotely. Domain-level helpers live in the sibling
//! modules (`resolver`, `attachments`, `generation`) as further `impl`
//! blocks on the same type.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use carte_shared::{CardRecord, ContactPatch, RecordId};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Field projection used for every record query.
pub(crate) const SELECT_FIELDS: &str = "Id,Title,FirstName,LastName,Email,PhoneNumber,Company,\
                                        JobTitle,MobilePhone,Instagram,Facebook,Gmail,OtherPhone";

/// Content type the store expects for metadata-free JSON.
const ODATA_JSON: &str = "application/json;odata=nometadata";

/// Envelope the store wraps collection responses in.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ListResponse<T> {
    #[serde(default)]
    pub value: Vec<T>,
}

/// Client for the hosted list store.
///
/// The embedding host normally hands in its pre-authenticated
/// [`reqwest::Client`] via [`ListStoreClient::with_client`]; [`new`]
/// builds a plain client for development against open endpoints.
///
/// [`new`]: ListStoreClient::new
pub struct ListStoreClient {
    http: reqwest::Client,
    config: StoreConfig,
}

impl ListStoreClient {
    /// Create a client with a default HTTP stack.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client around a host-provided (authenticated) HTTP client.
    pub fn with_client(http: reqwest::Client, config: StoreConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Build `{site}/_api/web/lists/getbytitle('{list}')/{resource}`.
    pub(crate) fn api_url(&self, resource: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}/_api/web/lists/getbytitle('{}')/{resource}",
            self.config.site_url.trim_end_matches('/'),
            self.config.list_name,
        ))?)
    }

    /// GET a JSON resource, mapping non-success statuses to
    /// [`StoreError::Status`] with the response body attached.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "list store GET");

        let resp = self.http.get(url).header(ACCEPT, ODATA_JSON).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Partial update via the store's merge verb. The unconditional match
    /// precondition overwrites whatever version the store currently holds.
    pub(crate) async fn merge_update<B: Serialize>(&self, id: RecordId, body: &B) -> Result<()> {
        let url = self.api_url(&format!("items({id})"))?;
        debug!(url = %url, "list store MERGE");

        let resp = self
            .http
            .post(url)
            .header(ACCEPT, ODATA_JSON)
            .header(CONTENT_TYPE, ODATA_JSON)
            .header("odata-version", "")
            .header("IF-MATCH", "*")
            .header("X-HTTP-Method", "MERGE")
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Records whose email matches exactly (server-side, case-sensitive).
    pub async fn query_by_email(&self, email: &str) -> Result<Vec<CardRecord>> {
        let mut url = self.api_url("items")?;
        url.query_pairs_mut()
            .append_pair("$filter", &format!("Email eq '{email}'"))
            .append_pair("$select", SELECT_FIELDS);

        let resp: ListResponse<CardRecord> = self.get_json(url).await?;
        Ok(resp.value)
    }

    /// The whole list, capped at the configured fallback scan limit.
    pub async fn fetch_all(&self) -> Result<Vec<CardRecord>> {
        let mut url = self.api_url("items")?;
        url.query_pairs_mut()
            .append_pair("$select", SELECT_FIELDS)
            .append_pair("$top", &self.config.fallback_scan_limit.to_string());

        let resp: ListResponse<CardRecord> = self.get_json(url).await?;
        Ok(resp.value)
    }

    /// Fetch a single record by id.
    pub async fn get_record(&self, id: RecordId) -> Result<CardRecord> {
        let mut url = self.api_url(&format!("items({id})"))?;
        url.query_pairs_mut().append_pair("$select", SELECT_FIELDS);
        match self.get_json(url).await {
            Err(StoreError::Status { status: 404, .. }) => Err(StoreError::NotFound),
            other => other,
        }
    }

    /// Merge the owner-editable contact fields into the remote record.
    pub async fn update_record(&self, id: RecordId, patch: &ContactPatch) -> Result<()> {
        self.merge_update(id, patch).await?;
        info!(record = %id, "record updated");
        Ok(())
    }

    /// Deterministic profile-photo URL for the signed-in user, served by
    /// the site host. The view embeds it directly; the host keeps its
    /// placeholder when the image fails to load.
    pub fn profile_photo_url(&self, email: &str) -> Result<Url> {
        let site = Url::parse(&self.config.site_url)?;
        let mut url = site.join("/_layouts/15/userphoto.aspx")?;
        url.query_pairs_mut()
            .append_pair("size", "L")
            .append_pair("username", email);
        Ok(url)
    }
}
