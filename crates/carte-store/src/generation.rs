//! The generation-request protocol.
//!
//! Two deployment variants exist: asserting the record's trigger flag (the
//! store-side automation reacts to the field change) and calling the
//! automation's trigger URL directly. Both hang off one entry point so
//! callers never fork on the variant.

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use carte_shared::RecordId;

use crate::client::ListStoreClient;
use crate::error::{Result, StoreError};

/// How a generation request reaches the external automation.
#[derive(Debug, Clone)]
pub enum GenerationStrategy {
    /// Merge-update the record with `GenerateQRCode: true`.
    FlagSet,
    /// POST `{"ListID": "<record id>"}` to the automation's trigger URL.
    Webhook { url: Url },
}

#[derive(Serialize)]
struct WebhookPayload {
    #[serde(rename = "ListID")]
    list_id: String,
}

impl ListStoreClient {
    /// Ask the external automation to produce the QR attachment.
    ///
    /// Uniform contract for both variants: resolves on acceptance, fails
    /// with the endpoint-reported body in [`StoreError::Status`] otherwise.
    /// The attachment itself appears asynchronously, outside this system's
    /// control.
    pub async fn request_generation(&self, id: RecordId) -> Result<()> {
        match self.config().generation.clone() {
            GenerationStrategy::FlagSet => {
                self.merge_update(id, &json!({ "GenerateQRCode": true }))
                    .await?;
            }
            GenerationStrategy::Webhook { url } => {
                self.invoke_webhook(url, id).await?;
            }
        }

        info!(record = %id, "generation requested");
        Ok(())
    }

    async fn invoke_webhook(&self, url: Url, id: RecordId) -> Result<()> {
        // confirm the record still exists before triggering the automation
        let record = self.get_record(id).await?;
        debug!(record = %id, first_name = %record.first_name, "invoking generation webhook");

        let payload = WebhookPayload {
            list_id: id.to_string(),
        };

        // the automation answers 202 Accepted when it queues the run
        let resp = self.http().post(url).json(&payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
