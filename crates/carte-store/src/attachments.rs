//! Attachment access for a record's QR image.
//!
//! Attachments are produced out-of-band by the automation; this module
//! only lists and downloads them.

use bytes::Bytes;
use tracing::debug;
use url::Url;

use carte_shared::{Attachment, RecordId};

use crate::client::{ListResponse, ListStoreClient};
use crate::error::{Result, StoreError};

impl ListStoreClient {
    /// All attachments of an item, in store-returned order.
    pub async fn list_attachments(&self, id: RecordId) -> Result<Vec<Attachment>> {
        let url = self.api_url(&format!("items({id})/AttachmentFiles"))?;
        let resp: ListResponse<Attachment> = self.get_json(url).await?;
        Ok(resp.value)
    }

    /// The canonical attachment: the first element of the store-returned
    /// collection, regardless of how many exist. The collection order is
    /// not contractual, so this is a policy, not a recency guarantee.
    pub async fn current_attachment(&self, id: RecordId) -> Result<Option<Attachment>> {
        Ok(self.list_attachments(id).await?.into_iter().next())
    }

    /// Absolute download URL: the site host joined with the attachment's
    /// server-relative path.
    pub fn attachment_url(&self, attachment: &Attachment) -> Result<Url> {
        let site = Url::parse(&self.config().site_url)?;
        Ok(site.join(&attachment.server_relative_url)?)
    }

    /// Download the attachment's bytes.
    pub async fn download_attachment(&self, attachment: &Attachment) -> Result<Bytes> {
        let url = self.attachment_url(attachment)?;
        debug!(url = %url, file = %attachment.file_name, "downloading attachment");

        let resp = self.http().get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(resp.bytes().await?)
    }
}
