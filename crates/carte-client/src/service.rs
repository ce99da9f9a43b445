//! Card service: orchestrates the store client and the image pipeline on
//! behalf of the controller.

use tracing::{info, warn};

use carte_media::{normalize_to_png, FitBounds, SourceKind};
use carte_shared::constants::{DOWNLOAD_FALLBACK_NAME, DOWNLOAD_PREFIX};
use carte_shared::{vcard, Attachment, CardRecord, ContactPatch, RecordId};
use carte_store::ListStoreClient;

use crate::error::ClientError;

/// What the host should hand to its file-save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadPayload {
    /// The attachment normalized into a bounded PNG.
    Normalized { file_name: String, bytes: Vec<u8> },
    /// The unmodified original, offered when normalization fails.
    Original { file_name: String, bytes: Vec<u8> },
}

impl DownloadPayload {
    pub fn file_name(&self) -> &str {
        match self {
            Self::Normalized { file_name, .. } | Self::Original { file_name, .. } => file_name,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Normalized { bytes, .. } | Self::Original { bytes, .. } => bytes,
        }
    }
}

/// Orchestrates reads, writes and the generation side effect against the
/// list store, plus download preparation.
pub struct CardService {
    store: ListStoreClient,
    bounds: FitBounds,
}

impl CardService {
    pub fn new(store: ListStoreClient) -> Self {
        Self::with_bounds(store, FitBounds::default())
    }

    /// Override the normalization bounds (e.g. the fixed-square canvas of
    /// earlier deployments via [`FitBounds::square`]).
    pub fn with_bounds(store: ListStoreClient, bounds: FitBounds) -> Self {
        Self { store, bounds }
    }

    pub fn store(&self) -> &ListStoreClient {
        &self.store
    }

    /// Resolve the signed-in user's record.
    pub async fn resolve(&self, email: &str) -> Result<Option<CardRecord>, ClientError> {
        Ok(self.store.resolve_by_email(email).await?)
    }

    /// Persist the owner-editable contact fields.
    pub async fn save(&self, id: RecordId, patch: &ContactPatch) -> Result<(), ClientError> {
        self.store.update_record(id, patch).await?;
        Ok(())
    }

    /// Ask the external automation to produce a QR image.
    pub async fn request_generation(&self, id: RecordId) -> Result<(), ClientError> {
        self.store.request_generation(id).await?;
        Ok(())
    }

    /// The record's canonical attachment, if one exists yet.
    pub async fn current_attachment(&self, id: RecordId) -> Result<Option<Attachment>, ClientError> {
        Ok(self.store.current_attachment(id).await?)
    }

    /// The payload the automation encodes into the QR image.
    pub fn vcard(&self, record: &CardRecord) -> String {
        vcard::render(record)
    }

    /// Fetch the record's QR attachment and normalize it for download.
    ///
    /// Normalization failures are recovered locally: the caller gets the
    /// unmodified original bytes under the attachment's own name instead
    /// of an error. `Ok(None)` means the record has no attachment yet.
    pub async fn download(
        &self,
        record: &CardRecord,
    ) -> Result<Option<DownloadPayload>, ClientError> {
        let Some(attachment) = self.store.current_attachment(record.id).await? else {
            return Ok(None);
        };

        let bytes = self.store.download_attachment(&attachment).await?;
        let kind = SourceKind::infer(&attachment.file_name, &bytes);

        match normalize_to_png(&bytes, kind, self.bounds) {
            Ok(png) => {
                info!(
                    file = %attachment.file_name,
                    size = png.len(),
                    "QR image normalized for download"
                );
                Ok(Some(DownloadPayload::Normalized {
                    file_name: download_file_name(&record.first_name),
                    bytes: png,
                }))
            }
            Err(e) => {
                warn!(
                    file = %attachment.file_name,
                    error = %e,
                    "normalization failed, falling back to the original file"
                );
                Ok(Some(DownloadPayload::Original {
                    file_name: attachment.file_name.clone(),
                    bytes: bytes.to_vec(),
                }))
            }
        }
    }
}

/// `QR_Code_<FirstName>.png`, or the generic label when the name is blank.
fn download_file_name(first_name: &str) -> String {
    let first = first_name.trim();
    if first.is_empty() {
        DOWNLOAD_FALLBACK_NAME.to_string()
    } else {
        format!("{DOWNLOAD_PREFIX}{first}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_names_follow_the_first_name() {
        assert_eq!(download_file_name("Nora"), "QR_Code_Nora.png");
        assert_eq!(download_file_name("  Nora  "), "QR_Code_Nora.png");
        assert_eq!(download_file_name(""), "QR_Code.png");
        assert_eq!(download_file_name("   "), "QR_Code.png");
    }
}
