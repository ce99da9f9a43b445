//! Host-visible component events.
//!
//! The embedding host registers an [`EventSink`] to mirror component
//! activity into its own chrome (toasts, analytics). Emission is
//! best-effort: serialization failures are logged and dropped, never
//! surfaced to the user.

use serde::Serialize;

use crate::state::View;

pub const EVENT_VIEW_CHANGED: &str = "view-changed";
pub const EVENT_RECORD_SAVED: &str = "record-saved";
pub const EVENT_GENERATION_REQUESTED: &str = "generation-requested";
pub const EVENT_DOWNLOAD_READY: &str = "download-ready";

#[derive(Debug, Clone, Serialize)]
pub struct ViewChangedPayload {
    pub view: View,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordSavedPayload {
    pub record_id: i64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequestedPayload {
    pub record_id: i64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadReadyPayload {
    pub file_name: String,
    pub normalized: bool,
}

/// Sink the host implements to receive component events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &str, payload: serde_json::Value);
}

pub fn emit_event<S: Serialize>(sink: &dyn EventSink, event: &str, payload: S) {
    match serde_json::to_value(payload) {
        Ok(value) => sink.emit(event, value),
        Err(e) => tracing::error!(event, error = %e, "Failed to serialize event payload"),
    }
}
