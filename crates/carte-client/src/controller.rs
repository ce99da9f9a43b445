//! Two-state view controller.
//!
//! Owns the state snapshot and the service, maps user actions onto store
//! operations, and projects state to markup. Every remote failure is
//! converted to user-visible text at this boundary, so nothing below it
//! crashes the component. Nothing is retried automatically; a retry is
//! always a user re-click.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use carte_shared::{CardRecord, ContactPatch};

use crate::error::ClientError;
use crate::events::{
    emit_event, DownloadReadyPayload, EventSink, GenerationRequestedPayload, RecordSavedPayload,
    ViewChangedPayload, EVENT_DOWNLOAD_READY, EVENT_GENERATION_REQUESTED, EVENT_RECORD_SAVED,
    EVENT_VIEW_CHANGED,
};
use crate::service::{CardService, DownloadPayload};
use crate::state::{CardState, View};
use crate::views::edit::EditData;
use crate::views::home::HomeData;
use crate::views::{self, error_markup};

/// The component's view controller.
///
/// The host constructs one per mount point, calls [`load`] once, renders,
/// and forwards DOM events to the action methods. The host serializes
/// actions by disabling the triggering control until the returned future
/// resolves, so `&mut self` is never contended.
///
/// [`load`]: CardController::load
pub struct CardController {
    service: CardService,
    state: CardState,
    events: Option<Arc<dyn EventSink>>,
}

impl CardController {
    pub fn new(service: CardService, user_email: impl Into<String>) -> Self {
        Self {
            service,
            state: CardState::new(user_email),
            events: None,
        }
    }

    /// Attach a host event sink.
    pub fn with_events(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    /// Resolve the signed-in user's record.
    ///
    /// A resolution failure becomes the home view's error sub-state; a
    /// missing record is a distinct no-record sub-state, not an error.
    pub async fn load(&mut self) {
        match self.service.resolve(&self.state.user_email).await {
            Ok(record) => {
                if record.is_none() {
                    info!(email = %self.state.user_email, "no record for the signed-in user");
                }
                self.state.record = record;
                self.state.load_error = None;
            }
            Err(e) => {
                error!(error = %e, "failed to load the user record");
                self.state.load_error = Some(format!("Error loading data: {e}"));
            }
        }
        self.state.loaded = true;
    }

    /// Project the current state to markup.
    ///
    /// Home sub-states are derived here on every call by re-querying
    /// attachment presence; they are never stored.
    pub async fn render(&self) -> String {
        match self.state.view {
            View::Home => views::home::render(&self.home_data().await),
            View::Edit => self.render_edit().await,
        }
    }

    /// Profile-photo URL for the host's header chrome. The host keeps its
    /// placeholder when the image fails to load.
    pub fn profile_photo_url(&self) -> Option<String> {
        self.service
            .store()
            .profile_photo_url(&self.state.user_email)
            .ok()
            .map(|url| url.to_string())
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// `home -> edit` (edit or generate-prompt click).
    pub fn edit(&mut self) {
        self.set_view(View::Edit);
    }

    /// `edit -> home` (close click).
    pub fn close(&mut self) {
        self.set_view(View::Home);
    }

    fn set_view(&mut self, view: View) {
        if self.state.view == view {
            return;
        }
        self.state.view = view;
        info!(?view, "view switched");
        if let Some(sink) = &self.events {
            emit_event(sink.as_ref(), EVENT_VIEW_CHANGED, ViewChangedPayload { view });
        }
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Persist the form fields, then fold them into the snapshot.
    ///
    /// The snapshot only advances after the remote call confirms success;
    /// on failure it is left untouched and the error text is returned for
    /// inline display next to the save control.
    pub async fn save(&mut self, patch: ContactPatch) -> Result<(), String> {
        let id = self.require_record().map_err(|e| e.to_string())?.id;

        self.service
            .save(id, &patch)
            .await
            .map_err(|e| format!("Error saving: {e}"))?;

        if let Some(record) = self.state.record.as_mut() {
            record.apply(&patch);
        }

        if let Some(sink) = &self.events {
            emit_event(
                sink.as_ref(),
                EVENT_RECORD_SAVED,
                RecordSavedPayload {
                    record_id: id.0,
                    timestamp: Utc::now().to_rfc3339(),
                },
            );
        }
        Ok(())
    }

    /// Ask the external automation for a QR image. The attachment appears
    /// asynchronously; the home view picks it up on a later render.
    pub async fn generate(&self) -> Result<(), String> {
        let record = self.require_record().map_err(|e| e.to_string())?;

        self.service
            .request_generation(record.id)
            .await
            .map_err(|e| format!("Error requesting QR Code: {e}"))?;

        if let Some(sink) = &self.events {
            emit_event(
                sink.as_ref(),
                EVENT_GENERATION_REQUESTED,
                GenerationRequestedPayload {
                    record_id: record.id.0,
                    timestamp: Utc::now().to_rfc3339(),
                },
            );
        }
        Ok(())
    }

    /// The atomic save-then-generate form action.
    pub async fn save_and_generate(&mut self, patch: ContactPatch) -> Result<(), String> {
        self.save(patch).await?;
        self.generate().await
    }

    /// Build the download payload for the host's file-save dialog.
    ///
    /// `Ok(None)` means no attachment exists yet; normalization failures
    /// are already recovered inside the service.
    pub async fn download(&self) -> Result<Option<DownloadPayload>, String> {
        let record = self.require_record().map_err(|e| e.to_string())?;

        let payload = self
            .service
            .download(record)
            .await
            .map_err(|e| format!("Error downloading QR Code: {e}"))?;

        if let (Some(payload), Some(sink)) = (&payload, &self.events) {
            emit_event(
                sink.as_ref(),
                EVENT_DOWNLOAD_READY,
                DownloadReadyPayload {
                    file_name: payload.file_name().to_string(),
                    normalized: matches!(payload, DownloadPayload::Normalized { .. }),
                },
            );
        }
        Ok(payload)
    }

    fn require_record(&self) -> Result<&CardRecord, ClientError> {
        self.state.record.as_ref().ok_or(ClientError::NoRecord)
    }

    // ------------------------------------------------------------------
    // Derived render data
    // ------------------------------------------------------------------

    async fn home_data(&self) -> HomeData {
        if !self.state.loaded {
            return HomeData::Loading;
        }
        if let Some(message) = &self.state.load_error {
            return HomeData::Error {
                message: message.clone(),
            };
        }
        let Some(record) = &self.state.record else {
            return HomeData::NoRecord {
                email: self.state.user_email.clone(),
            };
        };

        match self.service.current_attachment(record.id).await {
            Ok(Some(attachment)) => match self.service.store().attachment_url(&attachment) {
                Ok(url) => HomeData::QrCode {
                    qr_url: url.to_string(),
                },
                Err(e) => HomeData::Error {
                    message: format!("Error loading QR Code: {e}"),
                },
            },
            Ok(None) => HomeData::GeneratePrompt,
            Err(e) => HomeData::Error {
                message: format!("Error loading QR Code: {e}"),
            },
        }
    }

    async fn render_edit(&self) -> String {
        let Some(record) = &self.state.record else {
            return views::home::render(&HomeData::NoRecord {
                email: self.state.user_email.clone(),
            });
        };

        match self.service.current_attachment(record.id).await {
            Ok(attachment) => views::edit::render(&EditData {
                record,
                has_attachment: attachment.is_some(),
            }),
            Err(e) => error_markup(&format!("Error loading form: {e}")),
        }
    }
}
