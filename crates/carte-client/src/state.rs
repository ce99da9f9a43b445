//! Component state shared between the controller's operations.
//!
//! The controller replaces the snapshot after successful mutations; render
//! functions only ever read it. User actions are serialized by the host
//! (controls are disabled while an operation is in flight), so nothing
//! here needs interior mutability.

use serde::Serialize;

use carte_shared::CardRecord;

/// Which of the two top-level views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Edit,
}

/// Owned snapshot of the component state.
///
/// Sub-states of the home view (loading, QR display, generate prompt,
/// no-record, error) are derived per render by re-querying attachment
/// presence; they are never stored here.
#[derive(Debug, Clone)]
pub struct CardState {
    /// Email of the signed-in user, provided by the host page context.
    pub user_email: String,

    /// The resolved record. `None` before the initial load completes and
    /// when no record exists for the user.
    pub record: Option<CardRecord>,

    /// Active view.
    pub view: View,

    /// Fatal resolution failure, rendered in place of the home content.
    pub load_error: Option<String>,

    /// Whether the initial load has completed.
    pub loaded: bool,
}

impl CardState {
    /// Fresh pre-load state for the given user.
    pub fn new(user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            record: None,
            view: View::Home,
            load_error: None,
            loaded: false,
        }
    }
}
