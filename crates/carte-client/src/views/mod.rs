//! Pure state-to-markup projections.
//!
//! Render functions take a data snapshot and return the full markup for
//! their view; the host swaps the mount point's content wholesale on each
//! re-render. Element ids are distinct across views so stale handlers can
//! never bind to the wrong variant of a logical control.

pub mod edit;
pub mod home;
pub mod html;

/// Element ids the host wires DOM events against.
pub mod ids {
    // home view
    pub const EDIT_BUTTON: &str = "editButton";
    pub const DOWNLOAD_HOME_BUTTON: &str = "downloadQrHome";
    pub const GENERATE_PROMPT_BUTTON: &str = "generatePromptButton";

    // edit view
    pub const FORM: &str = "cardForm";
    pub const SAVE_BUTTON: &str = "saveButton";
    pub const GENERATE_BUTTON: &str = "generateQrButton";
    pub const DOWNLOAD_EDIT_BUTTON: &str = "downloadQrEdit";
    pub const CLOSE_BUTTON: &str = "closeButton";
    pub const SAVE_MESSAGE: &str = "saveMessage";
}

/// Inline error text shown in place of a view's content.
pub fn error_markup(message: &str) -> String {
    format!(
        r#"<div class="card-error">{}</div>"#,
        html::escape(message)
    )
}
