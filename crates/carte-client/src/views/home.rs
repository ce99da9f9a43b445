//! Home view: QR display, generate prompt, no-record and error states.

use crate::views::html::escape;
use crate::views::{error_markup, ids};

/// Derived sub-state of the home view, computed per render by re-querying
/// attachment presence.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeData {
    /// Initial load has not completed yet.
    Loading,
    /// A QR attachment exists; show it with the edit/download actions.
    QrCode { qr_url: String },
    /// No attachment yet; offer to request generation.
    GeneratePrompt,
    /// No record exists for the signed-in user under any casing.
    NoRecord { email: String },
    /// Resolution or attachment lookup failed.
    Error { message: String },
}

pub fn render(data: &HomeData) -> String {
    match data {
        HomeData::Loading => {
            r#"<div id="loadingMessage">Loading your information...</div>"#.to_string()
        }

        HomeData::QrCode { qr_url } => format!(
            r#"<div class="qr-display">
  <div class="qr-image-container">
    <img src="{src}" alt="QR Code" class="qr-image" />
  </div>
  <div class="home-buttons">
    <button type="button" id="{edit}" title="Edit Details">Edit Details</button>
    <button type="button" id="{download}" title="Download QR Code">Download</button>
  </div>
</div>"#,
            src = escape(qr_url),
            edit = ids::EDIT_BUTTON,
            download = ids::DOWNLOAD_HOME_BUTTON,
        ),

        HomeData::GeneratePrompt => format!(
            r#"<div class="generate-prompt">
  <p>Would you like to generate your QR Code?</p>
  <button type="button" id="{generate}" title="Verify details and Generate QR Code">Verify details and Generate QR Code</button>
</div>"#,
            generate = ids::GENERATE_PROMPT_BUTTON,
        ),

        HomeData::NoRecord { email } => format!(
            r#"<div class="no-record">
  <p>No record found for your email: <strong>{email}</strong></p>
  <p>Please contact your administrator to create a record for you in the DigitalBusinessCards list.</p>
</div>"#,
            email = escape(email),
        ),

        HomeData::Error { message } => error_markup(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_view_offers_edit_and_download() {
        let markup = render(&HomeData::QrCode {
            qr_url: "https://cards.example.com/qr.png".into(),
        });

        assert!(markup.contains(r#"src="https://cards.example.com/qr.png""#));
        assert!(markup.contains(&format!(r#"id="{}""#, ids::EDIT_BUTTON)));
        assert!(markup.contains(&format!(r#"id="{}""#, ids::DOWNLOAD_HOME_BUTTON)));
    }

    #[test]
    fn no_record_message_escapes_the_email() {
        let markup = render(&HomeData::NoRecord {
            email: "a<b>@example.com".into(),
        });

        assert!(markup.contains("a&lt;b&gt;@example.com"));
        assert!(!markup.contains("a<b>"));
    }

    #[test]
    fn error_state_escapes_the_message() {
        let markup = render(&HomeData::Error {
            message: "boom <tag>".into(),
        });

        assert!(markup.contains("boom &lt;tag&gt;"));
    }
}
