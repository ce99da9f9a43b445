//! Domain model structs mapped onto the hosted list store's schema.
//!
//! Every struct derives `Serialize` and `Deserialize`; the `rename`
//! attributes carry the store's wire field names so the structs can be fed
//! straight into list REST calls and handed to the UI layer unchanged.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RecordId
// ---------------------------------------------------------------------------

/// Store-assigned numeric id of a business-card list item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CardRecord
// ---------------------------------------------------------------------------

/// One person's business-card record.
///
/// Identity fields are provisioned by an administrator and read-only in the
/// edit form; the contact fields are owner-editable and form the unit of
/// optimistic update (see [`ContactPatch`]). `generate_qr_code` is the
/// trigger field whose assertion signals the external automation to produce
/// the QR attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardRecord {
    #[serde(rename = "Id")]
    pub id: RecordId,

    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "FirstName", default)]
    pub first_name: String,

    #[serde(rename = "LastName", default)]
    pub last_name: String,

    /// Lookup key. Unique per record, compared case-insensitively.
    #[serde(rename = "Email", default)]
    pub email: String,

    /// Work phone. Required by the edit form.
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: String,

    #[serde(rename = "Company", default)]
    pub company: String,

    #[serde(rename = "JobTitle", default)]
    pub job_title: String,

    #[serde(rename = "MobilePhone", default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,

    #[serde(rename = "OtherPhone", default, skip_serializing_if = "Option::is_none")]
    pub other_phone: Option<String>,

    /// Instagram handle or full profile URL.
    #[serde(rename = "Instagram", default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    /// Facebook handle or full profile URL.
    #[serde(rename = "Facebook", default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    /// Secondary, email-like contact field.
    #[serde(rename = "Gmail", default, skip_serializing_if = "Option::is_none")]
    pub gmail: Option<String>,

    /// URL the generated QR image points at, written by the automation.
    #[serde(rename = "QRCodeURL", default, skip_serializing_if = "Option::is_none")]
    pub qr_code_url: Option<String>,

    #[serde(rename = "ContactID", default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,

    /// Generation trigger flag. Asserting it is the flag-set request variant.
    #[serde(rename = "GenerateQRCode", default, skip_serializing_if = "Option::is_none")]
    pub generate_qr_code: Option<bool>,
}

impl CardRecord {
    /// Fold a confirmed patch into this record.
    ///
    /// Only called after the remote merge update reported success, so the
    /// in-memory snapshot never runs ahead of the store. `None` patch fields
    /// were not sent to the store and leave the local value untouched.
    pub fn apply(&mut self, patch: &ContactPatch) {
        self.phone_number = patch.phone_number.clone();
        if let Some(ref v) = patch.mobile_phone {
            self.mobile_phone = Some(v.clone());
        }
        if let Some(ref v) = patch.other_phone {
            self.other_phone = Some(v.clone());
        }
        if let Some(ref v) = patch.instagram {
            self.instagram = Some(v.clone());
        }
        if let Some(ref v) = patch.facebook {
            self.facebook = Some(v.clone());
        }
        if let Some(ref v) = patch.gmail {
            self.gmail = Some(v.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// ContactPatch
// ---------------------------------------------------------------------------

/// The owner-editable subset of a [`CardRecord`], as submitted by the edit
/// form.
///
/// `None` fields are skipped during serialization so the merge update only
/// touches the fields the user actually filled in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactPatch {
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,

    #[serde(rename = "MobilePhone", default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,

    #[serde(rename = "OtherPhone", default, skip_serializing_if = "Option::is_none")]
    pub other_phone: Option<String>,

    #[serde(rename = "Instagram", default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    #[serde(rename = "Facebook", default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    #[serde(rename = "Gmail", default, skip_serializing_if = "Option::is_none")]
    pub gmail: Option<String>,
}

impl ContactPatch {
    /// Build a patch from raw form input, mapping blank optional fields to
    /// `None` so they are left out of the merge body entirely.
    pub fn from_form(
        phone_number: String,
        mobile_phone: String,
        other_phone: String,
        instagram: String,
        facebook: String,
        gmail: String,
    ) -> Self {
        Self {
            phone_number,
            mobile_phone: non_blank(mobile_phone),
            other_phone: non_blank(other_phone),
            instagram: non_blank(instagram),
            facebook: non_blank(facebook),
            gmail: non_blank(gmail),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

// ---------------------------------------------------------------------------
// Attachment
// ---------------------------------------------------------------------------

/// Metadata for a file attached to a list item (the generated QR image).
///
/// Attachments are created out-of-band by the automation; this system only
/// reads them. The server-relative URL must be joined onto the site host to
/// form a downloadable address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    #[serde(rename = "FileName")]
    pub file_name: String,

    #[serde(rename = "ServerRelativeUrl")]
    pub server_relative_url: String,
}
