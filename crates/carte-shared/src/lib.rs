//! # carte-shared
//!
//! Domain model shared by every Carte crate: the business-card record and
//! its wire mapping onto the hosted list store, the contact-field patch
//! used for partial updates, attachment metadata, and the vCard payload
//! the external automation encodes into the QR image.

pub mod constants;
pub mod types;
pub mod vcard;

pub use types::{Attachment, CardRecord, ContactPatch, RecordId};
