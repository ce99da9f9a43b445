//! vCard 3.0 rendering for a business-card record.
//!
//! The external automation encodes this payload into the QR image, so the
//! exact line set and ordering are part of the contract with it. Social
//! handles are emitted twice: once as `X-` TEL entries (contact apps pick
//! those up more reliably) and once as typed URLs.

use crate::types::CardRecord;

/// Render `record` as a vCard 3.0 string.
///
/// Blank fields are skipped entirely rather than emitted empty.
pub fn render(record: &CardRecord) -> String {
    let mut vcard = String::from("BEGIN:VCARD\nVERSION:3.0\n");

    let first = record.first_name.trim();
    let last = record.last_name.trim();
    if !first.is_empty() || !last.is_empty() {
        vcard.push_str(&format!("FN:{}\n", format!("{first} {last}").trim()));
        vcard.push_str(&format!("N:{last};{first};;;\n"));
    }

    if !record.phone_number.is_empty() {
        vcard.push_str(&format!("TEL;TYPE=WORK,VOICE:{}\n", record.phone_number));
    }
    if let Some(mobile) = filled(&record.mobile_phone) {
        vcard.push_str(&format!("TEL;TYPE=CELL:{mobile}\n"));
    }
    if let Some(other) = filled(&record.other_phone) {
        vcard.push_str(&format!("TEL;TYPE=HOME,VOICE:{other}\n"));
    }
    if let Some(facebook) = filled(&record.facebook) {
        vcard.push_str(&format!("TEL;TYPE=X-FACEBOOK:{facebook}\n"));
    }
    if let Some(instagram) = filled(&record.instagram) {
        vcard.push_str(&format!("TEL;TYPE=X-INSTAGRAM:{instagram}\n"));
    }

    if let Some(gmail) = filled(&record.gmail) {
        vcard.push_str(&format!("EMAIL;TYPE=INTERNET:{gmail}\n"));
    }

    if let Some(instagram) = filled(&record.instagram) {
        vcard.push_str(&format!("URL;TYPE=Instagram:{}\n", instagram_url(instagram)));
    }
    if let Some(facebook) = filled(&record.facebook) {
        vcard.push_str(&format!("URL;TYPE=Facebook:{}\n", facebook_url(facebook)));
    }

    let mut social_info = Vec::new();
    if let Some(instagram) = filled(&record.instagram) {
        social_info.push(format!("Instagram: {}", instagram_handle(instagram)));
    }
    if let Some(facebook) = filled(&record.facebook) {
        social_info.push(format!("Facebook: {facebook}"));
    }
    if let Some(mobile) = filled(&record.mobile_phone) {
        social_info.push(format!("Mobile: {mobile}"));
    }
    if let Some(other) = filled(&record.other_phone) {
        social_info.push(format!("Other Phone: {other}"));
    }
    if !social_info.is_empty() {
        vcard.push_str(&format!("NOTE:Contact Info - {}\n", social_info.join(" | ")));
    }

    vcard.push_str("END:VCARD");
    vcard
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Full profile URL for an Instagram handle; leaves full URLs untouched.
fn instagram_url(value: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://instagram.com/{}", value.replace('@', ""))
    }
}

/// Full profile URL for a Facebook handle; leaves full URLs untouched.
fn facebook_url(value: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://facebook.com/{value}")
    }
}

/// `@`-prefixed display form of an Instagram handle.
fn instagram_handle(value: &str) -> String {
    if value.starts_with('@') {
        value.to_string()
    } else {
        format!("@{value}")
    }
}
