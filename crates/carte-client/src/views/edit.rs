//! Edit view: the contact-details form, pre-filled from the snapshot.
//!
//! Identity fields render read-only; only the contact fields are
//! editable. The download button appears only once an attachment exists.

use carte_shared::CardRecord;

use crate::views::html::escape;
use crate::views::ids;

/// Input to the edit form projection.
#[derive(Debug)]
pub struct EditData<'a> {
    pub record: &'a CardRecord,
    pub has_attachment: bool,
}

pub fn render(data: &EditData<'_>) -> String {
    let r = data.record;

    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"form-container\">\n<form id=\"{}\">\n",
        ids::FORM
    ));

    // read-only identity fields
    out.push_str(&field("firstName", "First Name:", "text", &r.first_name, " readonly"));
    out.push_str(&field("lastName", "Last Name:", "text", &r.last_name, " readonly"));
    out.push_str(&field("email", "Email:", "email", &r.email, " readonly"));
    out.push_str(&field("company", "Company:", "text", &r.company, " readonly"));
    out.push_str(&field("jobTitle", "Job Title:", "text", &r.job_title, " readonly"));

    // owner-editable contact fields
    out.push_str(&field("phoneNumber", "Phone Number: *", "tel", &r.phone_number, " required"));
    out.push_str(&field("mobilePhone", "Mobile Phone:", "tel", opt(&r.mobile_phone), ""));
    out.push_str(&field("otherPhone", "Other Phone:", "tel", opt(&r.other_phone), ""));
    out.push_str(&field("instagram", "Instagram:", "text", opt(&r.instagram), ""));
    out.push_str(&field("facebook", "Facebook:", "text", opt(&r.facebook), ""));
    out.push_str(&field("gmail", "Gmail:", "email", opt(&r.gmail), ""));

    let download_button = if data.has_attachment {
        format!(
            "    <button type=\"button\" id=\"{}\" title=\"Download QR Code\">Download</button>\n",
            ids::DOWNLOAD_EDIT_BUTTON
        )
    } else {
        String::new()
    };

    out.push_str(&format!(
        r#"  <div class="form-field button-group">
    <button type="submit" id="{save}" title="Save">Save</button>
    <button type="button" id="{generate}" title="Generate QR Code">Generate</button>
{download}    <button type="button" id="{close}" title="Close">Close</button>
    <span id="{message}"></span>
  </div>
</form>
</div>"#,
        save = ids::SAVE_BUTTON,
        generate = ids::GENERATE_BUTTON,
        download = download_button,
        close = ids::CLOSE_BUTTON,
        message = ids::SAVE_MESSAGE,
    ));

    out
}

fn field(id: &str, label: &str, input_type: &str, value: &str, attrs: &str) -> String {
    format!(
        r#"  <div class="form-field">
    <label for="{id}">{label}</label>
    <input type="{input_type}" id="{id}" name="{id}" value="{value}"{attrs} />
  </div>
"#,
        value = escape(value),
    )
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use carte_shared::RecordId;

    fn record() -> CardRecord {
        CardRecord {
            id: RecordId(7),
            title: "Nora Haddad".into(),
            first_name: "Nora".into(),
            last_name: "Haddad".into(),
            email: "nora@example.com".into(),
            phone_number: "+965 1111".into(),
            company: "Example & Co".into(),
            job_title: "Engineer".into(),
            mobile_phone: Some("+965 2222".into()),
            other_phone: None,
            instagram: None,
            facebook: None,
            gmail: None,
            qr_code_url: None,
            contact_id: None,
            generate_qr_code: None,
        }
    }

    #[test]
    fn prefills_and_escapes_record_fields() {
        let markup = render(&EditData {
            record: &record(),
            has_attachment: false,
        });

        assert!(markup.contains(r#"value="+965 1111" required"#));
        assert!(markup.contains(r#"value="+965 2222""#));
        assert!(markup.contains(r#"value="Example &amp; Co" readonly"#));
        assert!(markup.contains(r#"value="nora@example.com" readonly"#));
    }

    #[test]
    fn download_button_requires_an_attachment() {
        let without = render(&EditData {
            record: &record(),
            has_attachment: false,
        });
        let with = render(&EditData {
            record: &record(),
            has_attachment: true,
        });

        assert!(!without.contains(ids::DOWNLOAD_EDIT_BUTTON));
        assert!(with.contains(&format!(r#"id="{}""#, ids::DOWNLOAD_EDIT_BUTTON)));
    }

    #[test]
    fn blank_optionals_render_empty_inputs() {
        let markup = render(&EditData {
            record: &record(),
            has_attachment: false,
        });

        assert!(markup.contains(r#"id="instagram" name="instagram" value="""#));
    }
}
