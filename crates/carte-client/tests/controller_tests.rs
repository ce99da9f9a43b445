//! End-to-end controller tests against a mock list store: load, view
//! transitions, markup projection, optimistic-update discipline and the
//! download fallback.

use std::sync::{Arc, Mutex};

use httpmock::prelude::*;
use serde_json::json;

use carte_client::events::{EventSink, EVENT_RECORD_SAVED, EVENT_VIEW_CHANGED};
use carte_client::{CardController, CardService, DownloadPayload, View};
use carte_shared::ContactPatch;
use carte_store::{ListStoreClient, StoreConfig};

const ITEMS_PATH: &str = "/sites/Card/_api/web/lists/getbytitle('DigitalBusinessCards')/items";

const QR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect width="100" height="100" fill="#000000"/></svg>"##;

fn controller_for(server: &MockServer, email: &str) -> CardController {
    let config = StoreConfig {
        site_url: format!("{}/sites/Card", server.base_url()),
        ..StoreConfig::default()
    };
    CardController::new(CardService::new(ListStoreClient::new(config)), email)
}

fn mock_record(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET)
            .path(ITEMS_PATH)
            .query_param("$filter", "Email eq 'nora@example.com'");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "value": [{
                "Id": 7,
                "Title": "Nora Haddad",
                "FirstName": "Nora",
                "LastName": "Haddad",
                "Email": "nora@example.com",
                "PhoneNumber": "+965 1111",
                "Company": "Example Co",
                "JobTitle": "Engineer"
            }] }));
    });
}

fn mock_attachments(server: &MockServer, files: serde_json::Value) {
    server.mock(|when, then| {
        when.method(GET).path(format!("{ITEMS_PATH}(7)/AttachmentFiles"));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "value": files }));
    });
}

// ---------------------------------------------------------------------------
// Home view
// ---------------------------------------------------------------------------

#[tokio::test]
async fn renders_loading_before_the_initial_load() {
    let server = MockServer::start();
    let controller = controller_for(&server, "nora@example.com");

    let markup = controller.render().await;
    assert!(markup.contains("Loading your information"));
}

#[tokio::test]
async fn home_shows_the_qr_image_when_an_attachment_exists() {
    let server = MockServer::start();
    mock_record(&server);
    mock_attachments(
        &server,
        json!([{ "FileName": "qr.svg",
                 "ServerRelativeUrl": "/sites/Card/Lists/Attachments/7/qr.svg" }]),
    );

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;
    let markup = controller.render().await;

    assert!(markup.contains("/sites/Card/Lists/Attachments/7/qr.svg"));
    assert!(markup.contains(r#"id="editButton""#));
    assert!(markup.contains(r#"id="downloadQrHome""#));
}

#[tokio::test]
async fn home_prompts_for_generation_without_an_attachment() {
    let server = MockServer::start();
    mock_record(&server);
    mock_attachments(&server, json!([]));

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;
    let markup = controller.render().await;

    assert!(markup.contains("Would you like to generate your QR Code?"));
    assert!(markup.contains(r#"id="generatePromptButton""#));
}

#[tokio::test]
async fn missing_record_renders_the_contact_admin_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(ITEMS_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "value": [] }));
    });

    let mut controller = controller_for(&server, "a<b>@example.com");
    controller.load().await;
    let markup = controller.render().await;

    assert!(markup.contains("No record found for your email"));
    assert!(markup.contains("a&lt;b&gt;@example.com"));
    assert!(markup.contains("contact your administrator"));
}

#[tokio::test]
async fn load_failure_renders_inline_error_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(ITEMS_PATH);
        then.status(500).body("list offline");
    });

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;
    let markup = controller.render().await;

    assert!(markup.contains("Error loading data"));
    assert!(markup.contains("500"));
}

// ---------------------------------------------------------------------------
// Transitions and the edit view
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_renders_the_prefilled_form() {
    let server = MockServer::start();
    mock_record(&server);
    mock_attachments(&server, json!([]));

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;
    controller.edit();

    assert_eq!(controller.state().view, View::Edit);

    let markup = controller.render().await;
    assert!(markup.contains(r#"id="cardForm""#));
    assert!(markup.contains(r#"value="+965 1111" required"#));
    assert!(markup.contains(r#"value="nora@example.com" readonly"#));
    // no attachment yet, so no download button in the form
    assert!(!markup.contains("downloadQrEdit"));
}

#[tokio::test]
async fn close_returns_to_the_home_view() {
    let server = MockServer::start();
    mock_record(&server);
    mock_attachments(&server, json!([]));

    let sink = Arc::new(TestSink::default());
    let mut controller = controller_for(&server, "nora@example.com").with_events(sink.clone());
    controller.load().await;

    controller.edit();
    controller.close();

    assert_eq!(controller.state().view, View::Home);
    let markup = controller.render().await;
    assert!(markup.contains(r#"id="generatePromptButton""#));
    assert_eq!(
        sink.events(),
        vec![EVENT_VIEW_CHANGED.to_string(), EVENT_VIEW_CHANGED.to_string()]
    );
}

// ---------------------------------------------------------------------------
// Saving
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sequential_saves_leave_the_snapshot_on_the_last_confirmed_values() {
    let server = MockServer::start();
    mock_record(&server);
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("{ITEMS_PATH}(7)"))
            .header("X-HTTP-Method", "MERGE");
        then.status(204);
    });

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;

    let first = ContactPatch {
        phone_number: "+965 2222".into(),
        instagram: Some("@nora.h".into()),
        ..Default::default()
    };
    controller.save(first).await.unwrap();

    let second = ContactPatch {
        phone_number: "+965 3333".into(),
        ..Default::default()
    };
    controller.save(second).await.unwrap();

    let record = controller.state().record.as_ref().unwrap();
    assert_eq!(record.phone_number, "+965 3333");
    // untouched by the second patch, still present from the first
    assert_eq!(record.instagram.as_deref(), Some("@nora.h"));
}

#[tokio::test]
async fn failed_save_leaves_the_snapshot_untouched() {
    let server = MockServer::start();
    mock_record(&server);
    server.mock(|when, then| {
        when.method(POST).path(format!("{ITEMS_PATH}(7)"));
        then.status(403).body("Access denied.");
    });

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;

    let err = controller
        .save(ContactPatch {
            phone_number: "+965 9999".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(err.contains("Access denied."));
    let record = controller.state().record.as_ref().unwrap();
    assert_eq!(record.phone_number, "+965 1111");
}

#[tokio::test]
async fn save_emits_the_record_saved_event() {
    let server = MockServer::start();
    mock_record(&server);
    server.mock(|when, then| {
        when.method(POST).path(format!("{ITEMS_PATH}(7)"));
        then.status(204);
    });

    let sink = Arc::new(TestSink::default());
    let mut controller = controller_for(&server, "nora@example.com").with_events(sink.clone());
    controller.load().await;

    controller
        .save(ContactPatch {
            phone_number: "+965 2222".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(sink.events(), vec![EVENT_RECORD_SAVED.to_string()]);
}

#[tokio::test]
async fn save_without_a_record_is_an_inline_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(ITEMS_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "value": [] }));
    });

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;

    let err = controller.save(ContactPatch::default()).await.unwrap_err();
    assert_eq!(err, "No record loaded");
}

// ---------------------------------------------------------------------------
// Download
// ---------------------------------------------------------------------------

#[tokio::test]
async fn download_normalizes_the_attachment_into_a_named_png() {
    let server = MockServer::start();
    mock_record(&server);
    mock_attachments(
        &server,
        json!([{ "FileName": "qr.svg",
                 "ServerRelativeUrl": "/sites/Card/Lists/Attachments/7/qr.svg" }]),
    );
    server.mock(|when, then| {
        when.method(GET).path("/sites/Card/Lists/Attachments/7/qr.svg");
        then.status(200).body(QR_SVG);
    });

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;

    let payload = controller.download().await.unwrap().unwrap();
    match payload {
        DownloadPayload::Normalized { file_name, bytes } => {
            assert_eq!(file_name, "QR_Code_Nora.png");
            assert!(bytes.starts_with(b"\x89PNG"));
        }
        other => panic!("expected a normalized payload, got {other:?}"),
    }
}

#[tokio::test]
async fn download_falls_back_to_the_original_bytes_when_undecodable() {
    let server = MockServer::start();
    mock_record(&server);
    mock_attachments(
        &server,
        json!([{ "FileName": "qr.png",
                 "ServerRelativeUrl": "/sites/Card/Lists/Attachments/7/qr.png" }]),
    );
    server.mock(|when, then| {
        when.method(GET).path("/sites/Card/Lists/Attachments/7/qr.png");
        then.status(200).body("definitely not an image");
    });

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;

    let payload = controller.download().await.unwrap().unwrap();
    match payload {
        DownloadPayload::Original { file_name, bytes } => {
            assert_eq!(file_name, "qr.png");
            assert_eq!(bytes, b"definitely not an image");
        }
        other => panic!("expected the original payload, got {other:?}"),
    }
}

#[tokio::test]
async fn download_without_an_attachment_is_none() {
    let server = MockServer::start();
    mock_record(&server);
    mock_attachments(&server, json!([]));

    let mut controller = controller_for(&server, "nora@example.com");
    controller.load().await;

    assert!(controller.download().await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Test event sink
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestSink(Mutex<Vec<String>>);

impl TestSink {
    fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: &str, _payload: serde_json::Value) {
        self.0.lock().unwrap().push(event.to_string());
    }
}
