//! Contact relay: validation and failure reporting.
//!
//! These tests run with SMTP unconfigured, so a request that passes
//! validation must fail with a mail error - which also proves validation
//! failures are reported before the relay is ever consulted.

mod helpers;

use helpers::setup_test_app;
use serde_json::json;

#[tokio::test]
async fn blank_name_is_rejected_before_the_relay() {
    let app = setup_test_app().await;

    let res = app
        .client()
        .post("/contact")
        .json(&json!({"name": "", "email": "a@b.com", "message": "hi"}))
        .await;

    res.assert_status_bad_request();
    let body: serde_json::Value = res.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn missing_fields_are_all_reported() {
    let app = setup_test_app().await;

    let res = app.client().post("/contact").json(&json!({})).await;

    res.assert_status_bad_request();
    let error = res.json::<serde_json::Value>()["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.contains("name"));
    assert!(error.contains("email"));
    assert!(error.contains("message"));
}

#[tokio::test]
async fn malformed_json_body_is_a_bad_request() {
    let app = setup_test_app().await;

    let res = app
        .client()
        .post("/contact")
        .text("{not json")
        .content_type("application/json")
        .await;

    res.assert_status_bad_request();
    assert_eq!(res.json::<serde_json::Value>()["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn valid_message_without_smtp_reports_mail_failure() {
    let app = setup_test_app().await;

    let res = app
        .client()
        .post("/contact")
        .json(&json!({"name": "Ada", "email": "ada@example.com", "message": "hello"}))
        .await;

    res.assert_status_internal_server_error();
    assert_eq!(res.json::<serde_json::Value>()["code"], "MAIL_ERROR");
}
