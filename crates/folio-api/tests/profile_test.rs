//! Profile record flows: empty record, wholesale save, avatar history.

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::setup_test_app;

fn profile_form(name: &str, bio: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("name", name)
        .add_text("bio", bio)
        .add_text("instagram", "https://instagram.com/ada")
        .add_text("linkedin", "https://linkedin.com/in/ada")
        .add_text("email", "ada@example.com")
}

fn with_avatar(form: MultipartForm, filename: &str, bytes: &[u8]) -> MultipartForm {
    form.add_part(
        "avatar",
        Part::bytes(bytes.to_vec())
            .file_name(filename)
            .mime_type("image/png"),
    )
}

#[tokio::test]
async fn unsaved_profile_is_the_empty_record() {
    let app = setup_test_app().await;

    let res = app.client().get("/profile").await;
    res.assert_status_ok();

    let body: serde_json::Value = res.json();
    assert_eq!(body["name"], "");
    assert_eq!(body["bio"], "");
    assert_eq!(body["avatar"], serde_json::Value::Null);
    assert_eq!(body["avatar_history"], serde_json::json!([]));
}

#[tokio::test]
async fn save_overwrites_whole_record() {
    let app = setup_test_app().await;

    app.client()
        .post("/profile")
        .multipart(profile_form("Ada", "builder of things"))
        .await
        .assert_status_ok();

    let body: serde_json::Value = app.client().get("/profile").await.json();
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["bio"], "builder of things");
    assert_eq!(body["links"]["instagram"], "https://instagram.com/ada");
    assert_eq!(body["links"]["email"], "ada@example.com");

    // A second save fully replaces the fields
    app.client()
        .post("/profile")
        .multipart(profile_form("Grace", ""))
        .await
        .assert_status_ok();

    let body: serde_json::Value = app.client().get("/profile").await.json();
    assert_eq!(body["name"], "Grace");
    assert_eq!(body["bio"], "");
}

#[tokio::test]
async fn avatar_is_stored_and_recorded_in_history() {
    let app = setup_test_app().await;

    let res = app
        .client()
        .post("/profile")
        .multipart(with_avatar(profile_form("Ada", "bio"), "face.png", b"v1"))
        .await;
    res.assert_status_ok();
    assert_eq!(res.json::<serde_json::Value>()["success"], true);

    let body: serde_json::Value = app.client().get("/profile").await.json();
    let avatar = body["avatar"].as_str().expect("avatar set").to_string();
    assert!(avatar.ends_with("-face.png"));
    assert_eq!(body["avatar_history"], serde_json::json!([avatar.clone()]));

    // The avatar file went through the normal storage mechanism
    assert!(app.media_dir.join(&avatar).exists());
}

#[tokio::test]
async fn save_without_avatar_preserves_previous_avatar_and_history() {
    let app = setup_test_app().await;

    app.client()
        .post("/profile")
        .multipart(with_avatar(profile_form("Ada", "bio"), "face.png", b"v1"))
        .await
        .assert_status_ok();
    let before: serde_json::Value = app.client().get("/profile").await.json();

    app.client()
        .post("/profile")
        .multipart(profile_form("Ada", "new bio"))
        .await
        .assert_status_ok();

    let after: serde_json::Value = app.client().get("/profile").await.json();
    assert_eq!(after["bio"], "new bio");
    assert_eq!(after["avatar"], before["avatar"]);
    assert_eq!(after["avatar_history"], before["avatar_history"]);
}

#[tokio::test]
async fn each_new_avatar_appends_exactly_one_history_entry() {
    let app = setup_test_app().await;

    app.client()
        .post("/profile")
        .multipart(with_avatar(profile_form("Ada", "bio"), "one.png", b"1"))
        .await
        .assert_status_ok();
    app.client()
        .post("/profile")
        .multipart(with_avatar(profile_form("Ada", "bio"), "two.png", b"2"))
        .await
        .assert_status_ok();

    let body: serde_json::Value = app.client().get("/profile").await.json();
    let history = body["avatar_history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(body["avatar"], *history.last().unwrap());
}
