use crate::helpers;

use helpers::{TestContext, TEST_GROUP_ID, TEST_VOICE_ID};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_describe_the_setup_form(ctx: &mut TestContext) {
    let response = ctx.client.get("/api/config_flow/user").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("type").and_then(|v| v.as_str()), Some("form"));
    assert_eq!(body.get("step_id").and_then(|v| v.as_str()), Some("user"));

    let fields = body.get("data_schema").and_then(|v| v.as_array()).unwrap();
    let names: Vec<&str> = fields
        .iter()
        .filter_map(|f| f.get("name").and_then(|n| n.as_str()))
        .collect();
    assert_eq!(names, vec!["group_id", "api_key", "voice_id"]);
    assert!(fields
        .iter()
        .all(|f| f.get("required") == Some(&Value::Bool(true))));

    let defaults: Vec<&Value> = fields.iter().filter(|f| f.get("default").is_some()).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(
        defaults[0].get("default").and_then(|v| v.as_str()),
        Some("mos_audio_35005847-4600-11f0-990d-c66847954116")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_an_entry_from_valid_input(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/config_flow/user",
            &json!({
                "group_id": TEST_GROUP_ID,
                "api_key": "sk-very-secret",
                "voice_id": TEST_VOICE_ID
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("title").and_then(|v| v.as_str()), Some("Minimax TTS"));
    assert_eq!(
        body.get("name").and_then(|v| v.as_str()),
        Some("Minimax TTS Minimax TTS")
    );
    assert_eq!(
        body.pointer("/device_info/model").and_then(|v| v.as_str()),
        Some(TEST_VOICE_ID)
    );
    assert!(!String::from_utf8_lossy(&response.body_bytes).contains("sk-very-secret"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_field(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/config_flow/user",
            &json!({ "group_id": TEST_GROUP_ID, "voice_id": TEST_VOICE_ID }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("api_key is required");

    let entries = ctx.client.get("/api/entries").await.unwrap();
    assert_eq!(entries.body, Some(json!([])));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_string_field(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/config_flow/user",
            &json!({ "group_id": 1234567890, "api_key": "k", "voice_id": TEST_VOICE_ID }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("group_id must be a string");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_field(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/config_flow/user",
            &json!({
                "group_id": TEST_GROUP_ID,
                "api_key": "k",
                "voice_id": TEST_VOICE_ID,
                "model": "speech-02-hd"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unknown field: model");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_object_input_with_json_error(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/config_flow/user",
            &json!([TEST_GROUP_ID, "k", TEST_VOICE_ID]),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("user input must be an object");

    let entries = ctx.client.get("/api/entries").await.unwrap();
    assert_eq!(entries.body, Some(json!([])));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json_with_json_error(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post_raw("/api/config_flow/user", "{\"group_id\": ")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_header("content-type", "application/json")
        .assert_error_message("Invalid input");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_show_the_form_for_null_input(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post_raw("/api/config_flow/user", "null")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("type").and_then(|v| v.as_str()), Some("form"));

    let entries = ctx.client.get("/api/entries").await.unwrap();
    assert_eq!(entries.body, Some(json!([])));
}
