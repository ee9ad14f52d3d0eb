use crate::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &mut TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_unconfigured_until_an_entry_exists(ctx: &mut TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(body.get("entries").and_then(|v| v.as_u64()), Some(0));
    assert_eq!(body.get("tts").and_then(|v| v.as_str()), Some("unconfigured"));

    ctx.create_entry().await;

    let response = ctx.client.get("/health/ready").await.unwrap();
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("entries").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(body.get("tts").and_then(|v| v.as_str()), Some("configured"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &mut TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/api/entries").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_caller_request_id(ctx: &mut TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("x-request-id", "host-trace-42")])
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-request-id", "host-trace-42");
}
