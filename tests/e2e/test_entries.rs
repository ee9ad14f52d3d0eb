use crate::helpers;

use helpers::{TestContext, TEST_VOICE_ID};
use hyper::StatusCode;
use minimax_tts::domain::tts::EntitySummary;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_entries_without_api_key(ctx: &mut TestContext) {
    let first = ctx.create_entry().await;
    let second = ctx.create_entry().await;

    let response = ctx.client.get("/api/entries").await.unwrap();
    response.assert_status(StatusCode::OK);

    let entries: Vec<EntitySummary> = response.json().unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e.entry_id).collect();
    assert_eq!(ids, vec![first, second]);
    assert!(!String::from_utf8_lossy(&response.body_bytes).contains("api_key"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_describe_entity_capabilities(ctx: &mut TestContext) {
    let entry_id = ctx.create_entry().await;

    let response = ctx
        .client
        .get(&format!("/api/entries/{}", entry_id))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    let entity: EntitySummary = response.json().unwrap();
    assert_eq!(entity.unique_id, entry_id.to_string());
    assert_eq!(entity.default_language, "zh");
    assert_eq!(entity.supported_languages, vec!["zh", "en", "ja"]);
    assert_eq!(entity.device_info.manufacturer, "Minimax");
    assert_eq!(entity.device_info.model, TEST_VOICE_ID);
    assert_eq!(
        entity.device_info.identifiers,
        vec![("minimax_tts".to_string(), entry_id.to_string())]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_remove_entry(ctx: &mut TestContext) {
    let entry_id = ctx.create_entry().await;
    let path = format!("/api/entries/{}", entry_id);

    ctx.client
        .delete(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    ctx.client
        .get(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);

    ctx.client
        .delete(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
}
