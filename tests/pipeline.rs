//! Chat pipeline and search gateway integration tests

use std::sync::Arc;
use std::time::Duration;

use aria_gateway::prompt::PERSONA_PROMPT;
use aria_gateway::{ChatMessage, Role, SearchDepth, SearchQuery};

mod common;
use common::{gateway_with, pipeline_with, sample_results, FailingBackend, StaticBackend};

fn user(content: &str) -> ChatMessage {
    ChatMessage {
        role: Role::User,
        content: content.to_string(),
    }
}

fn query(text: &str) -> SearchQuery {
    SearchQuery {
        text: text.to_string(),
        depth: SearchDepth::Basic,
    }
}

#[tokio::test]
async fn repeat_query_within_ttl_hits_cache() {
    let backend = StaticBackend::new(sample_results());
    let gateway = gateway_with(backend.clone(), Duration::from_secs(300));

    let first = gateway.search(&query("weather in Paris")).await.unwrap();
    let second = gateway.search(&query("weather in Paris")).await.unwrap();

    assert_eq!(backend.fetches(), 1);
    assert_eq!(first.organic, second.organic);
}

#[tokio::test]
async fn expired_entry_is_refetched() {
    let backend = StaticBackend::new(sample_results());
    let gateway = gateway_with(backend.clone(), Duration::from_millis(100));

    gateway.search(&query("weather in Paris")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(250)).await;
    gateway.search(&query("weather in Paris")).await.unwrap();

    assert_eq!(backend.fetches(), 2);
}

#[tokio::test]
async fn cache_key_is_case_sensitive() {
    let backend = StaticBackend::new(sample_results());
    let gateway = gateway_with(backend.clone(), Duration::from_secs(300));

    gateway.search(&query("Weather in Paris")).await.unwrap();
    gateway.search(&query("weather in Paris")).await.unwrap();

    assert_eq!(backend.fetches(), 2);
}

#[tokio::test]
async fn provider_failure_propagates_from_gateway() {
    let gateway = gateway_with(Arc::new(FailingBackend), Duration::from_secs(300));

    let result = gateway.search(&query("weather in Paris")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn plain_chat_skips_search_entirely() {
    let backend = StaticBackend::new(sample_results());
    let pipeline = pipeline_with(gateway_with(backend.clone(), Duration::from_secs(300)));

    let history = vec![user("Tell me a joke")];
    let messages = pipeline.build_messages(&history).await;

    // Persona + the single user turn, no search context
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, PERSONA_PROMPT);
    assert_eq!(messages[1], history[0]);
    assert_eq!(backend.fetches(), 0);
}

#[tokio::test]
async fn realtime_query_injects_search_context() {
    let backend = StaticBackend::new(sample_results());
    let pipeline = pipeline_with(gateway_with(backend.clone(), Duration::from_secs(300)));

    let history = vec![user("What's the weather in Paris?")];
    let messages = pipeline.build_messages(&history).await;

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].content, PERSONA_PROMPT);
    assert_eq!(messages[1].role, Role::System);
    assert!(messages[1].content.contains("Paris weather today"));
    assert_eq!(messages[2], history[0]);

    // The gateway receives the full utterance as the query
    assert_eq!(
        backend.last_query().as_deref(),
        Some("What's the weather in Paris?")
    );
}

#[tokio::test]
async fn classifier_uses_latest_user_turn() {
    let backend = StaticBackend::new(sample_results());
    let pipeline = pipeline_with(gateway_with(backend.clone(), Duration::from_secs(300)));

    let history = vec![
        user("What's the weather in Paris?"),
        ChatMessage {
            role: Role::Assistant,
            content: "Sunny, 24C.".to_string(),
        },
        user("Thanks, tell me a joke instead"),
    ];
    let messages = pipeline.build_messages(&history).await;

    // Latest user turn is not a real-time query, so no context is injected
    assert_eq!(messages.len(), 1 + history.len());
    assert_eq!(backend.fetches(), 0);
}

#[tokio::test]
async fn search_failure_degrades_to_plain_prompt() {
    let pipeline = pipeline_with(gateway_with(
        Arc::new(FailingBackend),
        Duration::from_secs(300),
    ));

    let history = vec![user("What's the weather in Paris?")];
    let messages = pipeline.build_messages(&history).await;

    // The turn survives: persona + user, no context message
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, PERSONA_PROMPT);
    assert_eq!(messages[1], history[0]);
}

#[tokio::test]
async fn history_without_user_turn_skips_search() {
    let backend = StaticBackend::new(sample_results());
    let pipeline = pipeline_with(gateway_with(backend.clone(), Duration::from_secs(300)));

    let history = vec![ChatMessage {
        role: Role::Assistant,
        content: "What's the latest news?".to_string(),
    }];
    let messages = pipeline.build_messages(&history).await;

    assert_eq!(messages.len(), 2);
    assert_eq!(backend.fetches(), 0);
}

#[tokio::test]
async fn chat_flow_and_search_endpoint_share_one_cache() {
    let backend = StaticBackend::new(sample_results());
    let gateway = gateway_with(backend.clone(), Duration::from_secs(300));
    let pipeline = pipeline_with(gateway.clone());

    pipeline
        .build_messages(&[user("What's the weather in Paris?")])
        .await;
    gateway
        .search(&query("What's the weather in Paris?"))
        .await
        .unwrap();

    assert_eq!(backend.fetches(), 1);
}
