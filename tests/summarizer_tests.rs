// Favourites summarizer against a mocked chat-completions gateway

use curalink_match::models::Candidate;
use curalink_match::services::{
    CandidateCatalog, InMemoryCatalog, SummarizerOptions, SummaryClient, SummaryError,
};
use curalink_match::services::summarizer::FALLBACK_SUMMARY;
use mockito::{Matcher, Server};
use serde_json::json;

fn client_for(server: &Server) -> SummaryClient {
    SummaryClient::new(SummarizerOptions {
        endpoint: server.url(),
        api_key: Some("test-key".to_string()),
        timeout_secs: 5,
        ..SummarizerOptions::default()
    })
    .unwrap()
}

fn favourites(catalog: &InMemoryCatalog) -> Vec<&Candidate> {
    ["pub-1", "trial-1", "expert-1"]
        .iter()
        .map(|id| catalog.get(id).unwrap())
        .collect()
}

#[tokio::test]
async fn test_summary_from_gateway() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "google/gemini-2.5-flash",
            "max_tokens": 800
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "Three items worth discussing." } }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let catalog = InMemoryCatalog::seeded().unwrap();
    let summary = client_for(&server)
        .summarize(&favourites(&catalog))
        .await
        .unwrap();

    assert_eq!(summary, "Three items worth discussing.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_choices_fall_back() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let catalog = InMemoryCatalog::seeded().unwrap();
    let summary = client_for(&server)
        .summarize(&favourites(&catalog))
        .await
        .unwrap();

    assert_eq!(summary, FALLBACK_SUMMARY);
}

#[tokio::test]
async fn test_gateway_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let catalog = InMemoryCatalog::seeded().unwrap();
    let err = client_for(&server)
        .summarize(&favourites(&catalog))
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::ApiError(_)));
}

#[tokio::test]
async fn test_missing_choices_is_invalid() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "cmpl-1"}"#)
        .create_async()
        .await;

    let catalog = InMemoryCatalog::seeded().unwrap();
    let err = client_for(&server)
        .summarize(&favourites(&catalog))
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::InvalidResponse(_)));
}
