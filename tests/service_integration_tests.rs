use std::sync::Arc;

use songvocab::api::{FetchError, HttpLyricsService, LyricsService};
use songvocab::core::controller::{CycleOutcome, OverlapPolicy, RequestController, SubmitOutcome};
use songvocab::core::render::{ContentPolicy, HtmlView};
use songvocab::core::types::SubmissionInput;
use songvocab::core::view::{PageState, UiState};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn controller_for(server: &MockServer) -> RequestController {
    let service = HttpLyricsService::new(Some(server.uri()), None);
    RequestController::new(Arc::new(service), OverlapPolicy::LatestWins)
}

fn hey_jude_body() -> serde_json::Value {
    serde_json::json!({
        "lyrics": "Line one\n\nLine two",
        "vocabulary": [
            { "word": "Jude", "translation": "Jude", "context": "name" }
        ]
    })
}

// ============================================================================
// Wire Contract
// ============================================================================

#[tokio::test]
async fn test_request_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/agent"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "message_request": "Hey Jude" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(hey_jude_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpLyricsService::new(Some(mock_server.uri()), None);
    let query = SubmissionInput::parse("   Hey Jude  ").unwrap();
    let response = service.fetch(&query).await.unwrap();

    assert_eq!(response.lyrics, "Line one\n\nLine two");
    assert_eq!(response.vocabulary.len(), 1);
}

#[tokio::test]
async fn test_custom_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/lyrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hey_jude_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpLyricsService::new(Some(mock_server.uri()), Some("v2/lyrics".to_string()));
    let query = SubmissionInput::parse("Hey Jude").unwrap();
    assert!(service.fetch(&query).await.is_ok());
}

// ============================================================================
// Submission Cycles
// ============================================================================

#[tokio::test]
async fn test_blank_input_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hey_jude_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    let mut page = PageState::new(ContentPolicy::Escaped);

    let outcome = controller.submit("  ", &mut page).await;

    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert_eq!(page.ui_state(), UiState::Idle);
}

#[tokio::test]
async fn test_success_renders_lyrics_and_vocabulary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hey_jude_body()))
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    let mut page = PageState::new(ContentPolicy::Escaped);

    let outcome = controller.submit("Hey Jude", &mut page).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Completed(CycleOutcome::Rendered { lines: 2, entries: 1 })
    );
    assert_eq!(page.ui_state(), UiState::Results);
    assert!(!page.visibility.loading);
    assert!(!page.visibility.error);
    assert_eq!(page.lyrics_content, vec!["Line one", "Line two"]);
    assert_eq!(page.vocabulary_content.len(), 1);
    assert_eq!(page.vocabulary_content[0].word, "Jude");
    assert_eq!(page.vocabulary_content[0].context, "name");
}

#[tokio::test]
async fn test_not_found_shows_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/agent"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({ "detail": "Song not found" })),
        )
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    let mut page = PageState::new(ContentPolicy::Escaped);

    controller.submit("Unknown Song", &mut page).await;

    assert_eq!(page.ui_state(), UiState::Error);
    assert_eq!(page.error_message, "Error: Song not found");
    assert!(!page.visibility.results);
}

#[tokio::test]
async fn test_non_json_failure_uses_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/agent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    let mut page = PageState::new(ContentPolicy::Escaped);

    controller.submit("X", &mut page).await;

    assert_eq!(page.error_message, "Error: Failed to fetch lyrics");
}

#[tokio::test]
async fn test_failure_without_detail_uses_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(serde_json::json!({ "message": "busy" })),
        )
        .mount(&mock_server)
        .await;

    let service = HttpLyricsService::new(Some(mock_server.uri()), None);
    let query = SubmissionInput::parse("X").unwrap();
    let err = service.fetch(&query).await.unwrap_err();

    assert_eq!(
        err,
        FetchError::Api {
            status: 503,
            message: "Failed to fetch lyrics".to_string(),
        }
    );
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    let mut page = PageState::new(ContentPolicy::Escaped);

    let outcome = controller.submit("X", &mut page).await;

    let message = match outcome {
        SubmitOutcome::Completed(CycleOutcome::Failed(message)) => message,
        other => panic!("Expected a failed cycle, got {other:?}"),
    };
    assert!(message.starts_with("Error: "));
    assert_ne!(message, "Error: Failed to fetch lyrics");
    assert_eq!(page.ui_state(), UiState::Error);
}

#[tokio::test]
async fn test_transport_failure() {
    // Bind and release a port so nothing listens on it
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let service = HttpLyricsService::new(Some(uri), None);
    let mut controller = RequestController::new(Arc::new(service), OverlapPolicy::LatestWins);
    let mut page = PageState::new(ContentPolicy::Escaped);

    controller.submit("Y", &mut page).await;

    assert_eq!(page.ui_state(), UiState::Error);
    assert!(page.error_message.starts_with("Error: "));
    assert!(page.error_message.len() > "Error: ".len());
    assert!(!page.visibility.loading);
}

#[tokio::test]
async fn test_html_view_escapes_markup() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "lyrics": "<script>alert(1)</script>\n\nla la",
            "vocabulary": []
        })))
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    let mut view = HtmlView::new(ContentPolicy::Escaped);

    controller.submit("X", &mut view).await;

    assert_eq!(
        view.lyrics_html,
        "<pre>&lt;script&gt;alert(1)&lt;/script&gt;\nla la</pre>"
    );
    assert!(view.vocabulary_html.is_empty());
    assert_eq!(view.ui_state(), UiState::Results);
}

#[tokio::test]
async fn test_repeated_query_renders_the_same() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hey_jude_body()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    let mut page = PageState::new(ContentPolicy::Escaped);

    controller.submit("Hey Jude", &mut page).await;
    let first = (page.lyrics_text(), page.vocabulary_text());
    controller.submit("Hey Jude", &mut page).await;
    let second = (page.lyrics_text(), page.vocabulary_text());

    assert_eq!(first, second);
}
