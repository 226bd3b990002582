use std::sync::Arc;

use charla::chat::{ChatService, HttpChatService, Sender, ServiceError};
use charla::core::action::{
    Action, CONNECTION_ERROR_FALLBACK, Effect, PROCESSING_ERROR_FALLBACK, update,
};
use charla::core::state::App;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn app_for(server_url: &str) -> App {
    App::new(
        Arc::new(HttpChatService::new(server_url.to_string())),
        server_url.to_string(),
    )
}

/// Drives one full round trip through the reducer: submit, perform the
/// exchange the effect asks for, and feed the outcome back in.
async fn round_trip(app: &mut App, input: &str) {
    let effect = update(app, Action::Submit(input.to_string()));
    let Effect::SpawnExchange(text) = effect else {
        return; // Blank input: nothing to exchange
    };
    let service = app.service.clone();
    let result = service.send(&text).await;
    update(app, Action::from_exchange(result));
}

fn transcript_texts(app: &App) -> Vec<(&str, Sender)> {
    app.transcript
        .iter()
        .map(|m| (m.text.as_str(), m.sender))
        .collect()
}

// ============================================================================
// HttpChatService Tests
// ============================================================================

#[tokio::test]
async fn test_send_posts_message_and_returns_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(serde_json::json!({"message": "hello"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "hi there"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpChatService::new(mock_server.uri());
    let reply = service.send("hello").await.unwrap();
    assert_eq!(reply, "hi there");
}

#[tokio::test]
async fn test_send_missing_response_field_is_incomplete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let service = HttpChatService::new(mock_server.uri());
    let result = service.send("hi").await;
    assert!(matches!(result, Err(ServiceError::IncompleteReply)));
}

#[tokio::test]
async fn test_send_empty_response_field_is_incomplete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": ""})))
        .mount(&mock_server)
        .await;

    let service = HttpChatService::new(mock_server.uri());
    let result = service.send("hi").await;
    assert!(matches!(result, Err(ServiceError::IncompleteReply)));
}

#[tokio::test]
async fn test_send_error_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let service = HttpChatService::new(mock_server.uri());
    let result = service.send("hi").await;
    assert!(matches!(result, Err(ServiceError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_send_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let service = HttpChatService::new(mock_server.uri());
    let result = service.send("hi").await;
    assert!(matches!(result, Err(ServiceError::Parse(_))));
}

#[tokio::test]
async fn test_send_unreachable_server_is_network_error() {
    // Port 1 is essentially never listening
    let service = HttpChatService::new("http://127.0.0.1:1".to_string());
    let result = service.send("hi").await;
    assert!(matches!(result, Err(ServiceError::Network(_))));
}

// ============================================================================
// Full Round Trips
// ============================================================================

#[tokio::test]
async fn test_round_trip_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "hello-ack"})),
        )
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server.uri());
    round_trip(&mut app, "hello").await;

    assert_eq!(
        transcript_texts(&app),
        vec![("hello", Sender::User), ("hello-ack", Sender::Assistant)]
    );
    assert_eq!(app.pending_exchanges, 0);
}

#[tokio::test]
async fn test_round_trip_incomplete_reply_shows_processing_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server.uri());
    round_trip(&mut app, "hi").await;

    assert_eq!(
        transcript_texts(&app),
        vec![
            ("hi", Sender::User),
            (PROCESSING_ERROR_FALLBACK, Sender::Assistant)
        ]
    );
}

#[tokio::test]
async fn test_round_trip_transport_failure_shows_connection_fallback() {
    let mut app = app_for("http://127.0.0.1:1");
    round_trip(&mut app, "hi").await;

    assert_eq!(
        transcript_texts(&app),
        vec![
            ("hi", Sender::User),
            (CONNECTION_ERROR_FALLBACK, Sender::Assistant)
        ]
    );
}

#[tokio::test]
async fn test_blank_submission_makes_no_request() {
    let mock_server = MockServer::start().await;

    // expect(0): the dispatcher must never reach the network for blank input
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "x"})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server.uri());
    round_trip(&mut app, "   ").await;

    assert!(app.transcript.is_empty());
}

#[tokio::test]
async fn test_sequential_round_trips_interleave_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "ack"})),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server.uri());
    for i in 0..3 {
        round_trip(&mut app, &format!("msg {i}")).await;
    }

    let texts: Vec<&str> = app.transcript.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["msg 0", "ack", "msg 1", "ack", "msg 2", "ack"]);
}

#[tokio::test]
async fn test_failure_leaves_session_usable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "recovered"})),
        )
        .mount(&mock_server)
        .await;

    // First exchange fails at the transport level...
    let mut app = app_for("http://127.0.0.1:1");
    round_trip(&mut app, "first").await;
    assert_eq!(app.transcript[1].text, CONNECTION_ERROR_FALLBACK);

    // ...then the user resubmits against a healthy server and the
    // transcript keeps appending as usual.
    app.service = Arc::new(HttpChatService::new(mock_server.uri()));
    round_trip(&mut app, "second").await;
    assert_eq!(app.transcript.len(), 4);
    assert_eq!(app.transcript[3].text, "recovered");
}
