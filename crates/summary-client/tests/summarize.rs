use httpmock::Method::POST;
use httpmock::MockServer;
use kpi_core::{AnalysisError, Summarizer};
use summary_client::{SummaryClient, SummaryConfig, SummaryError};

fn client_for(server: &MockServer) -> SummaryClient {
    let config = SummaryConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.base_url(),
        model: "test-model".to_string(),
        ..SummaryConfig::default()
    };
    SummaryClient::new(config).unwrap()
}

#[tokio::test]
async fn summary_returns_trimmed_first_choice() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .header("authorization", "Bearer test-key")
            .body_includes("\"model\":\"test-model\"")
            .body_includes("Revenue: 200");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[{"message":{"role":"assistant","content":"  The company is profitable.\n"}}]}"#);
    });

    let client = client_for(&server);
    let summary = client.generate_summary("Revenue: 200").await.unwrap();
    mock.assert();

    assert_eq!(summary, "The company is profitable.");
}

#[tokio::test]
async fn rate_limit_is_classified() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(429)
            .body(r#"{"error":{"message":"Rate limit reached"}}"#);
    });

    let err = client_for(&server).generate_summary("Revenue: 1").await.unwrap_err();
    mock.assert();

    match err {
        SummaryError::RateLimited(body) => assert!(body.contains("Rate limit")),
        other => panic!("expected RateLimited error, got {other:?}"),
    }
}

#[tokio::test]
async fn context_length_error_maps_to_user_message() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(400)
            .body(r#"{"error":{"code":"context_length_exceeded"}}"#);
    });

    let client = client_for(&server);
    let err = client.summarize("Revenue: 1").await.unwrap_err();

    match err {
        AnalysisError::SummaryError(message) => assert_eq!(
            message,
            "The document is too long for the AI model to process. Please try a shorter document."
        ),
        other => panic!("expected SummaryError, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_model_output_is_an_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"choices":[{"message":{"role":"assistant","content":"   "}}]}"#);
    });

    let err = client_for(&server).generate_summary("Revenue: 1").await.unwrap_err();
    assert!(matches!(err, SummaryError::EmptyResponse));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body("not json");
    });

    let err = client_for(&server).generate_summary("Revenue: 1").await.unwrap_err();
    assert!(matches!(err, SummaryError::InvalidResponse(_)));
}
