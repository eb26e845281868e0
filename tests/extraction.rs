//! Integration tests for the extraction pipeline against a mock Gemini
//! endpoint.
//!
//! No live API calls: a local mockito server stands in for the provider so
//! the wire contract, the error taxonomy, and the normaliser fallback can
//! be pinned exactly.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use mockito::Matcher;
use pdf2spec::{
    extract_bytes, prompts::EXTRACTION_PROMPT, ExtractError, ExtractionConfig, ExtractionResult,
    GeminiModel,
};
use serde_json::json;

const DOCUMENT: &[u8] = b"%PDF-1.7 test document";

fn test_config(server: &mockito::Server, model: GeminiModel) -> ExtractionConfig {
    ExtractionConfig::builder()
        .model(model)
        .api_key("test-key")
        .base_url(server.url())
        .build()
}

fn success_envelope(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
    .to_string()
}

#[tokio::test]
async fn fenced_json_becomes_structured_result() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_envelope(
            "```json\n{\"section\": \"22 08 00\", \"name\": \"COMMISSIONING OF PLUMBING\"}\n```",
        ))
        .create_async()
        .await;

    let config = test_config(&server, GeminiModel::Flash);
    let output = extract_bytes(DOCUMENT, &config).await.expect("extraction");

    let ExtractionResult::Structured(payload) = &output.result else {
        panic!("expected structured result, got {:?}", output.result);
    };
    let value: serde_json::Value = serde_json::from_str(payload).expect("valid JSON");
    assert_eq!(value["section"], "22 08 00");
    assert_eq!(value["name"], "COMMISSIONING OF PLUMBING");
    assert_eq!(output.model, GeminiModel::Flash);

    mock.assert_async().await;
}

#[tokio::test]
async fn request_body_matches_wire_contract_exactly() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::Json(json!({
            "contents": [{
                "parts": [
                    { "text": EXTRACTION_PROMPT },
                    {
                        "inlineData": {
                            "mimeType": "application/pdf",
                            "data": STANDARD.encode(DOCUMENT),
                        }
                    }
                ]
            }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_envelope("{}"))
        .create_async()
        .await;

    let config = test_config(&server, GeminiModel::Flash);
    extract_bytes(DOCUMENT, &config).await.expect("extraction");

    mock.assert_async().await;
}

#[tokio::test]
async fn model_selection_routes_to_model_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-pro:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_envelope("{\"a\": 1}"))
        .create_async()
        .await;

    let config = test_config(&server, GeminiModel::Pro);
    let output = extract_bytes(DOCUMENT, &config).await.expect("extraction");
    assert_eq!(output.model, GeminiModel::Pro);

    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_answer_falls_back_to_raw() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_envelope(
            "  The document appears to be a scanned image with no extractable text.  ",
        ))
        .create_async()
        .await;

    let config = test_config(&server, GeminiModel::Flash);
    let output = extract_bytes(DOCUMENT, &config).await.expect("extraction");

    assert_eq!(
        output.result,
        ExtractionResult::Raw(
            "The document appears to be a scanned image with no extractable text.".to_string()
        )
    );
}

#[tokio::test]
async fn upstream_error_carries_message_and_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": { "message": "bad request", "code": 400 } }).to_string())
        .create_async()
        .await;

    let config = test_config(&server, GeminiModel::Flash);
    let err = extract_bytes(DOCUMENT, &config).await.unwrap_err();

    match err {
        ExtractError::Upstream { message, status } => {
            assert_eq!(message, "bad request");
            assert_eq!(status, 400);
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn upstream_error_without_detail_gets_generic_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(503)
        .with_body("<html>Service Unavailable</html>")
        .create_async()
        .await;

    let config = test_config(&server, GeminiModel::Flash);
    let err = extract_bytes(DOCUMENT, &config).await.unwrap_err();

    match err {
        ExtractError::Upstream { message, status } => {
            assert_eq!(status, 503);
            assert!(message.contains("no error detail"), "got: {message}");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidates_is_malformed_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "candidates": [] }).to_string())
        .create_async()
        .await;

    let config = test_config(&server, GeminiModel::Flash);
    let err = extract_bytes(DOCUMENT, &config).await.unwrap_err();
    assert!(matches!(err, ExtractError::MalformedResponse { .. }));
}

#[tokio::test]
async fn missing_credential_makes_no_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut config = ExtractionConfig::builder()
        .model(GeminiModel::Flash)
        .base_url(server.url())
        .build();
    config.api_key = None;

    let err = extract_bytes(DOCUMENT, &config).await.unwrap_err();
    assert!(matches!(err, ExtractError::MissingCredential));

    // Verifies zero hits reached the server.
    mock.assert_async().await;
}
