//! OCR.Space backend against an in-process stub of the parse endpoint.

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use nyayai::draft::Classifier;
use nyayai::models::{Document, RiskLevel};
use nyayai::ocr::{OcrBackend, OcrError, OcrSpaceBackend, OcrSpaceConfig};
use nyayai::services::Assistant;
use nyayai::stt::MockTranscriber;
use nyayai::tts::{GoogleTranslateTts, LanguagePolicy, Synthesizer};

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

/// Text fields plus the uploaded file's name and size, per request.
#[derive(Clone, Default)]
struct Captured {
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

#[derive(Clone)]
struct Stub {
    captured: Captured,
    reply: serde_json::Value,
    status: StatusCode,
}

async fn parse_image(State(stub): State<Stub>, mut multipart: Multipart) -> impl IntoResponse {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            fields.insert(
                "file.name".to_string(),
                field.file_name().unwrap_or_default().to_string(),
            );
            fields.insert(
                "file.type".to_string(),
                field.content_type().unwrap_or_default().to_string(),
            );
            let bytes = field.bytes().await.unwrap();
            fields.insert("file.len".to_string(), bytes.len().to_string());
        } else {
            fields.insert(name, field.text().await.unwrap());
        }
    }
    stub.captured.requests.lock().unwrap().push(fields);
    (stub.status, Json(stub.reply))
}

async fn start(reply: serde_json::Value, status: StatusCode) -> (String, Captured) {
    let captured = Captured::default();
    let app = Router::new()
        .route("/parse/image", post(parse_image))
        .with_state(Stub {
            captured: captured.clone(),
            reply,
            status,
        });
    let base = common::spawn_stub(app).await;
    (format!("{}/parse/image", base), captured)
}

fn backend(endpoint: &str, api_key: Option<&str>) -> OcrSpaceBackend {
    let mut config: OcrSpaceConfig = serde_json::from_str("{}").unwrap();
    config.endpoint = endpoint.to_string();
    config.api_key = api_key.map(str::to_string);
    OcrSpaceBackend::new(config, common::http_client())
}

fn document() -> Document {
    Document::from_upload(PNG.to_vec(), Some("notice".to_string())).unwrap()
}

#[tokio::test]
async fn sends_expected_form_and_trims_text() {
    let (endpoint, captured) = start(
        serde_json::json!({
            "ParsedResults": [{"ParsedText": "\r\n This is an eviction notice dated 1st Jan \r\n"}],
            "IsErroredOnProcessing": false
        }),
        StatusCode::OK,
    )
    .await;

    let result = backend(&endpoint, Some("test-key"))
        .extract(&document())
        .await
        .unwrap();
    assert_eq!(result.text(), "This is an eviction notice dated 1st Jan");
    assert_eq!(result.error(), None);

    let requests = captured.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let fields = &requests[0];
    assert_eq!(fields["apikey"], "test-key");
    assert_eq!(fields["language"], "eng,mar");
    assert_eq!(fields["OCREngine"], "2");
    assert_eq!(fields["scale"], "true");
    assert_eq!(fields["isTable"], "false");
    assert_eq!(fields["file.name"], "notice.png");
    assert_eq!(fields["file.type"], "image/png");
    assert_eq!(fields["file.len"], PNG.len().to_string());
}

#[tokio::test]
async fn provider_error_skips_classification() {
    let (endpoint, _) = start(
        serde_json::json!({"IsErroredOnProcessing": true, "ErrorMessage": "bad image"}),
        StatusCode::OK,
    )
    .await;

    let assistant = Assistant::new(
        Arc::new(backend(&endpoint, Some("test-key"))),
        Classifier::default(),
        Synthesizer::new(
            Arc::new(GoogleTranslateTts::new(
                "http://127.0.0.1:9/",
                common::http_client(),
            )),
            LanguagePolicy::default(),
        ),
        Arc::new(MockTranscriber::default()),
    );

    let analysis = assistant.analyze_document(&document()).await.unwrap();
    assert_eq!(analysis.extraction.error(), Some("bad image"));
    assert_eq!(analysis.extraction.text(), "");
    assert!(analysis.draft.is_none());
}

#[tokio::test]
async fn successful_extraction_is_classified() {
    let (endpoint, _) = start(
        serde_json::json!({
            "ParsedResults": [{"ParsedText": "I want my deposit refund"}],
            "IsErroredOnProcessing": false
        }),
        StatusCode::OK,
    )
    .await;

    let assistant = Assistant::new(
        Arc::new(backend(&endpoint, Some("test-key"))),
        Classifier::default(),
        Synthesizer::new(
            Arc::new(GoogleTranslateTts::new(
                "http://127.0.0.1:9/",
                common::http_client(),
            )),
            LanguagePolicy::default(),
        ),
        Arc::new(MockTranscriber::default()),
    );

    let draft = assistant
        .analyze_document(&document())
        .await
        .unwrap()
        .draft
        .unwrap();
    assert_eq!(draft.risk_level, RiskLevel::Low);
    assert!(draft
        .body
        .starts_with("To,\nThe Landlord,\nSubject: Request for refund of security deposit"));
}

#[tokio::test]
async fn http_failure_is_an_error() {
    let (endpoint, _) = start(
        serde_json::json!({"message": "overloaded"}),
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;

    let err = backend(&endpoint, Some("test-key"))
        .extract(&document())
        .await
        .unwrap_err();
    match err {
        OcrError::Api { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("overloaded"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_key_makes_no_request() {
    let (endpoint, captured) = start(serde_json::json!({}), StatusCode::OK).await;

    let err = backend(&endpoint, None)
        .extract(&document())
        .await
        .unwrap_err();
    assert!(matches!(err, OcrError::BackendNotAvailable(_)));
    assert!(captured.requests.lock().unwrap().is_empty());
}
