//! Router-level tests against in-memory collaborators.
//!
//! Covers the full HTTP surface: auth rejection, generation, manual save,
//! sharing, the unauthenticated public read path, and file parsing.

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use uuid::Uuid;

use notegen_api::{
    test_fixtures::{MemoryNoteRepository, StaticIdentityProvider},
    AppState,
};
use notegen_core::AuthPrincipal;
use notegen_extract::FileDispatcher;
use notegen_inference::MockGenerationBackend;

const TOKEN: &str = "test-token";

fn test_state(
    backend: MockGenerationBackend,
    staging_dir: &Path,
) -> (Router, Arc<MemoryNoteRepository>, Uuid) {
    let user_id = Uuid::new_v4();
    let notes = Arc::new(MemoryNoteRepository::new());
    let identity = Arc::new(StaticIdentityProvider::new(
        TOKEN,
        AuthPrincipal {
            user_id,
            name: "Test User".to_string(),
        },
    ));
    let state = AppState::new(
        notes.clone(),
        identity,
        Arc::new(backend),
        Arc::new(FileDispatcher::new(None)),
        staging_dir.to_path_buf(),
    );
    (notegen_api::router(state), notes, user_id)
}

fn authed_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn generate_requires_auth() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _, _) = test_state(MockGenerationBackend::new(), dir.path());

    let request = Request::builder()
        .method("POST")
        .uri("/api/notes/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"query":"Q1"}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn generate_batches_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let backend = MockGenerationBackend::new();
    backend.push_response("R1");
    backend.push_response("R2");
    let (router, notes, user_id) = test_state(backend.clone(), dir.path());

    let request = authed_json(
        "POST",
        "/api/notes/generate",
        serde_json::json!({"query": "Q1\nQ2\nQ3\nQ4\nQ5\nQ6\nQ7"}),
    );
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["title"], "Q1");
    assert_eq!(body["content"], "R1\nR2");
    assert_eq!(backend.call_count(), 2);

    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
    let stored = notes.get(id).unwrap();
    assert_eq!(stored.owner_id, user_id);
    assert!(!stored.is_public);
}

#[tokio::test]
async fn empty_query_is_bad_request_without_model_calls() {
    let dir = tempfile::tempdir().unwrap();
    let backend = MockGenerationBackend::new();
    let (router, _, _) = test_state(backend.clone(), dir.path());

    let request = authed_json(
        "POST",
        "/api/notes/generate",
        serde_json::json!({"query": "   "}),
    );
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn generation_failure_is_internal_error_and_nothing_saved() {
    let dir = tempfile::tempdir().unwrap();
    let backend = MockGenerationBackend::new();
    backend.push_failure("model offline");
    let (router, notes, _) = test_state(backend, dir.path());

    let request = authed_json(
        "POST",
        "/api/notes/generate",
        serde_json::json!({"query": "Q1"}),
    );
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    // Internal detail stays in the log, not in the response.
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(notes.len(), 0);
}

#[tokio::test]
async fn manual_save_requires_content() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _, _) = test_state(MockGenerationBackend::new(), dir.path());

    let request = authed_json(
        "POST",
        "/api/notes/manual-save",
        serde_json::json!({"title": "T", "content": ""}),
    );
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn manual_save_with_blank_title_gets_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let (router, notes, _) = test_state(MockGenerationBackend::new(), dir.path());

    let response = router
        .oneshot(authed_json(
            "POST",
            "/api/notes/manual-save",
            serde_json::json!({"title": "", "content": "# body"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = json_body(response).await;
    assert_eq!(created["title"], "Untitled Note");
    let id: Uuid = created["id"].as_str().unwrap().parse().unwrap();
    assert_eq!(notes.get(id).unwrap().title, "Untitled Note");
}

#[tokio::test]
async fn manual_save_then_update_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _, _) = test_state(MockGenerationBackend::new(), dir.path());

    let response = router
        .clone()
        .oneshot(authed_json(
            "POST",
            "/api/notes/manual-save",
            serde_json::json!({"content": "# draft"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["title"], "Untitled Note");
    let id = created["id"].as_str().unwrap().to_string();

    // Update without a title keeps the stored one.
    let response = router
        .clone()
        .oneshot(authed_json(
            "PUT",
            &format!("/api/notes/{}", id),
            serde_json::json!({"content": "# revised"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["title"], "Untitled Note");
    assert_eq!(updated["content"], "# revised");

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/notes")
                .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let listed = json_body(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn private_note_is_hidden_from_shared_path_until_shared() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _, _) = test_state(MockGenerationBackend::new(), dir.path());

    let response = router
        .clone()
        .oneshot(authed_json(
            "POST",
            "/api/notes/manual-save",
            serde_json::json!({"title": "Secret", "content": "# hidden"}),
        ))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    // Unauthenticated public fetch of a private note: not found.
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/notes/shared/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Owner shares it.
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/notes/{}/share", id))
                .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Now readable without any token.
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/notes/shared/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let shared = json_body(response).await;
    assert_eq!(shared["title"], "Secret");
    assert_eq!(shared["content"], "# hidden");
    assert_eq!(shared["owner_name"], "Anonymous");
}

#[tokio::test]
async fn delete_removes_note() {
    let dir = tempfile::tempdir().unwrap();
    let (router, notes, _) = test_state(MockGenerationBackend::new(), dir.path());

    let response = router
        .clone()
        .oneshot(authed_json(
            "POST",
            "/api/notes/manual-save",
            serde_json::json!({"content": "bye"}),
        ))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();
    assert_eq!(notes.len(), 1);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/notes/{}", id))
                .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(notes.len(), 0);
}

fn multipart_request(uri: &str, file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let boundary = "test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn parse_plain_text_upload() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _, _) = test_state(MockGenerationBackend::new(), dir.path());

    let request = multipart_request("/api/files/parse", "notes.txt", "text/plain", b"lecture notes");
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["extracted_text"], "lecture notes");
    assert_eq!(body["file_name"], "notes.txt");

    // Nothing left behind in the staging directory.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty(), "staging dir should be empty");
}

#[tokio::test]
async fn parse_unsupported_type_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _, _) = test_state(MockGenerationBackend::new(), dir.path());

    let request = multipart_request("/api/files/parse", "clip.mp4", "video/mp4", b"\x00\x01");
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("Unsupported file type"));

    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty(), "staged file must be cleaned up");
}

#[tokio::test]
async fn parse_without_file_part_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let (router, _, _) = test_state(MockGenerationBackend::new(), dir.path());

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/files/parse")
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "No file uploaded");
}
