//! Request pipeline scenarios: bearer headers, refresh-and-retry, session
//! expiry, application errors, and the demo fallback.

mod common;

use common::*;
use lens_client::headers::{AUTHORIZATION, CONTENT_TYPE};
use lens_client::ops::Operation;
use lens_client::transport::{FilePart, Method, RequestBody};
use lens_client::FallbackMode;
use lens_core::errors::LensError;
use lens_core::models::{ProcessingStatus, SearchRequest};
use serde_json::json;

fn documents_json() -> serde_json::Value {
    json!({ "documents": [], "total": 0 })
}

// ─── Bearer headers ────────────────────────────────────────

#[tokio::test]
async fn login_persists_session_and_later_calls_carry_bearer() {
    let backend = MockBackend::new();
    backend.on(
        Method::Post,
        "/auth/login",
        200,
        json!({ "user": user_json(), "tokens": tokens_json("T1", "R1") }),
    );
    backend.on(Method::Get, "/documents", 200, documents_json());
    let (client, _) = client(&backend);

    let auth = client.login("a@b.com", "secret123").await.unwrap();
    assert_eq!(auth.tokens.access_token, "T1");
    assert!(client.is_authenticated());

    client.list_documents().await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].bearer_token(), None);
    assert_eq!(
        requests[0].body,
        RequestBody::Json(json!({ "email": "a@b.com", "password": "secret123" }))
    );
    assert_eq!(requests[1].bearer_token(), Some("T1"));
    assert_eq!(requests[1].header(CONTENT_TYPE), Some("application/json"));
    assert_eq!(client.fallback_mode(), FallbackMode::Live);
}

#[tokio::test]
async fn anonymous_calls_carry_no_authorization() {
    let backend = MockBackend::new();
    backend.on(Method::Get, "/chat/status", 200, json!({ "ollama_available": false, "message": "offline" }));
    let (client, _) = client(&backend);

    let status = client.chat_status().await.unwrap();
    assert!(!status.ollama_available);
    assert!(backend.requests()[0].header(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn upload_has_no_content_type_and_keeps_bearer() {
    let backend = MockBackend::new();
    backend.on(
        Method::Post,
        "/documents/upload",
        200,
        json!({ "id": "d1", "filename": "msa.pdf", "status": "processing" }),
    );
    let (client, _) = signed_in_client(&backend);

    let receipt = client
        .upload_document(FilePart {
            filename: "msa.pdf".into(),
            content_type: Some("application/pdf".into()),
            bytes: b"%PDF-1.7".to_vec(),
        })
        .await
        .unwrap();
    assert_eq!(receipt.status, ProcessingStatus::Processing);

    let sent = &backend.requests()[0];
    assert!(sent.header(CONTENT_TYPE).is_none());
    assert_eq!(sent.bearer_token(), Some("T1"));
    assert!(matches!(sent.body, RequestBody::Multipart(_)));
}

#[tokio::test]
async fn query_parameters_are_forwarded() {
    let backend = MockBackend::new();
    backend.on(Method::Get, "/bookmarks", 200, json!({ "bookmarks": [] }));
    backend.on(Method::Get, "/analytics/recent-searches", 200, json!({ "searches": [] }));
    let (client, _) = signed_in_client(&backend);

    client.bookmarks(Some("2024-001")).await.unwrap();
    client.recent_searches(None).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].query, vec![("matter".to_string(), "2024-001".to_string())]);
    assert_eq!(requests[1].query, vec![("limit".to_string(), "10".to_string())]);
}

// ─── Refresh and retry ─────────────────────────────────────

#[tokio::test]
async fn expired_token_is_refreshed_and_request_retried() {
    let backend = MockBackend::new();
    backend
        .on(Method::Get, "/documents", 401, json!({ "detail": "Token expired" }))
        .on(Method::Get, "/documents", 200, documents_json());
    backend.on(Method::Post, "/auth/refresh", 200, tokens_json("T2", "R2"));
    let (client, _) = signed_in_client(&backend);

    let list = client.list_documents().await.unwrap();
    assert_eq!(list.total, 0);

    let refresh = backend.requests_to("/auth/refresh");
    assert_eq!(refresh.len(), 1);
    assert_eq!(refresh[0].body, RequestBody::Json(json!({ "refresh_token": "R1" })));
    assert_eq!(refresh[0].bearer_token(), None);

    let calls = backend.requests_to("/documents");
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].bearer_token(), Some("T1"));
    assert_eq!(calls[1].bearer_token(), Some("T2"));

    let session = client.session();
    assert_eq!(session.access_token(), Some("T2"));
    assert_eq!(session.refresh_token(), Some("R2"));
    assert_eq!(session.user, Some(user()));
}

#[tokio::test]
async fn rejected_refresh_clears_session_and_signals_expiry() {
    let backend = MockBackend::new();
    backend.on(Method::Get, "/documents", 401, json!({ "detail": "Token expired" }));
    backend.on(Method::Post, "/auth/refresh", 401, json!({ "detail": "Invalid refresh token" }));
    let (client, store) = signed_in_client(&backend);

    let err = client.list_documents().await.unwrap_err();
    assert!(err.is_session_expired());
    assert!(!client.is_authenticated());
    assert!(store.is_empty());
    assert!(!client.is_demo());
}

#[tokio::test]
async fn unauthorized_without_refresh_token_expires_without_exchange() {
    let backend = MockBackend::new();
    backend.on(Method::Get, "/auth/me", 401, json!({ "detail": "Not authenticated" }));
    let (client, _) = client(&backend);

    let err = client.current_user().await.unwrap_err();
    assert!(matches!(err, LensError::SessionExpired));
    assert!(backend.requests_to("/auth/refresh").is_empty());
}

#[tokio::test]
async fn second_unauthorized_after_refresh_is_surfaced() {
    let backend = MockBackend::new();
    backend
        .on(Method::Get, "/stats", 401, json!({ "detail": "Token expired" }))
        .on(Method::Get, "/stats", 401, json!({ "detail": "Forbidden for this org" }));
    backend.on(Method::Post, "/auth/refresh", 200, tokens_json("T2", "R2"));
    let (client, _) = signed_in_client(&backend);

    let err = client.stats().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Forbidden for this org");
    assert_eq!(backend.requests_to("/auth/refresh").len(), 1);
    assert_eq!(backend.requests_to("/stats").len(), 2);
}

#[tokio::test]
async fn malformed_refresh_response_expires_session() {
    let backend = MockBackend::new();
    backend.on(Method::Get, "/documents", 401, json!({}));
    backend.on_raw(Method::Post, "/auth/refresh", 200, "<html>oops</html>");
    let (client, _) = signed_in_client(&backend);

    let err = client.list_documents().await.unwrap_err();
    assert!(err.is_session_expired());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn concurrent_unauthorized_calls_share_one_refresh() {
    let backend = MockBackend::new();
    backend
        .on(Method::Get, "/documents", 401, json!({ "detail": "Token expired" }))
        .on(Method::Get, "/documents", 401, json!({ "detail": "Token expired" }))
        .on(Method::Get, "/documents", 200, documents_json())
        .on(Method::Get, "/documents", 200, documents_json());
    backend.on(Method::Post, "/auth/refresh", 200, tokens_json("T2", "R2"));
    backend.on(Method::Post, "/auth/refresh", 401, json!({ "detail": "Refresh token reused" }));
    backend.gate("/documents", 2);
    backend.delay("/auth/refresh", std::time::Duration::from_millis(50));
    let (client, _) = signed_in_client(&backend);

    let other = client.clone();
    let (a, b) = tokio::join!(client.list_documents(), other.list_documents());
    a.unwrap();
    b.unwrap();

    assert_eq!(backend.requests_to("/auth/refresh").len(), 1);
    let calls = backend.requests_to("/documents");
    assert_eq!(calls.len(), 4);
    assert!(calls[2..].iter().all(|r| r.bearer_token() == Some("T2")));
    assert!(!client.pipeline().refresher().is_refreshing());
}

// ─── Application errors ────────────────────────────────────

#[tokio::test]
async fn login_failure_surfaces_detail_without_refresh() {
    let backend = MockBackend::new();
    backend.on(Method::Post, "/auth/login", 401, json!({ "detail": "Invalid email or password" }));
    let (client, _) = client(&backend);

    let err = client.login("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");
    assert_eq!(err.status(), Some(401));
    assert!(backend.requests_to("/auth/refresh").is_empty());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn login_does_not_send_a_stale_bearer() {
    let backend = MockBackend::new();
    backend.on(
        Method::Post,
        "/auth/login",
        200,
        json!({ "user": user_json(), "tokens": tokens_json("T9", "R9") }),
    );
    let (client, _) = signed_in_client(&backend);

    client.login("a@b.com", "secret123").await.unwrap();
    assert_eq!(backend.requests()[0].bearer_token(), None);
    assert_eq!(client.session().access_token(), Some("T9"));
}

#[tokio::test]
async fn not_found_carries_server_detail() {
    let backend = MockBackend::new();
    backend.on(Method::Get, "/documents/xyz/content", 404, json!({ "detail": "Document not found" }));
    let (client, _) = signed_in_client(&backend);

    let err = client.document_content("xyz").await.unwrap_err();
    assert_eq!(err.to_string(), "Document not found");
    assert_eq!(err.status(), Some(404));
    assert!(!client.is_demo());
}

#[tokio::test]
async fn server_error_without_detail_uses_default_message() {
    let backend = MockBackend::new();
    backend.on_raw(Method::Post, "/search", 500, "Internal Server Error");
    let (client, _) = signed_in_client(&backend);

    let err = client.search(SearchRequest::new("indemnity")).await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed: 500");
    assert_eq!(client.fallback_mode(), FallbackMode::Live);
}

#[tokio::test]
async fn unexpected_body_shape_is_a_decode_error() {
    let backend = MockBackend::new();
    backend.on(Method::Get, "/stats", 200, json!({ "unexpected": true }));
    let (client, _) = signed_in_client(&backend);

    let err = client.stats().await.unwrap_err();
    assert!(matches!(err, LensError::Decode { .. }));
}

#[tokio::test]
async fn empty_success_body_dispatches_as_null() {
    let backend = MockBackend::new();
    backend.on_raw(Method::Delete, "/bookmarks/7", 204, "");
    let (client, _) = signed_in_client(&backend);

    let value = client
        .pipeline()
        .dispatch(&Operation::DeleteBookmark { id: 7 })
        .await
        .unwrap();
    assert!(value.is_null());
}

// ─── Demo fallback ─────────────────────────────────────────

#[tokio::test]
async fn transport_failure_serves_static_payload() {
    let backend = MockBackend::new();
    backend.on_unreachable(Method::Get, "/documents");
    let (client, _) = signed_in_client(&backend);

    let list = client.list_documents().await.unwrap();
    assert_eq!(list.total, 5);
    assert_eq!(list.documents.len(), 5);
    assert!(client.is_demo());
    assert_eq!(client.fallback_mode(), FallbackMode::Demo);
}

#[tokio::test]
async fn demo_mode_is_sticky() {
    let backend = MockBackend::new();
    backend.on_unreachable(Method::Get, "/stats");
    backend.on(Method::Get, "/documents", 200, documents_json());
    let (client, _) = signed_in_client(&backend);

    client.stats().await.unwrap();
    assert!(client.is_demo());
    let sent = backend.request_count();

    // The backend would answer now, but nothing goes out any more.
    let list = client.list_documents().await.unwrap();
    assert_eq!(list.total, 5);
    assert_eq!(backend.request_count(), sent);
    assert!(client.is_demo());
}

#[tokio::test]
async fn upload_in_demo_mode_echoes_filename() {
    let backend = MockBackend::new();
    backend.go_offline();
    let (client, _) = signed_in_client(&backend);
    client.chat_status().await.unwrap();
    let sent = backend.request_count();

    let receipt = client
        .upload_document(FilePart {
            filename: "lease.pdf".into(),
            content_type: None,
            bytes: vec![1, 2, 3],
        })
        .await
        .unwrap();
    assert_eq!(receipt.filename, "lease.pdf");
    assert_eq!(receipt.status, ProcessingStatus::Ready);
    assert!(!receipt.id.is_empty());
    assert_eq!(backend.request_count(), sent);
}

#[tokio::test]
async fn unreachable_refresh_enters_demo_and_keeps_session() {
    let backend = MockBackend::new();
    backend.on(Method::Get, "/documents", 401, json!({ "detail": "Token expired" }));
    backend.on_unreachable(Method::Post, "/auth/refresh");
    let (client, _) = signed_in_client(&backend);

    let list = client.list_documents().await.unwrap();
    assert_eq!(list.total, 5);
    assert!(client.is_demo());
    assert_eq!(client.session().access_token(), Some("T1"));
}

#[tokio::test]
async fn unreachable_retry_enters_demo() {
    let backend = MockBackend::new();
    backend.on(Method::Get, "/documents", 401, json!({ "detail": "Token expired" }));
    backend.on_unreachable(Method::Get, "/documents");
    backend.on(Method::Post, "/auth/refresh", 200, tokens_json("T2", "R2"));
    let (client, _) = signed_in_client(&backend);

    let list = client.list_documents().await.unwrap();
    assert_eq!(list.total, 5);
    assert!(client.is_demo());
    assert_eq!(client.session().access_token(), Some("T2"));
}

#[tokio::test]
async fn logout_clears_session_locally() {
    let backend = MockBackend::new();
    let (client, store) = signed_in_client(&backend);
    assert!(client.is_authenticated());

    client.logout();
    client.logout();

    assert!(!client.is_authenticated());
    assert!(store.is_empty());
    assert_eq!(backend.request_count(), 0);
}
