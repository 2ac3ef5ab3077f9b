//! Static responses: every operation answers in demo mode with a payload
//! that decodes into its typed response.

mod common;

use common::*;
use lens_client::ops::Operation;
use lens_client::transport::FilePart;
use lens_client::StaticResponseProvider;
use lens_core::models::*;

async fn offline_client() -> lens_client::LensClient {
    let backend = MockBackend::new();
    backend.go_offline();
    let (client, _) = client(&backend);
    client.chat_status().await.unwrap();
    assert!(client.is_demo());
    client
}

// ─── Coverage ──────────────────────────────────────────────

#[tokio::test]
async fn every_operation_decodes_in_demo_mode() {
    let client = offline_client().await;

    let auth = client.login("someone@firm.com", "pw").await.unwrap();
    assert_eq!(auth.user.email, "someone@firm.com");
    let registered = client
        .register(RegisterRequest {
            email: "new@firm.com".into(),
            password: "pw".into(),
            full_name: "New Person".into(),
            organization_name: "New Firm".into(),
        })
        .await
        .unwrap();
    assert_eq!(registered.user.organization_name, "New Firm");
    client.current_user().await.unwrap();

    client
        .upload_document(FilePart {
            filename: "a.pdf".into(),
            content_type: None,
            bytes: Vec::new(),
        })
        .await
        .unwrap();
    client.list_documents().await.unwrap();
    client.document_content("demo-1").await.unwrap();
    client.delete_document("demo-1").await.unwrap();

    client.search(SearchRequest::new("termination")).await.unwrap();
    let chat = client.chat(ChatRequest::new("Summarize")).await.unwrap();
    assert!(chat.answer.ends_with(lens_client::demo::DEMO_NOTE));
    assert_eq!(chat.citations.len(), 4);
    client.chat_status().await.unwrap();

    client.stats().await.unwrap();
    client.analytics().await.unwrap();
    client.recent_searches(None).await.unwrap();
    client.activity_log(Some(3)).await.unwrap();
    client.system_info().await.unwrap();

    client.key_terms("demo-1").await.unwrap();
    client.classify_document("demo-1").await.unwrap();
    client.clause_library().await.unwrap();
    client.search_clause("force_majeure", None).await.unwrap();

    client
        .add_bookmark(NewBookmark {
            document_name: "NDA.pdf".into(),
            text: "Confidential Information means".into(),
            ..NewBookmark::default()
        })
        .await
        .unwrap();
    client.bookmarks(None).await.unwrap();
    client.delete_bookmark(1).await.unwrap();
    client
        .set_matter_tag("demo-1", MatterTag::default())
        .await
        .unwrap();
    client.matter_tag("demo-1").await.unwrap();

    client
        .run_analysis(
            "demo-1",
            AnalyzeRequest {
                analysis_type: AnalysisType::Summary,
                force_refresh: false,
            },
        )
        .await
        .unwrap();
    client.analyses("demo-1").await.unwrap();
    client.clear_analyses("demo-1").await.unwrap();
    client.expand_search("indemnity").await.unwrap();
}

// ─── Echoing generators ────────────────────────────────────

#[tokio::test]
async fn search_echoes_query_with_every_citation() {
    let client = offline_client().await;
    let result = client.search(SearchRequest::new("force majeure")).await.unwrap();

    assert_eq!(result.query, "force majeure");
    assert_eq!(result.results.len(), 5);
    assert_eq!(result.total_results, 5);
}

#[tokio::test]
async fn clause_search_titles_the_clause_id() {
    let client = offline_client().await;
    let result = client
        .search_clause("limitation_of_liability", Some(2))
        .await
        .unwrap();

    assert_eq!(result.clause.id, "limitation_of_liability");
    assert_eq!(result.clause.name, "Limitation Of Liability");
    assert_eq!(result.results.len(), 2);
}

#[tokio::test]
async fn bookmark_filter_and_echo() {
    let client = offline_client().await;

    assert_eq!(client.bookmarks(None).await.unwrap().bookmarks.len(), 2);
    let filtered = client.bookmarks(Some("2024-003")).await.unwrap();
    assert_eq!(filtered.bookmarks.len(), 1);
    assert_eq!(filtered.bookmarks[0].matter, "2024-003");

    let added = client
        .add_bookmark(NewBookmark {
            query: Some("notice".into()),
            document_name: "MSA.pdf".into(),
            page: Some(9),
            text: "All notices shall be in writing".into(),
            note: Some("check address".into()),
            matter: Some("2024-009".into()),
        })
        .await
        .unwrap();
    assert_eq!(added.document_name, "MSA.pdf");
    assert_eq!(added.page, Some(9));
    assert_eq!(added.matter, "2024-009");
}

#[tokio::test]
async fn limits_cap_feeds() {
    let client = offline_client().await;
    assert_eq!(client.activity_log(Some(3)).await.unwrap().activity.len(), 3);
    assert!(client.recent_searches(Some(1)).await.unwrap().searches.len() <= 1);
}

#[tokio::test]
async fn library_and_sample_set_sizes() {
    let client = offline_client().await;

    assert_eq!(client.clause_library().await.unwrap().clauses.len(), 12);
    let docs = client.list_documents().await.unwrap();
    assert!(docs.documents.iter().all(|d| d.status == ProcessingStatus::Ready));
    let content = client.document_content("demo-1").await.unwrap();
    assert_eq!(content.total_pages as usize, content.pages.len());
}

#[tokio::test]
async fn demo_login_yields_an_authenticated_session() {
    let client = offline_client().await;
    client.login("a@b.com", "pw").await.unwrap();
    assert!(client.is_authenticated());
}

// ─── Provider ──────────────────────────────────────────────

#[test]
fn provider_answers_without_a_runtime() {
    let provider = StaticResponseProvider::new();
    let value = provider
        .respond(&Operation::run_analysis("d1", AnalysisType::Risks))
        .unwrap();

    let result: AnalysisResult = serde_json::from_value(value).unwrap();
    assert_eq!(result.document_id, "d1");
    assert_eq!(result.analysis_type, AnalysisType::Risks);
    assert!(result.details.contains_key("overall_risk"));
}

#[test]
fn uploads_get_distinct_ids() {
    let provider = StaticResponseProvider::new();
    let op = Operation::UploadDocument(FilePart {
        filename: "x.pdf".into(),
        content_type: None,
        bytes: Vec::new(),
    });
    let a: UploadReceipt = serde_json::from_value(provider.respond(&op).unwrap()).unwrap();
    let b: UploadReceipt = serde_json::from_value(provider.respond(&op).unwrap()).unwrap();
    assert_ne!(a.id, b.id);
}
