//! Catalogue of every API operation the client exposes.
//!
//! An [`Operation`] knows how to turn itself into an [`HttpRequest`], so the
//! pipeline can dispatch, retry, or hand it to the static provider without
//! knowing which endpoint it targets.

use lens_core::config::defaults;
use lens_core::errors::{LensError, LensResult};
use lens_core::models::{
    AnalysisType, AnalyzeRequest, ChatRequest, LoginRequest, MatterTag, NewBookmark,
    RegisterRequest, SearchExpandRequest, SearchRequest,
};
use serde::Serialize;

use crate::headers::Headers;
use crate::transport::{FilePart, HttpRequest, Method, RequestBody};

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    // Auth
    Login(LoginRequest),
    Register(RegisterRequest),
    CurrentUser,

    // Documents
    UploadDocument(FilePart),
    ListDocuments,
    DocumentContent { id: String },
    DeleteDocument { id: String },

    // Search & chat
    Search(SearchRequest),
    Chat(ChatRequest),
    ChatStatus,

    // Stats & analytics
    Stats,
    Analytics,
    RecentSearches { limit: u32 },
    ActivityLog { limit: u32 },
    SystemInfo,

    // Legal intelligence
    KeyTerms { document_id: String },
    ClassifyDocument { document_id: String },
    ClauseLibrary,
    SearchClause { clause_id: String, top_k: u32 },

    // Bookmarks & matters
    AddBookmark(NewBookmark),
    Bookmarks { matter: Option<String> },
    DeleteBookmark { id: u64 },
    SetMatterTag { document_id: String, tag: MatterTag },
    MatterTag { document_id: String },

    // AI analysis
    RunAnalysis { document_id: String, request: AnalyzeRequest },
    Analyses { document_id: String },
    ClearAnalyses { document_id: String },
    ExpandSearch(SearchExpandRequest),
}

impl Operation {
    pub fn recent_searches() -> Self {
        Self::RecentSearches {
            limit: defaults::DEFAULT_RECENT_SEARCH_LIMIT,
        }
    }

    pub fn activity_log() -> Self {
        Self::ActivityLog {
            limit: defaults::DEFAULT_ACTIVITY_LIMIT,
        }
    }

    pub fn search_clause(clause_id: impl Into<String>) -> Self {
        Self::SearchClause {
            clause_id: clause_id.into(),
            top_k: defaults::DEFAULT_CLAUSE_TOP_K,
        }
    }

    pub fn run_analysis(document_id: impl Into<String>, analysis_type: AnalysisType) -> Self {
        Self::RunAnalysis {
            document_id: document_id.into(),
            request: AnalyzeRequest {
                analysis_type,
                force_refresh: false,
            },
        }
    }

    /// Short stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "login",
            Self::Register(_) => "register",
            Self::CurrentUser => "current_user",
            Self::UploadDocument(_) => "upload_document",
            Self::ListDocuments => "list_documents",
            Self::DocumentContent { .. } => "document_content",
            Self::DeleteDocument { .. } => "delete_document",
            Self::Search(_) => "search",
            Self::Chat(_) => "chat",
            Self::ChatStatus => "chat_status",
            Self::Stats => "stats",
            Self::Analytics => "analytics",
            Self::RecentSearches { .. } => "recent_searches",
            Self::ActivityLog { .. } => "activity_log",
            Self::SystemInfo => "system_info",
            Self::KeyTerms { .. } => "key_terms",
            Self::ClassifyDocument { .. } => "classify_document",
            Self::ClauseLibrary => "clause_library",
            Self::SearchClause { .. } => "search_clause",
            Self::AddBookmark(_) => "add_bookmark",
            Self::Bookmarks { .. } => "bookmarks",
            Self::DeleteBookmark { .. } => "delete_bookmark",
            Self::SetMatterTag { .. } => "set_matter_tag",
            Self::MatterTag { .. } => "matter_tag",
            Self::RunAnalysis { .. } => "run_analysis",
            Self::Analyses { .. } => "analyses",
            Self::ClearAnalyses { .. } => "clear_analyses",
            Self::ExpandSearch(_) => "expand_search",
        }
    }

    /// Credential exchanges. A 401 from these means bad credentials, not an
    /// expired session, so it never triggers a refresh.
    pub fn is_auth_exchange(&self) -> bool {
        matches!(self, Self::Login(_) | Self::Register(_))
    }

    pub fn method(&self) -> Method {
        match self {
            Self::Login(_)
            | Self::Register(_)
            | Self::UploadDocument(_)
            | Self::Search(_)
            | Self::Chat(_)
            | Self::AddBookmark(_)
            | Self::RunAnalysis { .. }
            | Self::ExpandSearch(_) => Method::Post,
            Self::SetMatterTag { .. } => Method::Put,
            Self::DeleteDocument { .. } | Self::DeleteBookmark { .. } | Self::ClearAnalyses { .. } => {
                Method::Delete
            }
            _ => Method::Get,
        }
    }

    /// Route relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Self::Login(_) => "/auth/login".into(),
            Self::Register(_) => "/auth/register".into(),
            Self::CurrentUser => "/auth/me".into(),
            Self::UploadDocument(_) => "/documents/upload".into(),
            Self::ListDocuments => "/documents".into(),
            Self::DocumentContent { id } => format!("/documents/{id}/content"),
            Self::DeleteDocument { id } => format!("/documents/{id}"),
            Self::Search(_) => "/search".into(),
            Self::Chat(_) => "/chat".into(),
            Self::ChatStatus => "/chat/status".into(),
            Self::Stats => "/stats".into(),
            Self::Analytics => "/analytics".into(),
            Self::RecentSearches { .. } => "/analytics/recent-searches".into(),
            Self::ActivityLog { .. } => "/analytics/activity".into(),
            Self::SystemInfo => "/system-info".into(),
            Self::KeyTerms { document_id } => format!("/documents/{document_id}/key-terms"),
            Self::ClassifyDocument { document_id } => format!("/documents/{document_id}/classify"),
            Self::ClauseLibrary => "/clauses".into(),
            Self::SearchClause { clause_id, .. } => format!("/clauses/{clause_id}/search"),
            Self::AddBookmark(_) | Self::Bookmarks { .. } => "/bookmarks".into(),
            Self::DeleteBookmark { id } => format!("/bookmarks/{id}"),
            Self::SetMatterTag { document_id, .. } | Self::MatterTag { document_id } => {
                format!("/documents/{document_id}/matter")
            }
            Self::RunAnalysis { document_id, .. } => format!("/ai/documents/{document_id}/analyze"),
            Self::Analyses { document_id } | Self::ClearAnalyses { document_id } => {
                format!("/ai/documents/{document_id}/analyses")
            }
            Self::ExpandSearch(_) => "/ai/search/expand".into(),
        }
    }

    pub fn query(&self) -> Vec<(String, String)> {
        match self {
            Self::RecentSearches { limit } | Self::ActivityLog { limit } => {
                vec![("limit".into(), limit.to_string())]
            }
            Self::SearchClause { top_k, .. } => vec![("top_k".into(), top_k.to_string())],
            Self::Bookmarks {
                matter: Some(matter),
            } if !matter.is_empty() => vec![("matter".into(), matter.clone())],
            _ => Vec::new(),
        }
    }

    pub fn body(&self) -> LensResult<RequestBody> {
        match self {
            Self::Login(req) => json_body(req),
            Self::Register(req) => json_body(req),
            Self::UploadDocument(file) => Ok(RequestBody::Multipart(file.clone())),
            Self::Search(req) => json_body(req),
            Self::Chat(req) => json_body(req),
            Self::AddBookmark(req) => json_body(req),
            Self::SetMatterTag { tag, .. } => json_body(tag),
            Self::RunAnalysis { request, .. } => json_body(request),
            Self::ExpandSearch(req) => json_body(req),
            _ => Ok(RequestBody::Empty),
        }
    }

    /// Build the request with the given headers.
    pub fn to_request(&self, headers: Headers) -> LensResult<HttpRequest> {
        Ok(HttpRequest {
            method: self.method(),
            path: self.path(),
            query: self.query(),
            headers,
            body: self.body()?,
        })
    }
}

fn json_body<T: Serialize>(value: &T) -> LensResult<RequestBody> {
    serde_json::to_value(value)
        .map(RequestBody::Json)
        .map_err(|e| LensError::InvalidRequest {
            reason: format!("failed to encode request body: {e}"),
        })
}
