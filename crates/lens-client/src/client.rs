//! Typed façade over the request pipeline.

use std::sync::Arc;

use lens_core::config::LensConfig;
use lens_core::errors::{LensError, LensResult};
use lens_core::models::*;
use lens_core::traits::KeyValueStore;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::fallback::FallbackMode;
use crate::ops::Operation;
use crate::pipeline::RequestPipeline;
use crate::session::{FileStore, MemoryStore, SessionStore};
use crate::transport::{FilePart, HttpTransport, ReqwestTransport};

/// LegalLens API client.
///
/// Cheap to clone; every clone shares one session, one fallback flag and one
/// refresh coordinator.
#[derive(Debug, Clone)]
pub struct LensClient {
    pipeline: Arc<RequestPipeline>,
}

impl LensClient {
    /// Wire a client around an explicit transport and storage backend.
    pub fn new(
        config: &LensConfig,
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let session = SessionStore::new(store, &config.session);
        Self {
            pipeline: Arc::new(RequestPipeline::new(transport, session)),
        }
    }

    /// Production client: reqwest transport and a file-backed session under
    /// the profile directory. Falls back to in-memory storage when no
    /// directory can be resolved or opened.
    pub fn from_config(config: &LensConfig) -> LensResult<Self> {
        config.validate()?;

        let transport = ReqwestTransport::new(&config.api).map_err(|e| {
            LensError::InvalidRequest {
                reason: e.to_string(),
            }
        })?;

        let store: Arc<dyn KeyValueStore> = match config.session.resolved_profile_dir() {
            Some(dir) => match FileStore::open(&dir) {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "profile dir unusable, session will not persist");
                    Arc::new(MemoryStore::new())
                }
            },
            None => {
                warn!("no profile dir resolved, session will not persist");
                Arc::new(MemoryStore::new())
            }
        };

        info!(base_url = %config.api.base_url, "lens client ready");
        Ok(Self::new(config, Arc::new(transport), store))
    }

    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    // ─── Session ───────────────────────────────────────────

    pub fn session(&self) -> Session {
        self.pipeline.session().load()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn is_demo(&self) -> bool {
        self.pipeline.is_demo()
    }

    pub fn fallback_mode(&self) -> FallbackMode {
        self.pipeline.mode()
    }

    /// Forget the persisted session. Local only; the backend is not told.
    pub fn logout(&self) {
        self.pipeline.session().clear();
    }

    async fn call<T: DeserializeOwned>(&self, op: Operation) -> LensResult<T> {
        self.pipeline.call(&op).await
    }

    // ─── Auth ──────────────────────────────────────────────

    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> LensResult<AuthResponse> {
        let op = Operation::Login(LoginRequest {
            email: email.into(),
            password: password.into(),
        });
        let auth: AuthResponse = self.call(op).await?;
        self.pipeline.session().save(&auth.user, &auth.tokens);
        Ok(auth)
    }

    pub async fn register(&self, request: RegisterRequest) -> LensResult<AuthResponse> {
        let auth: AuthResponse = self.call(Operation::Register(request)).await?;
        self.pipeline.session().save(&auth.user, &auth.tokens);
        Ok(auth)
    }

    pub async fn current_user(&self) -> LensResult<UserProfile> {
        self.call(Operation::CurrentUser).await
    }

    // ─── Documents ─────────────────────────────────────────

    pub async fn upload_document(&self, file: FilePart) -> LensResult<UploadReceipt> {
        self.call(Operation::UploadDocument(file)).await
    }

    pub async fn list_documents(&self) -> LensResult<DocumentList> {
        self.call(Operation::ListDocuments).await
    }

    pub async fn document_content(&self, id: impl Into<String>) -> LensResult<DocumentContent> {
        self.call(Operation::DocumentContent { id: id.into() }).await
    }

    pub async fn delete_document(&self, id: impl Into<String>) -> LensResult<MessageResponse> {
        self.call(Operation::DeleteDocument { id: id.into() }).await
    }

    // ─── Search & chat ─────────────────────────────────────

    pub async fn search(&self, request: SearchRequest) -> LensResult<SearchResult> {
        self.call(Operation::Search(request)).await
    }

    pub async fn chat(&self, request: ChatRequest) -> LensResult<ChatResponse> {
        self.call(Operation::Chat(request)).await
    }

    pub async fn chat_status(&self) -> LensResult<ChatStatus> {
        self.call(Operation::ChatStatus).await
    }

    // ─── Stats & analytics ─────────────────────────────────

    pub async fn stats(&self) -> LensResult<Stats> {
        self.call(Operation::Stats).await
    }

    pub async fn analytics(&self) -> LensResult<Analytics> {
        self.call(Operation::Analytics).await
    }

    pub async fn recent_searches(&self, limit: Option<u32>) -> LensResult<RecentSearches> {
        let op = match limit {
            Some(limit) => Operation::RecentSearches { limit },
            None => Operation::recent_searches(),
        };
        self.call(op).await
    }

    pub async fn activity_log(&self, limit: Option<u32>) -> LensResult<ActivityLog> {
        let op = match limit {
            Some(limit) => Operation::ActivityLog { limit },
            None => Operation::activity_log(),
        };
        self.call(op).await
    }

    pub async fn system_info(&self) -> LensResult<SystemInfo> {
        self.call(Operation::SystemInfo).await
    }

    // ─── Legal intelligence ────────────────────────────────

    pub async fn key_terms(&self, document_id: impl Into<String>) -> LensResult<KeyTerms> {
        self.call(Operation::KeyTerms {
            document_id: document_id.into(),
        })
        .await
    }

    pub async fn classify_document(
        &self,
        document_id: impl Into<String>,
    ) -> LensResult<Classification> {
        self.call(Operation::ClassifyDocument {
            document_id: document_id.into(),
        })
        .await
    }

    pub async fn clause_library(&self) -> LensResult<ClauseLibrary> {
        self.call(Operation::ClauseLibrary).await
    }

    pub async fn search_clause(
        &self,
        clause_id: impl Into<String>,
        top_k: Option<u32>,
    ) -> LensResult<ClauseSearchResult> {
        let op = match top_k {
            Some(top_k) => Operation::SearchClause {
                clause_id: clause_id.into(),
                top_k,
            },
            None => Operation::search_clause(clause_id),
        };
        self.call(op).await
    }

    // ─── Bookmarks & matters ───────────────────────────────

    pub async fn add_bookmark(&self, bookmark: NewBookmark) -> LensResult<Bookmark> {
        self.call(Operation::AddBookmark(bookmark)).await
    }

    pub async fn bookmarks(&self, matter: Option<&str>) -> LensResult<BookmarkList> {
        self.call(Operation::Bookmarks {
            matter: matter.map(str::to_owned),
        })
        .await
    }

    pub async fn delete_bookmark(&self, id: u64) -> LensResult<MessageResponse> {
        self.call(Operation::DeleteBookmark { id }).await
    }

    pub async fn set_matter_tag(
        &self,
        document_id: impl Into<String>,
        tag: MatterTag,
    ) -> LensResult<MessageResponse> {
        self.call(Operation::SetMatterTag {
            document_id: document_id.into(),
            tag,
        })
        .await
    }

    pub async fn matter_tag(&self, document_id: impl Into<String>) -> LensResult<MatterTag> {
        self.call(Operation::MatterTag {
            document_id: document_id.into(),
        })
        .await
    }

    // ─── AI analysis ───────────────────────────────────────

    pub async fn run_analysis(
        &self,
        document_id: impl Into<String>,
        request: AnalyzeRequest,
    ) -> LensResult<AnalysisResult> {
        self.call(Operation::RunAnalysis {
            document_id: document_id.into(),
            request,
        })
        .await
    }

    pub async fn analyses(&self, document_id: impl Into<String>) -> LensResult<AnalysisSet> {
        self.call(Operation::Analyses {
            document_id: document_id.into(),
        })
        .await
    }

    pub async fn clear_analyses(
        &self,
        document_id: impl Into<String>,
    ) -> LensResult<ClearedAnalyses> {
        self.call(Operation::ClearAnalyses {
            document_id: document_id.into(),
        })
        .await
    }

    pub async fn expand_search(&self, query: impl Into<String>) -> LensResult<SearchExpansion> {
        self.call(Operation::ExpandSearch(SearchExpandRequest {
            query: query.into(),
        }))
        .await
    }
}
