//! Wire models mirroring the backend JSON contract.

mod ai;
mod analytics;
mod documents;
mod legal;
mod search;
mod session;

pub use ai::{
    AnalysisEntry, AnalysisResult, AnalysisSet, AnalysisType, AnalyzeRequest, ClearedAnalyses,
    SearchExpandRequest, SearchExpansion,
};
pub use analytics::{
    ActivityEntry, ActivityLog, Analytics, QueryCount, RecentSearch, RecentSearches,
    SearchAnalytics, Stats, StorageUsage, SystemInfo,
};
pub use documents::{
    DocumentContent, DocumentList, DocumentMetadata, DocumentPage, MessageResponse,
    ProcessingStatus, UploadReceipt,
};
pub use legal::{
    Bookmark, BookmarkList, Classification, ClauseLibrary, ClauseSearchResult, ClauseType,
    KeyTerms, MatterTag, NewBookmark,
};
pub use search::{ChatRequest, ChatResponse, ChatStatus, Citation, SearchRequest, SearchResult};
pub use session::{
    AuthResponse, LoginRequest, RefreshRequest, RegisterRequest, Session, TokenPair, UserProfile,
};
