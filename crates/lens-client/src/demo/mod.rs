//! Static responses served while the client is in demo mode.
//!
//! The provider never touches the network or the session store. Reads return
//! the bundled sample data set; writes echo their input (or a fresh id) so the
//! UI can keep working against a backend that is not there.

mod fixtures;

use lens_core::errors::LensResult;
use lens_core::models::{MessageResponse, ProcessingStatus, UploadReceipt};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::ops::Operation;

pub use fixtures::DEMO_NOTE;

#[derive(Debug, Default, Clone, Copy)]
pub struct StaticResponseProvider;

impl StaticResponseProvider {
    pub fn new() -> Self {
        Self
    }

    /// Synthesize the payload the backend would have returned for `op`.
    pub fn respond(&self, op: &Operation) -> LensResult<Value> {
        debug!(op = op.name(), "serving static response");
        match op {
            Operation::Login(req) => to_value(fixtures::auth(fixtures::user(
                Some(req.email.as_str()),
                None,
                None,
            ))),
            Operation::Register(req) => to_value(fixtures::auth(fixtures::user(
                Some(req.email.as_str()),
                Some(req.full_name.as_str()),
                Some(req.organization_name.as_str()),
            ))),
            Operation::CurrentUser => to_value(fixtures::user(None, None, None)),

            Operation::UploadDocument(file) => to_value(UploadReceipt {
                id: Uuid::new_v4().to_string(),
                filename: file.filename.clone(),
                status: ProcessingStatus::Ready,
                message: Some("Document processed (demo mode)".to_string()),
            }),
            Operation::ListDocuments => to_value(fixtures::documents()),
            Operation::DocumentContent { id } => to_value(fixtures::document_content(id)),
            Operation::DeleteDocument { .. } => message("Document deleted"),

            Operation::Search(req) => to_value(fixtures::search(&req.query)),
            Operation::Chat(_) => to_value(fixtures::chat()),
            Operation::ChatStatus => to_value(fixtures::chat_status()),

            Operation::Stats => to_value(fixtures::stats()),
            Operation::Analytics => to_value(fixtures::analytics()),
            Operation::RecentSearches { limit } => to_value(fixtures::recent_searches(*limit)),
            Operation::ActivityLog { limit } => to_value(fixtures::activity(*limit)),
            Operation::SystemInfo => to_value(fixtures::system_info()),

            Operation::KeyTerms { document_id } => to_value(fixtures::key_terms(document_id)),
            Operation::ClassifyDocument { document_id } => {
                to_value(fixtures::classification(document_id))
            }
            Operation::ClauseLibrary => to_value(fixtures::clauses()),
            Operation::SearchClause { clause_id, top_k } => {
                to_value(fixtures::clause_search(clause_id, *top_k))
            }

            Operation::AddBookmark(req) => to_value(fixtures::new_bookmark(req)),
            Operation::Bookmarks { matter } => to_value(fixtures::bookmarks(matter.as_deref())),
            Operation::DeleteBookmark { .. } => message("Bookmark deleted"),
            Operation::SetMatterTag { .. } => message("Matter tag updated"),
            Operation::MatterTag { .. } => to_value(fixtures::matter_tag()),

            Operation::RunAnalysis {
                document_id,
                request,
            } => to_value(fixtures::analysis(document_id, request.analysis_type)),
            Operation::Analyses { document_id } => to_value(fixtures::analyses(document_id)),
            Operation::ClearAnalyses { document_id } => {
                to_value(fixtures::cleared_analyses(document_id))
            }
            Operation::ExpandSearch(req) => to_value(fixtures::search_expansion(&req.query)),
        }
    }
}

fn to_value<T: Serialize>(payload: T) -> LensResult<Value> {
    Ok(serde_json::to_value(payload)?)
}

fn message(text: &str) -> LensResult<Value> {
    to_value(MessageResponse {
        message: text.to_string(),
    })
}
