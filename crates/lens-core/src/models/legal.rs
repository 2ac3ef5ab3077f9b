use serde::{Deserialize, Serialize};

/// Entities extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerms {
    pub document_id: String,
    pub document_name: String,
    pub document_type: String,
    pub parties: Vec<String>,
    pub dates: Vec<String>,
    pub monetary_amounts: Vec<String>,
    pub defined_terms: Vec<String>,
    pub governing_law: Vec<String>,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub document_id: String,
    pub document_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub queries: Vec<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseLibrary {
    pub clauses: Vec<ClauseType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseSearchResult {
    pub clause: ClauseType,
    pub results: Vec<super::Citation>,
    pub total_results: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: u64,
    pub query: String,
    pub document_name: String,
    pub page: Option<u32>,
    pub text: String,
    pub note: String,
    pub matter: String,
    pub created_at: String,
}

/// Body of a bookmark creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub document_name: String,
    #[serde(default)]
    pub page: Option<u32>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkList {
    pub bookmarks: Vec<Bookmark>,
}

/// Client/matter labelling of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatterTag {
    pub matter: String,
    pub client: String,
    pub tags: Vec<String>,
}
