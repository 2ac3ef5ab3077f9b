//! AI analysis request/response types.
//!
//! Analysis bodies are produced by a language model and vary by type, so
//! everything beyond the envelope fields is kept as raw JSON.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Summary,
    Risks,
    Checklist,
    Obligations,
    Timeline,
}

impl AnalysisType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Risks => "risks",
            Self::Checklist => "checklist",
            Self::Obligations => "obligations",
            Self::Timeline => "timeline",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub analysis_type: AnalysisType,
    #[serde(default)]
    pub force_refresh: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_id: String,
    pub analysis_type: AnalysisType,
    #[serde(default)]
    pub cached: bool,
    /// Type-specific fields (`summary`, `risks`, `key_points`, ...).
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisEntry {
    pub result: Value,
    pub created_at: Option<String>,
}

/// Every cached analysis for one document, keyed by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSet {
    pub document_id: String,
    pub analyses: BTreeMap<AnalysisType, AnalysisEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearedAnalyses {
    pub message: String,
    pub document_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchExpandRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchExpansion {
    pub original: String,
    pub suggestions: Vec<String>,
    pub legal_terms: Vec<String>,
}
