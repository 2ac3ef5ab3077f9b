//! Sample data set served in demo mode.

use std::collections::BTreeMap;

use chrono::{Duration, SecondsFormat, Utc};
use lens_core::models::*;
use serde_json::{json, Map, Value};

const MSA: &str = "Master Services Agreement — Acme Corp.pdf";
const LICENSE: &str = "Software License Agreement.pdf";
const EMPLOYMENT: &str = "Employment Agreement — J. Smith.docx";
const NDA: &str = "Non-Disclosure Agreement.pdf";
const BOARD: &str = "Board Resolution — Q4 2024.pdf";

pub const DEMO_NOTE: &str =
    "*Note: This is demo data. Deploy the backend locally for real document analysis.*";

/// ISO-8601 timestamp `ms` milliseconds before now.
pub fn ago(ms: i64) -> String {
    (Utc::now() - Duration::milliseconds(ms)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now() -> String {
    ago(0)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn citation(id: &str, name: &str, page: u32, paragraph: u32, text: &str, score: f64) -> Citation {
    Citation {
        document_id: id.to_string(),
        document_name: name.to_string(),
        page: Some(page),
        paragraph: Some(paragraph),
        text: text.to_string(),
        score,
    }
}

pub fn citations() -> Vec<Citation> {
    vec![
        citation("demo-1", MSA, 4, 2, "The Service Provider shall indemnify, defend, and hold harmless the Client from and against any and all claims, damages, losses, costs, and expenses (including reasonable attorneys' fees) arising out of or related to any breach of this Agreement by the Service Provider.", 0.92),
        citation("demo-2", LICENSE, 7, 1, "IN NO EVENT SHALL EITHER PARTY'S AGGREGATE LIABILITY UNDER THIS AGREEMENT EXCEED THE TOTAL AMOUNTS PAID OR PAYABLE BY LICENSEE DURING THE TWELVE (12) MONTH PERIOD IMMEDIATELY PRECEDING THE EVENT GIVING RISE TO SUCH LIABILITY.", 0.87),
        citation("demo-3", EMPLOYMENT, 3, 3, "This Agreement shall be governed by and construed in accordance with the laws of the State of Delaware, without regard to its conflict of laws principles. Any disputes arising under this Agreement shall be resolved in the federal or state courts located in Wilmington, Delaware.", 0.84),
        citation("demo-1", MSA, 8, 1, "Either party may terminate this Agreement for convenience upon sixty (60) days' prior written notice to the other party. Upon termination, the Client shall pay the Service Provider for all services rendered through the effective date of termination.", 0.81),
        citation("demo-4", NDA, 2, 2, "\"Confidential Information\" means any and all non-public, proprietary, or confidential information disclosed by either party to the other, whether orally, in writing, or by inspection of tangible objects, including but not limited to trade secrets, business plans, financial data, and customer lists.", 0.79),
    ]
}

// ─── Auth ──────────────────────────────────────────────────

pub fn user(email: Option<&str>, full_name: Option<&str>, organization: Option<&str>) -> UserProfile {
    UserProfile {
        id: "demo-user".to_string(),
        email: email.unwrap_or("demo@legallens.dev").to_string(),
        full_name: full_name.unwrap_or("Demo User").to_string(),
        role: "admin".to_string(),
        organization_id: "demo-org".to_string(),
        organization_name: organization.unwrap_or("Demo Law Firm").to_string(),
    }
}

pub fn auth(user: UserProfile) -> AuthResponse {
    AuthResponse {
        user,
        tokens: TokenPair {
            access_token: "demo-access-token".to_string(),
            refresh_token: "demo-refresh-token".to_string(),
            token_type: "bearer".to_string(),
        },
    }
}

// ─── Documents ─────────────────────────────────────────────

fn document(
    id: &str,
    filename: &str,
    file_type: &str,
    file_size: u64,
    pages: u32,
    chunks: u32,
    uploaded_ms_ago: i64,
) -> DocumentMetadata {
    DocumentMetadata {
        id: id.to_string(),
        filename: filename.to_string(),
        file_type: file_type.to_string(),
        file_size,
        page_count: Some(pages),
        chunk_count: chunks,
        status: ProcessingStatus::Ready,
        error_message: None,
        uploaded_at: ago(uploaded_ms_ago),
        processed_at: Some(ago(uploaded_ms_ago - 400_000)),
    }
}

pub fn documents() -> DocumentList {
    let documents = vec![
        document("demo-1", MSA, ".pdf", 245_760, 12, 34, 86_400_000),
        document("demo-2", LICENSE, ".pdf", 189_440, 9, 26, 172_800_000),
        document("demo-3", EMPLOYMENT, ".docx", 98_304, 5, 15, 259_200_000),
        document("demo-4", NDA, ".pdf", 61_440, 3, 9, 345_600_000),
        document("demo-5", BOARD, ".pdf", 40_960, 2, 6, 432_000_000),
    ];
    DocumentList {
        total: documents.len() as u32,
        documents,
    }
}

pub fn document_content(id: &str) -> DocumentContent {
    let pages = vec![
        DocumentPage {
            page_number: 1,
            text: "MASTER SERVICES AGREEMENT\n\nThis Master Services Agreement (\"Agreement\") is entered into as of January 15, 2024 (\"Effective Date\"), by and between:\n\nAcme Corporation, a Delaware corporation (\"Client\"), with principal offices at 100 Innovation Drive, Wilmington, DE 19801;\n\nand\n\nTechServ Solutions LLC, a California limited liability company (\"Service Provider\"), with principal offices at 500 Market Street, San Francisco, CA 94105.\n\nWHEREAS, Client desires to engage Service Provider to provide certain professional services; and\n\nWHEREAS, Service Provider has the expertise and resources to provide such services;\n\nNOW, THEREFORE, in consideration of the mutual covenants and agreements set forth herein, the parties agree as follows:".to_string(),
        },
        DocumentPage {
            page_number: 2,
            text: "1. DEFINITIONS\n\n1.1 \"Services\" means the professional, technical, and consulting services to be provided by Service Provider as described in one or more Statements of Work.\n\n1.2 \"Statement of Work\" or \"SOW\" means a document executed by both parties that describes the specific Services to be performed, deliverables, timelines, and fees.\n\n1.3 \"Deliverables\" means all work product, documents, software, and materials created by Service Provider in the course of performing the Services.\n\n1.4 \"Confidential Information\" means any non-public information disclosed by either party, including but not limited to trade secrets, business plans, financial data, and technical information.\n\n2. SERVICES\n\n2.1 Service Provider shall perform the Services in a professional and workmanlike manner, consistent with industry standards.\n\n2.2 Service Provider shall assign qualified personnel to perform the Services.".to_string(),
        },
    ];
    DocumentContent {
        id: id.to_string(),
        filename: MSA.to_string(),
        total_pages: pages.len() as u32,
        pages,
    }
}

// ─── Search & chat ─────────────────────────────────────────

pub fn search(query: &str) -> SearchResult {
    let results = citations();
    SearchResult {
        query: query.to_string(),
        total_results: results.len() as u32,
        results,
    }
}

pub fn chat() -> ChatResponse {
    let answer = format!(
        "Based on the uploaded documents, I can provide the following analysis:\n\n\
         The Master Services Agreement between Acme Corporation and TechServ Solutions [1] contains standard indemnification provisions requiring the Service Provider to defend and hold harmless the Client from claims arising out of breach [1]. \
         The agreement also includes a limitation of liability clause capping aggregate liability at twelve months of fees paid [2].\n\n\
         Regarding governing law, the Employment Agreement specifies Delaware law as the governing jurisdiction [3], while the MSA follows similar Delaware choice-of-law provisions.\n\n\
         The termination provisions allow either party to terminate for convenience with 60 days' written notice [4], with payment obligations surviving through the effective termination date.\n\n{DEMO_NOTE}"
    );
    ChatResponse {
        answer,
        citations: citations().into_iter().take(4).collect(),
        ollama_available: true,
        follow_ups: strings(&[
            "What are the indemnification caps?",
            "Which agreements allow termination for convenience?",
            "Compare the governing law clauses",
        ]),
    }
}

pub fn chat_status() -> ChatStatus {
    ChatStatus {
        ollama_available: true,
        message: "Demo mode — Ollama simulated".to_string(),
    }
}

// ─── Stats & analytics ─────────────────────────────────────

pub fn stats() -> Stats {
    Stats {
        total_documents: 5,
        total_chunks: 90,
        documents_by_status: BTreeMap::from([("ready".to_string(), 5)]),
        documents_by_type: BTreeMap::from([(".pdf".to_string(), 4), (".docx".to_string(), 1)]),
        ollama_status: "connected".to_string(),
    }
}

pub fn analytics() -> Analytics {
    let top = [
        ("indemnification", 8),
        ("termination clause", 6),
        ("governing law delaware", 5),
        ("limitation of liability", 4),
        ("confidentiality obligations", 4),
        ("force majeure", 3),
    ];
    Analytics {
        search: SearchAnalytics {
            total_searches: 47,
            average_results: 4.2,
            top_queries: top
                .iter()
                .map(|(query, count)| QueryCount {
                    query: (*query).to_string(),
                    count: *count,
                })
                .collect(),
        },
        storage: StorageUsage {
            uploads_bytes: 635_904,
            index_bytes: 167_936,
        },
    }
}

pub fn recent_searches(limit: u32) -> RecentSearches {
    let rows = [
        ("indemnification hold harmless", 5, 3_600_000),
        ("termination for convenience", 3, 7_200_000),
        ("governing law delaware", 4, 14_400_000),
        ("confidential information definition", 6, 28_800_000),
    ];
    RecentSearches {
        searches: rows
            .iter()
            .take(limit as usize)
            .map(|(query, result_count, ms)| RecentSearch {
                query: (*query).to_string(),
                result_count: *result_count,
                timestamp: ago(*ms),
            })
            .collect(),
    }
}

pub fn activity(limit: u32) -> ActivityLog {
    let rows = [
        ("search", "\"indemnification hold harmless\" — 5 results", 3_600_000),
        ("document_processed", "Master Services Agreement — 12 pages, 34 chunks", 86_400_000),
        ("document_uploaded", "Master Services Agreement — Acme Corp.pdf (0.2 MB)", 86_400_000),
        ("clause_search", "Indemnification — 3 results", 90_000_000),
        ("search", "\"governing law delaware\" — 4 results", 100_000_000),
        ("document_processed", "Software License Agreement — 9 pages, 26 chunks", 172_800_000),
        ("bookmark_added", "Master Services Agreement — The Service Provider shall indemnify...", 180_000_000),
        ("document_uploaded", "Non-Disclosure Agreement.pdf (0.1 MB)", 345_600_000),
    ];
    ActivityLog {
        activity: rows
            .iter()
            .take(limit as usize)
            .map(|(action, detail, ms)| ActivityEntry {
                action: (*action).to_string(),
                detail: (*detail).to_string(),
                timestamp: ago(*ms),
            })
            .collect(),
    }
}

pub fn system_info() -> SystemInfo {
    SystemInfo {
        python_version: "3.13.0".to_string(),
        platform: "macOS-15.3-arm64-arm-64bit".to_string(),
        machine: "arm64".to_string(),
        uploads_dir: "/Users/demo/legal-lens/backend/data/uploads".to_string(),
        index_dir: "/Users/demo/legal-lens/backend/data/chroma_db".to_string(),
        uploads_size: 635_904,
        index_size: 167_936,
    }
}

// ─── Legal intelligence ────────────────────────────────────

pub fn key_terms(document_id: &str) -> KeyTerms {
    KeyTerms {
        document_id: document_id.to_string(),
        document_name: MSA.to_string(),
        document_type: "Contract".to_string(),
        parties: strings(&["Acme Corporation", "TechServ Solutions LLC"]),
        dates: strings(&["January 15, 2024", "December 31, 2025"]),
        monetary_amounts: strings(&["$500,000", "$2,500,000"]),
        defined_terms: strings(&[
            "Services",
            "Statement of Work",
            "Deliverables",
            "Confidential Information",
            "Effective Date",
        ]),
        governing_law: strings(&["Delaware"]),
        references: strings(&["§ 2.1", "§ 4.3", "§ 7.2"]),
    }
}

pub fn classification(document_id: &str) -> Classification {
    Classification {
        document_id: document_id.to_string(),
        document_type: "Contract".to_string(),
    }
}

fn clause(id: &str, name: &str, description: &str, category: &str) -> ClauseType {
    ClauseType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        queries: Vec::new(),
        category: category.to_string(),
    }
}

pub fn clauses() -> ClauseLibrary {
    ClauseLibrary {
        clauses: vec![
            clause("indemnification", "Indemnification", "Clauses requiring one party to compensate the other for losses", "Risk Allocation"),
            clause("limitation_of_liability", "Limitation of Liability", "Caps on damages and liability exclusions", "Risk Allocation"),
            clause("termination", "Termination", "Conditions and procedures for ending the agreement", "Term & Termination"),
            clause("force_majeure", "Force Majeure", "Excuses for non-performance due to extraordinary events", "Risk Allocation"),
            clause("confidentiality", "Confidentiality / NDA", "Obligations to protect confidential information", "Information Protection"),
            clause("governing_law", "Governing Law & Jurisdiction", "Choice of law and dispute resolution forum", "Dispute Resolution"),
            clause("intellectual_property", "Intellectual Property", "Ownership, licensing, and assignment of IP rights", "IP & Ownership"),
            clause("representations_warranties", "Representations & Warranties", "Statements of fact and promises about conditions", "Assurances"),
            clause("assignment", "Assignment & Delegation", "Restrictions on transferring rights or obligations", "General Provisions"),
            clause("notices", "Notices", "Requirements for formal communications between parties", "General Provisions"),
            clause("non_compete", "Non-Compete / Non-Solicitation", "Restrictions on competition and soliciting clients or employees", "Restrictive Covenants"),
            clause("payment_terms", "Payment Terms", "Payment schedules, invoicing, late fees", "Financial"),
        ],
    }
}

/// `limitation_of_liability` -> `Limitation Of Liability`.
pub fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn clause_search(clause_id: &str, top_k: u32) -> ClauseSearchResult {
    let results: Vec<Citation> = citations()
        .into_iter()
        .take((top_k as usize).min(3))
        .collect();
    ClauseSearchResult {
        clause: clause(clause_id, &title_case(clause_id), "", ""),
        total_results: results.len() as u32,
        results,
    }
}

// ─── Bookmarks & matters ───────────────────────────────────

pub fn bookmarks(matter: Option<&str>) -> BookmarkList {
    let all = vec![
        Bookmark {
            id: 1,
            query: "indemnification".to_string(),
            document_name: MSA.to_string(),
            page: Some(4),
            text: "The Service Provider shall indemnify, defend, and hold harmless the Client from and against any and all claims, damages, losses...".to_string(),
            note: "Key indemnification clause — review with partner".to_string(),
            matter: "2024-001".to_string(),
            created_at: ago(180_000_000),
        },
        Bookmark {
            id: 2,
            query: "governing law".to_string(),
            document_name: EMPLOYMENT.to_string(),
            page: Some(3),
            text: "This Agreement shall be governed by and construed in accordance with the laws of the State of Delaware...".to_string(),
            note: String::new(),
            matter: "2024-003".to_string(),
            created_at: ago(260_000_000),
        },
    ];
    let bookmarks = match matter {
        Some(m) if !m.is_empty() => all.into_iter().filter(|b| b.matter == m).collect(),
        _ => all,
    };
    BookmarkList { bookmarks }
}

pub fn new_bookmark(req: &NewBookmark) -> Bookmark {
    Bookmark {
        id: 3,
        query: req.query.clone().unwrap_or_default(),
        document_name: req.document_name.clone(),
        page: req.page,
        text: req.text.clone(),
        note: req.note.clone().unwrap_or_default(),
        matter: req.matter.clone().unwrap_or_default(),
        created_at: now(),
    }
}

pub fn matter_tag() -> MatterTag {
    MatterTag {
        matter: "2024-001".to_string(),
        client: "Acme Corporation".to_string(),
        tags: strings(&["contract", "active"]),
    }
}

// ─── AI analysis ───────────────────────────────────────────

fn analysis_details(kind: AnalysisType) -> Map<String, Value> {
    let details = match kind {
        AnalysisType::Summary => json!({
            "title": "Master Services Agreement — Acme / TechServ",
            "summary": "Acme Corporation engages TechServ Solutions LLC to provide professional services under Statements of Work. The agreement allocates risk through mutual indemnities and a twelve-month liability cap, and is governed by Delaware law.",
            "document_type": "Master Services Agreement",
            "key_points": [
                "Services are scoped through individual Statements of Work",
                "Service Provider indemnifies Client for breach",
                "Liability capped at fees paid in the prior twelve months",
                "Either party may terminate for convenience on 60 days' notice",
                "Delaware governing law and Wilmington venue"
            ],
            "parties": ["Acme Corporation", "TechServ Solutions LLC"]
        }),
        AnalysisType::Risks => json!({
            "overall_risk": "medium",
            "risk_score": 45,
            "risks": [
                {
                    "clause": "§ 7.2 Limitation of Liability",
                    "risk_level": "medium",
                    "description": "The cap excludes indemnification obligations only implicitly.",
                    "recommendation": "Carve out indemnities and confidentiality breaches explicitly."
                },
                {
                    "clause": "§ 8.1 Termination for Convenience",
                    "risk_level": "low",
                    "description": "Sixty days' notice may be short for transition of critical services.",
                    "recommendation": "Add a transition assistance obligation."
                }
            ],
            "summary": "Balanced commercial terms with moderate exposure around the liability cap."
        }),
        AnalysisType::Checklist => json!({
            "items": [
                { "item": "Confirm SOW templates are attached", "status": "pending" },
                { "item": "Verify insurance certificates", "status": "pending" },
                { "item": "Review IP assignment language", "status": "done" }
            ],
            "summary": "Three follow-up items before execution."
        }),
        AnalysisType::Obligations => json!({
            "obligations": [
                { "party": "TechServ Solutions LLC", "obligation": "Perform Services in a professional and workmanlike manner", "deadline": null },
                { "party": "Acme Corporation", "obligation": "Pay for services rendered through termination", "deadline": "On termination" }
            ],
            "summary": "Performance obligations sit with the Service Provider; payment obligations with the Client."
        }),
        AnalysisType::Timeline => json!({
            "events": [
                { "date": "January 15, 2024", "event": "Effective Date" },
                { "date": "December 31, 2025", "event": "Initial term ends" }
            ],
            "summary": "Two-year initial term from the Effective Date."
        }),
    };
    match details {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

pub fn analysis(document_id: &str, kind: AnalysisType) -> AnalysisResult {
    AnalysisResult {
        document_id: document_id.to_string(),
        analysis_type: kind,
        cached: false,
        details: analysis_details(kind),
    }
}

pub fn analyses(document_id: &str) -> AnalysisSet {
    let created_at = ago(3_600_000);
    let analyses = [AnalysisType::Summary, AnalysisType::Risks]
        .into_iter()
        .map(|kind| {
            let entry = AnalysisEntry {
                result: Value::Object(analysis_details(kind)),
                created_at: Some(created_at.clone()),
            };
            (kind, entry)
        })
        .collect();
    AnalysisSet {
        document_id: document_id.to_string(),
        analyses,
    }
}

pub fn cleared_analyses(document_id: &str) -> ClearedAnalyses {
    ClearedAnalyses {
        message: "Cleared 0 cached analyses".to_string(),
        document_id: document_id.to_string(),
    }
}

pub fn search_expansion(query: &str) -> SearchExpansion {
    SearchExpansion {
        original: query.to_string(),
        suggestions: vec![
            format!("{query} clause"),
            format!("{query} provision"),
            format!("{query} obligations"),
            format!("{query} exceptions"),
        ],
        legal_terms: strings(&["indemnity", "hold harmless", "limitation of liability"]),
    }
}
